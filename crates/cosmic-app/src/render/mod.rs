//! Rendering module for Cosmic Architect

mod renderer;

pub use renderer::Renderer;
