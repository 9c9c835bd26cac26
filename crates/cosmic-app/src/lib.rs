//! # Cosmic Architect - The Origin of Life
//!
//! A single-window educational toy: answer a fixed sequence of questions
//! about planetary formation while a procedurally generated land/water
//! planet reacts to the water-amount choice.

pub mod app;
pub mod config;
pub mod render;
pub mod ui;

pub use app::App;
