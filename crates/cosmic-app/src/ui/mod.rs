//! UI module for Cosmic Architect

mod hud;
mod panel;

pub use hud::{HudStats, show_hud};
pub use panel::{OptionControl, show_questions};
