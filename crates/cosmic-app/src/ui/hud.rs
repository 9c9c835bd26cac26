//! HUD overlay for Cosmic Architect

use egui::{Align2, Color32};

/// Stats for the HUD display
pub struct HudStats {
    pub fps: f32,
    pub show_fps: bool,
    pub water_fraction: u8,
    pub flow_complete: bool,
}

/// Show the HUD overlay
pub fn show_hud(ctx: &egui::Context, stats: &HudStats) {
    egui::Area::new(egui::Id::new("cosmic_hud"))
        .anchor(Align2::RIGHT_TOP, [-10.0, 10.0])
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(Color32::from_rgba_unmultiplied(0, 0, 0, 180))
                .inner_margin(8.0)
                .outer_margin(0.0)
                .corner_radius(4.0)
                .show(ui, |ui| {
                    if stats.show_fps {
                        ui.label(format!("FPS: {:.0}", stats.fps));
                    }
                    ui.label(format!("Water: {}%", stats.water_fraction));
                    if stats.flow_complete {
                        ui.colored_label(Color32::GREEN, "PLANET COMPLETE");
                    }
                });
        });
}
