//! Question panel: current prompt plus one button per answer option

use egui::{Color32, RichText, Vec2};

use cosmic_core::flow::QuestionFlow;

/// One clickable answer bound to its option index
///
/// The click handler reads the bound index from this struct instead of a
/// captured loop variable.
pub struct OptionControl {
    pub label: &'static str,
    pub option_index: usize,
}

const BUTTON_COLOR: Color32 = Color32::from_rgb(0, 100, 255);
const BUTTON_SIZE: Vec2 = Vec2::new(400.0, 50.0);

/// Show the current question while the flow is non-terminal
///
/// Returns the option index the user clicked this frame, if any.
pub fn show_questions(ctx: &egui::Context, flow: &QuestionFlow) -> Option<usize> {
    let question = flow.current_question()?;

    let controls: Vec<OptionControl> = question
        .options
        .iter()
        .enumerate()
        .map(|(option_index, &label)| OptionControl {
            label,
            option_index,
        })
        .collect();

    let mut clicked = None;
    egui::Area::new(egui::Id::new("question_panel"))
        .fixed_pos([50.0, 100.0])
        .show(ctx, |ui| {
            ui.label(
                RichText::new(question.prompt)
                    .size(32.0)
                    .color(Color32::WHITE),
            );
            ui.add_space(40.0);

            for control in &controls {
                let button = egui::Button::new(
                    RichText::new(control.label)
                        .size(20.0)
                        .color(Color32::WHITE),
                )
                .fill(BUTTON_COLOR)
                .min_size(BUTTON_SIZE);

                if ui.add(button).clicked() {
                    clicked = Some(control.option_index);
                }
                ui.add_space(10.0);
            }
        });

    clicked
}
