//! Two-phase decision state machine driving planet generation
//!
//! Questions are presented in a fixed order across two phases. Answering the
//! water-amount question regenerates the planet surface; every other answer
//! only advances the sequence. There is no back-navigation.

pub mod questions;

use thiserror::Error;

use crate::planet::{PlanetConditions, PlanetState};
use questions::{PHASES, Question, WATER_FRACTION_BY_OPTION, WATER_QUESTION};

/// Invalid static question data, checked once at startup
#[derive(Debug, Error)]
pub enum FlowError {
    #[error("phase {0} has no questions")]
    EmptyPhase(usize),
    #[error("question {1} in phase {0} has no options")]
    EmptyOptions(usize, usize),
}

/// Position in the fixed question sequence
///
/// Terminal once the phase index reaches the phase count; from then on no
/// question is current and `choose` is a no-op.
pub struct QuestionFlow {
    phase: usize,
    question: usize,
}

impl QuestionFlow {
    pub fn new() -> Self {
        Self {
            phase: 0,
            question: 0,
        }
    }

    /// Check the static tables before the flow is driven
    pub fn validate() -> Result<(), FlowError> {
        for (phase_idx, phase) in PHASES.iter().enumerate() {
            if phase.is_empty() {
                return Err(FlowError::EmptyPhase(phase_idx));
            }
            for (question_idx, question) in phase.iter().enumerate() {
                if question.options.is_empty() {
                    return Err(FlowError::EmptyOptions(phase_idx, question_idx));
                }
            }
        }
        Ok(())
    }

    pub fn is_terminal(&self) -> bool {
        self.phase >= PHASES.len()
    }

    /// Currently displayed question, `None` once terminal
    pub fn current_question(&self) -> Option<&'static Question> {
        PHASES.get(self.phase).map(|phase| &phase[self.question])
    }

    pub fn phase(&self) -> usize {
        self.phase
    }

    pub fn question(&self) -> usize {
        self.question
    }

    /// Apply the chosen option's effect, then advance to the next question
    ///
    /// Out-of-range option indices are ignored without advancing.
    pub fn choose(
        &mut self,
        option_index: usize,
        conditions: &mut PlanetConditions,
        planet: &mut PlanetState,
    ) {
        let Some(question) = self.current_question() else {
            return;
        };
        if option_index >= question.options.len() {
            log::warn!(
                "ignoring out-of-range option {} for phase {} question {}",
                option_index,
                self.phase,
                self.question
            );
            return;
        }

        self.apply_effect(option_index, conditions, planet);
        self.advance();
    }

    /// Side effect of an accepted answer, if any
    ///
    /// Only the water-amount answer is wired to the planet surface.
    /// TODO: wire the formation answers (size, atmosphere, distance, geology)
    /// into the matching PlanetConditions fields.
    fn apply_effect(
        &self,
        option_index: usize,
        conditions: &mut PlanetConditions,
        planet: &mut PlanetState,
    ) {
        if (self.phase, self.question) == WATER_QUESTION {
            let water = WATER_FRACTION_BY_OPTION[option_index];
            conditions.water = water;
            planet.regenerate(water);
        }
    }

    fn advance(&mut self) {
        self.question += 1;
        if self.question >= PHASES[self.phase].len() {
            self.question = 0;
            self.phase += 1;
            if self.is_terminal() {
                log::info!("question flow complete, planet is final");
            }
        }
    }
}

impl Default for QuestionFlow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh_state() -> (QuestionFlow, PlanetConditions, PlanetState) {
        (
            QuestionFlow::new(),
            PlanetConditions::default(),
            PlanetState::new(42),
        )
    }

    #[test]
    fn test_static_tables_validate() {
        QuestionFlow::validate().expect("fixed question tables must be valid");
    }

    #[test]
    fn test_terminates_after_all_questions() {
        let (mut flow, mut conditions, mut planet) = fresh_state();
        let total: usize = PHASES.iter().map(|p| p.len()).sum();
        assert_eq!(total, 8);

        for i in 0..total {
            assert!(!flow.is_terminal(), "terminal too early at answer {i}");
            assert!(flow.current_question().is_some());
            flow.choose(0, &mut conditions, &mut planet);
        }

        assert!(flow.is_terminal());
        assert_eq!(flow.phase(), 2);
        assert!(flow.current_question().is_none());
    }

    #[test]
    fn test_choose_after_terminal_is_noop() {
        let (mut flow, mut conditions, mut planet) = fresh_state();
        for _ in 0..8 {
            flow.choose(0, &mut conditions, &mut planet);
        }

        flow.choose(0, &mut conditions, &mut planet);
        assert!(flow.is_terminal());
        assert_eq!(flow.phase(), 2);
    }

    #[test]
    fn test_out_of_range_option_does_not_advance() {
        let (mut flow, mut conditions, mut planet) = fresh_state();

        flow.choose(99, &mut conditions, &mut planet);
        assert_eq!(flow.phase(), 0);
        assert_eq!(flow.question(), 0);
    }

    #[test]
    fn test_only_water_question_touches_planet() {
        let (mut flow, mut conditions, mut planet) = fresh_state();
        let initial_raster = planet.raster().clone();
        let initial_water = planet.water_fraction();

        // Phase 0 (4 questions) and the first surface question are unwired.
        for _ in 0..5 {
            flow.choose(0, &mut conditions, &mut planet);
            assert_eq!(planet.water_fraction(), initial_water);
            assert_eq!(*planet.raster(), initial_raster);
            assert_eq!(conditions.water, 0);
        }
        assert_eq!((flow.phase(), flow.question()), WATER_QUESTION);
    }

    #[test]
    fn test_water_options_map_to_fractions() {
        for (option_index, expected) in [(0, 10u8), (1, 50u8), (2, 80u8)] {
            let (mut flow, mut conditions, mut planet) = fresh_state();
            // Navigate to the water-amount question.
            for _ in 0..5 {
                flow.choose(0, &mut conditions, &mut planet);
            }

            flow.choose(option_index, &mut conditions, &mut planet);
            assert_eq!(conditions.water, expected);
            assert_eq!(planet.water_fraction(), expected);
        }
    }
}
