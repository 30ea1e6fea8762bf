//! Stage navigation state machine.

use log::debug;

use crate::{
    error::{Result, WizardError},
    models::Stage,
};

/// Tracks the active stage.
///
/// Navigation is permissive: moving forward does not require the current
/// stage to have been submitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StageController {
    current: Stage,
}

impl StageController {
    /// Starts at stage 1.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Stage {
        self.current
    }

    /// Moves one stage forward; stays on the last stage.
    pub fn advance(&mut self) -> Stage {
        if let Some(next) = self.current.next() {
            debug!("stage {} -> {}", self.current.number(), next.number());
            self.current = next;
        }
        self.current
    }

    /// Moves one stage back; stays on the first stage.
    pub fn retreat(&mut self) -> Stage {
        if let Some(previous) = self.current.previous() {
            debug!("stage {} -> {}", self.current.number(), previous.number());
            self.current = previous;
        }
        self.current
    }

    /// Jumps to a stage by its one-based number.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::OutOfRange` when `n` is not in 1..=4; the
    /// current stage is left unchanged.
    pub fn go_to(&mut self, n: i64) -> Result<Stage> {
        let stage = Stage::from_number(n).ok_or(WizardError::OutOfRange { requested: n })?;
        debug!("stage {} -> {}", self.current.number(), stage.number());
        self.current = stage;
        Ok(stage)
    }

    pub(crate) fn set(&mut self, stage: Stage) {
        self.current = stage;
    }
}
