//! Navigation tracker and feedback message types.

use std::fmt;

use crate::{error::ValidationErrors, models::Stage};

/// The four-stage navigation tracker with the active stage marked.
///
/// ```rust
/// use ordercraft_core::{display::StageProgress, models::Stage};
///
/// let tracker = StageProgress::new(Stage::ContractTerms).to_string();
/// assert!(tracker.contains("**3. Contract Terms** (current)"));
/// ```
pub struct StageProgress {
    pub current: Stage,
}

impl StageProgress {
    pub fn new(current: Stage) -> Self {
        Self { current }
    }
}

impl fmt::Display for StageProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stage in Stage::ALL {
            let marker = if stage < self.current { "[x]" } else { "[ ]" };
            if stage == self.current {
                writeln!(f, "- {marker} **{}. {}** (current)", stage.number(), stage.title())?;
            } else {
                writeln!(f, "- {marker} {}. {}", stage.number(), stage.title())?;
            }
        }
        Ok(())
    }
}

/// Field errors of a rejected submission as a markdown list.
pub struct FieldErrors<'a>(pub &'a ValidationErrors);

impl fmt::Display for FieldErrors<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Please correct the following:")?;
        writeln!(f)?;
        for error in self.0 {
            writeln!(f, "- **{}**: {}", error.field, error.message)?;
        }
        Ok(())
    }
}

/// Wrapper type for displaying operation confirmation messages.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {}",
            if self.success { "Success:" } else { "Error:" },
            self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_progress_marks_completed_and_current() {
        let output = StageProgress::new(Stage::ProductSelection).to_string();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "- [x] 1. Customer Information");
        assert_eq!(lines[1], "- [ ] **2. Product Selection** (current)");
        assert_eq!(lines[3], "- [ ] 4. Review & Finalize");
    }

    #[test]
    fn test_field_errors_list_every_field() {
        let mut errors = ValidationErrors::new();
        errors.push("startDate", "Start date is required");
        errors.push("customDuration", "Custom duration must be at least 1 month");
        let output = FieldErrors(&errors).to_string();
        assert!(output.contains("- **startDate**: Start date is required"));
        assert!(output.contains("- **customDuration**:"));
    }

    #[test]
    fn test_operation_status_display() {
        let success = OperationStatus::success("Moved to stage 2");
        assert!(format!("{success}").contains("Success:"));

        let failure = OperationStatus::failure("Unknown add-on");
        assert!(format!("{failure}").contains("Error:"));
    }
}
