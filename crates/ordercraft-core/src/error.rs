//! Error types for the ordercraft library.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::models::Stage;

/// Comprehensive error type for all wizard operations.
#[derive(Error, Debug)]
pub enum WizardError {
    /// One or more fields of a stage submission failed validation
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),
    /// Navigation requested to a stage outside 1..=4
    #[error("Stage {requested} is out of range (expected 1-4)")]
    OutOfRange { requested: i64 },
    /// Input of one stage was submitted to another
    #[error("Input for stage {} cannot be submitted to stage {}", input.number(), stage.number())]
    StageMismatch { stage: Stage, input: Stage },
    /// Operation requires a stage that is not the active one
    #[error("{required} is not the active stage (currently at {current})")]
    InactiveStage { required: Stage, current: Stage },
    /// Catalog document is malformed or inconsistent
    #[error("Catalog error: {message}")]
    Catalog { message: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The review was finalized and must be reopened before editing
    #[error("Order is finalized; return to the review before changing add-ons")]
    Finalized,
}

/// A single field-scoped validation failure.
///
/// Field names use the camelCase form the rendering layer binds to, with
/// dotted paths for nested input (`address.zipCode`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Builder for creating validation errors.
pub struct ValidationErrorBuilder {
    field: String,
}

impl ValidationErrorBuilder {
    /// Create a new validation error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given message.
    pub fn with_message(self, message: impl Into<String>) -> ValidationError {
        ValidationError {
            field: self.field,
            message: message.into(),
        }
    }
}

impl ValidationError {
    /// Creates a builder for the given field.
    pub fn field(field: impl Into<String>) -> ValidationErrorBuilder {
        ValidationErrorBuilder::new(field)
    }
}

/// All field errors produced by one stage submission, in rule order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure for `field`.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0
            .push(ValidationError::field(field).with_message(message));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    /// Returns the error recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&ValidationError> {
        self.0.iter().find(|e| e.field == field)
    }

    /// Returns true when a failure was recorded for `field`.
    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// Field names in the order they were reported.
    pub fn fields(&self) -> Vec<&str> {
        self.0.iter().map(|e| e.field.as_str()).collect()
    }

    /// Converts the collection into a result: `Ok(value)` when nothing was
    /// recorded, otherwise `WizardError::Validation`.
    pub fn into_result<T>(self, value: T) -> Result<T> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(WizardError::Validation(self))
        }
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl WizardError {
    /// Creates a catalog error with the given message.
    pub fn catalog(message: impl Into<String>) -> Self {
        WizardError::Catalog {
            message: message.into(),
        }
    }

    /// Returns the field errors if this is a validation failure.
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            WizardError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Extension trait for mapping third-party errors into catalog errors with
/// context.
pub trait CatalogResultExt<T> {
    /// Map the error into `WizardError::Catalog` prefixed with `message`.
    fn catalog_context(self, message: &str) -> Result<T>;
}

impl<T, E> CatalogResultExt<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn catalog_context(self, message: &str) -> Result<T> {
        self.map_err(|e| WizardError::Catalog {
            message: format!("{message}: {e}"),
        })
    }
}

/// Result type alias for wizard operations
pub type Result<T> = std::result::Result<T, WizardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_keep_report_order() {
        let mut errors = ValidationErrors::new();
        errors.push("customerName", "Customer account is required");
        errors.push("address.city", "City is required");

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.fields(), vec!["customerName", "address.city"]);
        assert!(errors.contains("address.city"));
        assert!(!errors.contains("address.state"));
        assert_eq!(
            errors.to_string(),
            "customerName: Customer account is required; address.city: City is required"
        );
    }

    #[test]
    fn test_into_result() {
        assert_eq!(ValidationErrors::new().into_result(7).unwrap(), 7);

        let mut errors = ValidationErrors::new();
        errors.push("startDate", "Start date is required");
        let err = errors.into_result(()).unwrap_err();
        let fields = err.validation_errors().expect("validation error");
        assert_eq!(fields.fields(), vec!["startDate"]);
    }

    #[test]
    fn test_out_of_range_message() {
        let err = WizardError::OutOfRange { requested: 5 };
        assert_eq!(err.to_string(), "Stage 5 is out of range (expected 1-4)");
    }
}
