//! Error handling utilities for MCP server

use ordercraft_core::{WizardError, display::FieldErrors};
use rmcp::{
    ErrorData,
    model::{CallToolResult, Content},
};

/// Outcome of a session operation as seen by the MCP client.
///
/// Field validation failures are ordinary tool results flagged as errors so
/// the client can read the messages and resubmit. Everything else is a
/// protocol error.
pub fn to_tool_result(
    message: &str,
    error: WizardError,
) -> Result<CallToolResult, ErrorData> {
    match error {
        WizardError::Validation(errors) => Ok(CallToolResult::error(vec![Content::text(
            FieldErrors(&errors).to_string(),
        )])),
        other => Err(to_mcp_error(message, &other)),
    }
}

/// Helper to convert wizard errors to MCP errors
pub fn to_mcp_error(message: &str, error: &WizardError) -> ErrorData {
    match error {
        WizardError::OutOfRange { .. }
        | WizardError::StageMismatch { .. }
        | WizardError::InactiveStage { .. }
        | WizardError::Finalized
        | WizardError::Validation(_) => {
            ErrorData::invalid_params(format!("{message}: {error}"), None)
        }
        _ => ErrorData::internal_error(format!("{message}: {error}"), None),
    }
}
