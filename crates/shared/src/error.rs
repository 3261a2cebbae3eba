use thiserror::Error;

/// Message shown when the server rejects a request without a readable `detail`.
pub const GENERATION_FAILED_FALLBACK: &str = "Failed to generate PDF. Please try again.";

/// Every way a single submission can end without a saved document.
///
/// The three validation variants are raised before any I/O and are
/// user-correctable. The rest are terminal for the attempt and get logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Please enter a single keyword (e.g., Investment).")]
    InvalidKeyword,
    #[error("Please enter a valid number of pages (1-5).")]
    InvalidPageCount,
    #[error("Please fill in all fields.")]
    MissingField,
    #[error("{0}")]
    GenerationFailed(String),
    #[error("{0}")]
    TransportFailure(String),
    #[error("failed to save document: {0}")]
    SaveFailed(String),
}

impl SubmitError {
    pub fn generation_failed(detail: Option<&str>) -> Self {
        Self::GenerationFailed(detail.unwrap_or(GENERATION_FAILED_FALLBACK).to_string())
    }

    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidKeyword | Self::InvalidPageCount | Self::MissingField
        )
    }

    /// Text for the error surface. Validation messages stand alone, anything
    /// that happened after the request was issued is prefixed with `Error: `.
    pub fn user_message(&self) -> String {
        if self.is_validation() {
            self.to_string()
        } else {
            format!("Error: {self}")
        }
    }
}
