use serde::{Deserialize, Serialize};

/// Route on the generation server that turns a [`GeneratePdfRequest`] into a document.
pub const GENERATE_PDF_PATH: &str = "/api/v1/generate-pdf/";

/// JSON body posted to the generation endpoint.
///
/// Only built through [`crate::domain::FormInput::validate`], so every value
/// here has already passed the client-side checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratePdfRequest {
    pub word: String,
    pub pages: u8,
    pub company: String,
    pub title: String,
    pub author: String,
    pub subject: String,
}

impl GeneratePdfRequest {
    /// Name the server gives the document when it sends no `Content-Disposition`.
    /// Path separators in the keyword become `_` so the name stays a single file.
    pub fn fallback_filename(&self) -> String {
        let word = self.word.replace(['/', '\\'], "_");
        format!("generated_{word}.pdf")
    }
}

/// Error body returned by the generation server on a non-success status.
///
/// `detail` is a plain string for handled failures but may be any JSON value
/// (validation errors carry an array), so it is kept untyped here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorDetailBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorDetailBody {
    pub fn message(&self) -> Option<&str> {
        self.detail
            .as_ref()
            .and_then(serde_json::Value::as_str)
            .filter(|detail| !detail.is_empty())
    }
}
