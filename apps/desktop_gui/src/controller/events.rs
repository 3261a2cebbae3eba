//! Backend-to-UI events for the generator window.

use std::path::PathBuf;

use client_core::ProgressStage;
use shared::error::SubmitError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Progress(ProgressStage),
    Saved(Option<PathBuf>),
    Failed(SubmitError),
    HideProgress,
    BackendUnavailable(String),
}
