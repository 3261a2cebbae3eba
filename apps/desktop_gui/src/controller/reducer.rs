//! Status state owned by the window and the transitions backend events drive.

use std::path::PathBuf;

use client_core::ProgressStage;
use shared::error::SubmitError;

use crate::controller::events::UiEvent;

/// What the status area under the form shows. Error and progress never
/// display together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StatusSurface {
    #[default]
    Hidden,
    Error(String),
    Progress(ProgressStage),
}

impl StatusSurface {
    pub fn error_text(&self) -> Option<&str> {
        match self {
            StatusSurface::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn progress_text(&self) -> Option<&'static str> {
        match self {
            StatusSurface::Progress(stage) => Some(stage.status_text()),
            _ => None,
        }
    }

    pub fn show_error(&mut self, err: &SubmitError) {
        *self = StatusSurface::Error(err.user_message());
    }

    /// Hides the progress indicator; an error on display is left alone.
    pub fn hide_progress(&mut self) {
        if matches!(self, StatusSurface::Progress(_)) {
            *self = StatusSurface::Hidden;
        }
    }
}

#[derive(Debug, Default)]
pub struct SubmissionView {
    pub status: StatusSurface,
    pub last_saved: Option<PathBuf>,
}

pub fn apply(view: &mut SubmissionView, event: UiEvent) {
    match event {
        UiEvent::Progress(stage) => view.status = StatusSurface::Progress(stage),
        UiEvent::Saved(path) => view.last_saved = path,
        UiEvent::Failed(err) => view.status.show_error(&err),
        UiEvent::HideProgress => view.status.hide_progress(),
        UiEvent::BackendUnavailable(reason) => {
            view.status.show_error(&SubmitError::TransportFailure(reason))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_replaces_progress_with_prefixed_error() {
        let mut view = SubmissionView::default();
        apply(
            &mut view,
            UiEvent::Progress(ProgressStage::CollectingInformation),
        );
        apply(&mut view, UiEvent::Progress(ProgressStage::GeneratingPdf));
        apply(
            &mut view,
            UiEvent::Failed(SubmitError::generation_failed(Some("quota exceeded"))),
        );

        assert_eq!(view.status.error_text(), Some("Error: quota exceeded"));
        assert_eq!(view.status.progress_text(), None);
    }

    #[test]
    fn delayed_hide_clears_ready_but_not_a_later_error() {
        let mut view = SubmissionView::default();
        apply(&mut view, UiEvent::Progress(ProgressStage::Ready));
        apply(&mut view, UiEvent::HideProgress);
        assert_eq!(view.status, StatusSurface::Hidden);

        view.status
            .show_error(&SubmitError::TransportFailure("connection refused".into()));
        apply(&mut view, UiEvent::HideProgress);
        assert_eq!(view.status.error_text(), Some("Error: connection refused"));
    }

    #[test]
    fn hide_is_idempotent() {
        let mut view = SubmissionView::default();
        apply(&mut view, UiEvent::HideProgress);
        apply(&mut view, UiEvent::HideProgress);
        assert_eq!(view.status, StatusSurface::Hidden);
    }

    #[test]
    fn saved_path_is_remembered_without_touching_status() {
        let mut view = SubmissionView::default();
        apply(&mut view, UiEvent::Progress(ProgressStage::Ready));
        apply(
            &mut view,
            UiEvent::Saved(Some(PathBuf::from("/tmp/report.pdf"))),
        );

        assert_eq!(view.last_saved, Some(PathBuf::from("/tmp/report.pdf")));
        assert_eq!(view.status.progress_text(), Some("Ready"));
    }
}
