//! Generate-button handler: validates the form and hands the request to the backend.

use client_core::ProgressStage;
use crossbeam_channel::Sender;
use shared::domain::FormInput;

use crate::{
    backend_bridge::commands::BackendCommand,
    controller::{
        orchestration::dispatch_backend_command,
        reducer::{StatusSurface, SubmissionView},
    },
};

/// Runs synchronously on the UI thread. A form that fails validation only
/// updates the error surface; nothing is queued. A valid form clears the error,
/// shows the first progress stage and queues one generation command. A second
/// click while a request is in flight queues a second, independent request.
pub fn submit_form(
    form: &FormInput,
    view: &mut SubmissionView,
    cmd_tx: &Sender<BackendCommand>,
) -> bool {
    let request = match form.validate() {
        Ok(request) => request,
        Err(err) => {
            tracing::debug!(%err, "form rejected");
            view.status.show_error(&err);
            return false;
        }
    };

    view.status = StatusSurface::Progress(ProgressStage::CollectingInformation);
    dispatch_backend_command(
        cmd_tx,
        BackendCommand::Generate { request },
        &mut view.status,
    )
}

#[cfg(test)]
mod tests {
    use crossbeam_channel::bounded;

    use super::*;

    fn sample_form() -> FormInput {
        FormInput {
            word: "Investment".into(),
            pages: "3".into(),
            company: "Acme".into(),
            title: "Q1 Report".into(),
            author: "J. Doe".into(),
            subject: "Finance".into(),
        }
    }

    #[test]
    fn invalid_keyword_shows_message_and_queues_nothing() {
        let (cmd_tx, cmd_rx) = bounded(4);
        let mut view = SubmissionView::default();
        let form = FormInput {
            word: "two words".into(),
            ..sample_form()
        };

        assert!(!submit_form(&form, &mut view, &cmd_tx));
        assert_eq!(
            view.status,
            StatusSurface::Error("Please enter a single keyword (e.g., Investment).".into())
        );
        assert!(cmd_rx.try_recv().is_err());
    }

    #[test]
    fn invalid_page_count_and_blank_fields_queue_nothing() {
        let (cmd_tx, cmd_rx) = bounded(4);

        let mut view = SubmissionView::default();
        let form = FormInput {
            pages: "6".into(),
            ..sample_form()
        };
        submit_form(&form, &mut view, &cmd_tx);
        assert_eq!(
            view.status.error_text(),
            Some("Please enter a valid number of pages (1-5).")
        );
        assert_eq!(view.status.progress_text(), None);

        let mut view = SubmissionView::default();
        let form = FormInput {
            author: "   ".into(),
            ..sample_form()
        };
        submit_form(&form, &mut view, &cmd_tx);
        assert_eq!(view.status.error_text(), Some("Please fill in all fields."));

        assert!(cmd_rx.try_recv().is_err());
    }

    #[test]
    fn valid_form_clears_error_and_queues_trimmed_request() {
        let (cmd_tx, cmd_rx) = bounded(4);
        let mut view = SubmissionView::default();
        view.status = StatusSurface::Error("Please fill in all fields.".into());
        let form = FormInput {
            company: "  Acme  ".into(),
            ..sample_form()
        };

        assert!(submit_form(&form, &mut view, &cmd_tx));
        assert_eq!(view.status.progress_text(), Some("Collecting Information..."));

        let BackendCommand::Generate { request } = cmd_rx.try_recv().expect("queued");
        assert_eq!(request.company, "Acme");
        assert_eq!(request.pages, 3);
    }

    #[test]
    fn disconnected_backend_is_reported() {
        let (cmd_tx, cmd_rx) = bounded(4);
        drop(cmd_rx);
        let mut view = SubmissionView::default();

        assert!(!submit_form(&sample_form(), &mut view, &cmd_tx));
        assert!(view
            .status
            .error_text()
            .is_some_and(|message| message.starts_with("Error: ")));
    }
}
