//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};
use shared::error::SubmitError;

use crate::{backend_bridge::commands::BackendCommand, controller::reducer::StatusSurface};

/// Queues a command for the backend worker. Returns whether it was queued;
/// on failure the reason is put on the status surface.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut StatusSurface,
) -> bool {
    let cmd_name = match &cmd {
        BackendCommand::Generate { .. } => "generate",
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            true
        }
        Err(TrySendError::Full(_)) => {
            status.show_error(&SubmitError::TransportFailure(
                "generation queue is full; please retry".to_string(),
            ));
            false
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::error!(command = cmd_name, "backend command processor disconnected");
            status.show_error(&SubmitError::TransportFailure(
                "backend worker is not running; restart the application".to_string(),
            ));
            false
        }
    }
}
