//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread, time::Duration};

use anyhow::Result;
use client_core::{run_submission, DirectorySink, DocumentSink, GenerationClient, Settings};
use crossbeam_channel::{Receiver, Sender};
use shared::protocol::GeneratePdfRequest;
use tokio::task::JoinHandle;

use crate::{
    backend_bridge::{commands::BackendCommand, save_dialog::SaveDialogSink},
    controller::events::UiEvent,
};

#[derive(Clone)]
pub struct BackendContext {
    client: GenerationClient,
    sink: Arc<dyn DocumentSink>,
    ready_hide_delay: Duration,
}

impl BackendContext {
    pub fn new(
        client: GenerationClient,
        sink: Arc<dyn DocumentSink>,
        ready_hide_delay: Duration,
    ) -> Self {
        Self {
            client,
            sink,
            ready_hide_delay,
        }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let sink: Arc<dyn DocumentSink> = if settings.save_dialog {
            Arc::new(SaveDialogSink::new(&settings.output_dir))
        } else {
            Arc::new(DirectorySink::new(&settings.output_dir))
        };
        Ok(Self::new(
            GenerationClient::from_settings(settings)?,
            sink,
            settings.ready_hide_delay(),
        ))
    }
}

pub fn launch(settings: Settings, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::BackendUnavailable(format!(
                    "failed to build backend runtime: {err}"
                )));
                return;
            }
        };

        let context = match BackendContext::from_settings(&settings) {
            Ok(context) => context,
            Err(err) => {
                tracing::error!("invalid generation endpoint settings: {err:#}");
                let _ = ui_tx.try_send(UiEvent::BackendUnavailable(format!("{err:#}")));
                return;
            }
        };
        tracing::info!(endpoint = %context.client.endpoint(), "backend worker ready");

        runtime.block_on(async move {
            while let Ok(cmd) = cmd_rx.recv() {
                handle_command(&context, cmd, &ui_tx);
            }
        });
    });
}

/// Starts one submission per command. Submissions never wait on each other.
pub fn handle_command(
    context: &BackendContext,
    cmd: BackendCommand,
    ui_tx: &Sender<UiEvent>,
) -> JoinHandle<()> {
    match cmd {
        BackendCommand::Generate { request } => {
            tokio::spawn(run_generation(context.clone(), request, ui_tx.clone()))
        }
    }
}

async fn run_generation(
    context: BackendContext,
    request: GeneratePdfRequest,
    ui_tx: Sender<UiEvent>,
) {
    let stage_tx = ui_tx.clone();
    let outcome = run_submission(&context.client, context.sink.as_ref(), request, |stage| {
        let _ = stage_tx.try_send(UiEvent::Progress(stage));
    })
    .await;

    match outcome {
        Ok(saved) => {
            let _ = ui_tx.try_send(UiEvent::Saved(saved));
            schedule_hide(ui_tx, context.ready_hide_delay);
        }
        Err(err) => {
            let _ = ui_tx.try_send(UiEvent::Failed(err));
        }
    }
}

fn schedule_hide(ui_tx: Sender<UiEvent>, delay: Duration) {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let _ = ui_tx.try_send(UiEvent::HideProgress);
    });
}
