use std::{error::Error as _, path::PathBuf};

use anyhow::Result;
use reqwest::{header::CONTENT_DISPOSITION, Client};
use shared::{
    error::SubmitError,
    protocol::{ErrorDetailBody, GeneratePdfRequest},
};
use tracing::{error, info, warn};
use url::Url;

pub mod config;
pub mod download;

pub use config::{load_settings, Settings};
pub use download::{
    filename_from_content_disposition, DirectorySink, DocumentSink, GeneratedDocument,
};

/// Status shown on the progress surface while a submission runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressStage {
    CollectingInformation,
    GeneratingPdf,
    Downloading,
    Ready,
}

impl ProgressStage {
    pub fn status_text(self) -> &'static str {
        match self {
            ProgressStage::CollectingInformation => "Collecting Information...",
            ProgressStage::GeneratingPdf => "Generating PDF...",
            ProgressStage::Downloading => "Downloading...",
            ProgressStage::Ready => "Ready",
        }
    }
}

#[derive(Clone)]
pub struct GenerationClient {
    http: Client,
    endpoint: Url,
}

impl GenerationClient {
    pub fn new(endpoint: Url) -> Self {
        Self {
            http: Client::new(),
            endpoint,
        }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Ok(Self::new(settings.endpoint()?))
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Posts one generation request and reads the document back.
    ///
    /// `on_stage` sees [`ProgressStage::GeneratingPdf`] as soon as response
    /// headers arrive, before the status is inspected.
    pub async fn generate<F>(
        &self,
        request: &GeneratePdfRequest,
        mut on_stage: F,
    ) -> Result<GeneratedDocument, SubmitError>
    where
        F: FnMut(ProgressStage),
    {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(transport_failure)?;
        on_stage(ProgressStage::GeneratingPdf);

        let status = response.status();
        if !status.is_success() {
            // The error body is best-effort; anything unreadable falls back to
            // the generic message.
            let body = response.bytes().await.unwrap_or_default();
            let detail = serde_json::from_slice::<ErrorDetailBody>(&body).ok();
            warn!(%status, "generation endpoint rejected request");
            return Err(SubmitError::generation_failed(
                detail.as_ref().and_then(ErrorDetailBody::message),
            ));
        }

        let filename = response
            .headers()
            .get(CONTENT_DISPOSITION)
            .and_then(|value| value.to_str().ok())
            .and_then(filename_from_content_disposition)
            .unwrap_or_else(|| request.fallback_filename());
        let bytes = response.bytes().await.map_err(transport_failure)?;

        Ok(GeneratedDocument {
            filename,
            bytes: bytes.to_vec(),
        })
    }
}

/// Runs the execution phase of one submission for an already validated request:
/// request, download, save. Every stage transition is reported through
/// `on_stage`; failures are logged here and returned for display.
///
/// Returns the saved path, or `None` when the sink declined to save.
pub async fn run_submission<F>(
    client: &GenerationClient,
    sink: &dyn DocumentSink,
    request: GeneratePdfRequest,
    mut on_stage: F,
) -> Result<Option<PathBuf>, SubmitError>
where
    F: FnMut(ProgressStage) + Send,
{
    on_stage(ProgressStage::CollectingInformation);
    info!(
        word = %request.word,
        pages = request.pages,
        endpoint = %client.endpoint(),
        "requesting document generation"
    );

    match generate_and_save(client, sink, &request, &mut on_stage).await {
        Ok(saved) => {
            on_stage(ProgressStage::Ready);
            match &saved {
                Some(path) => info!(path = %path.display(), "document saved"),
                None => info!("document save declined"),
            }
            Ok(saved)
        }
        Err(err) => {
            error!(%err, word = %request.word, "document generation failed");
            Err(err)
        }
    }
}

async fn generate_and_save<F>(
    client: &GenerationClient,
    sink: &dyn DocumentSink,
    request: &GeneratePdfRequest,
    on_stage: &mut F,
) -> Result<Option<PathBuf>, SubmitError>
where
    F: FnMut(ProgressStage) + Send,
{
    let document = client.generate(request, &mut *on_stage).await?;
    on_stage(ProgressStage::Downloading);
    sink.save(document).await
}

fn transport_failure(err: reqwest::Error) -> SubmitError {
    let reason = match err.source() {
        Some(source) => format!("{err}: {source}"),
        None => err.to_string(),
    };
    SubmitError::TransportFailure(reason)
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
