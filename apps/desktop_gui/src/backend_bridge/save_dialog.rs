//! Native "save as" sink used when the save dialog is enabled.

use std::path::PathBuf;

use async_trait::async_trait;
use client_core::{DocumentSink, GeneratedDocument};
use shared::error::SubmitError;

pub struct SaveDialogSink {
    default_dir: PathBuf,
}

impl SaveDialogSink {
    pub fn new(default_dir: impl Into<PathBuf>) -> Self {
        Self {
            default_dir: default_dir.into(),
        }
    }
}

#[async_trait]
impl DocumentSink for SaveDialogSink {
    async fn save(&self, document: GeneratedDocument) -> Result<Option<PathBuf>, SubmitError> {
        let default_dir = self.default_dir.clone();
        let filename = document.filename.clone();
        let picked = tokio::task::spawn_blocking(move || {
            rfd::FileDialog::new()
                .set_directory(&default_dir)
                .set_file_name(filename)
                .add_filter("PDF document", &["pdf"])
                .save_file()
        })
        .await
        .map_err(|err| SubmitError::SaveFailed(format!("save dialog failed: {err}")))?;

        let Some(path) = picked else {
            return Ok(None);
        };

        tokio::fs::write(&path, &document.bytes)
            .await
            .map_err(|err| SubmitError::SaveFailed(format!("{}: {err}", path.display())))?;
        Ok(Some(path))
    }
}
