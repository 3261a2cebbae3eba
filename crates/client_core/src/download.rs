use std::path::{Path, PathBuf};

use async_trait::async_trait;
use shared::error::SubmitError;
use tracing::debug;

/// A generated document as received from the server, held only until a sink
/// has written it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDocument {
    pub filename: String,
    pub bytes: Vec<u8>,
}

#[async_trait]
pub trait DocumentSink: Send + Sync {
    /// Persists the document. `Ok(None)` means the user chose not to save.
    async fn save(&self, document: GeneratedDocument) -> Result<Option<PathBuf>, SubmitError>;
}

/// Writes documents into a fixed directory, creating it on first use.
/// An existing file with the same name is replaced.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl DocumentSink for DirectorySink {
    async fn save(&self, document: GeneratedDocument) -> Result<Option<PathBuf>, SubmitError> {
        tokio::fs::create_dir_all(&self.dir).await.map_err(|err| {
            SubmitError::SaveFailed(format!("{}: {err}", self.dir.display()))
        })?;

        let path = self.dir.join(&document.filename);
        debug!(path = %path.display(), size_bytes = document.bytes.len(), "writing document");
        tokio::fs::write(&path, &document.bytes)
            .await
            .map_err(|err| SubmitError::SaveFailed(format!("{}: {err}", path.display())))?;
        Ok(Some(path))
    }
}

/// Extracts the quoted value following `filename=` from a `Content-Disposition`
/// header. The match runs to the last quote in the header, and any directory
/// part of the name is dropped so a server cannot pick the save location.
pub fn filename_from_content_disposition(header: &str) -> Option<String> {
    const MARKER: &str = "filename=\"";

    let start = header.find(MARKER)? + MARKER.len();
    let rest = &header[start..];
    let quoted = &rest[..rest.rfind('"')?];
    if quoted.is_empty() {
        return None;
    }

    let normalized = quoted.replace('\\', "/");
    let name = Path::new(&normalized).file_name()?.to_str()?;
    Some(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_quoted_filename() {
        assert_eq!(
            filename_from_content_disposition(r#"attachment; filename="report.pdf""#).as_deref(),
            Some("report.pdf")
        );
        assert_eq!(
            filename_from_content_disposition(r#"attachment; filename="Q1 report.pdf"; size=10"#)
                .as_deref(),
            Some("Q1 report.pdf")
        );
    }

    #[test]
    fn missing_or_empty_filename_yields_none() {
        assert_eq!(filename_from_content_disposition("attachment"), None);
        assert_eq!(filename_from_content_disposition("attachment; filename=report.pdf"), None);
        assert_eq!(filename_from_content_disposition(r#"attachment; filename="""#), None);
        assert_eq!(filename_from_content_disposition(r#"attachment; filename="open"#), None);
    }

    #[test]
    fn strips_directories_from_server_names() {
        assert_eq!(
            filename_from_content_disposition(r#"attachment; filename="../../etc/passwd""#)
                .as_deref(),
            Some("passwd")
        );
        assert_eq!(
            filename_from_content_disposition(r#"attachment; filename="C:\tmp\out.pdf""#)
                .as_deref(),
            Some("out.pdf")
        );
        assert_eq!(
            filename_from_content_disposition(r#"attachment; filename="..""#),
            None
        );
    }

    #[tokio::test]
    async fn directory_sink_creates_missing_directory() {
        let temp = tempfile::tempdir().expect("tempdir");
        let sink = DirectorySink::new(temp.path().join("nested").join("out"));

        let saved = sink
            .save(GeneratedDocument {
                filename: "report.pdf".into(),
                bytes: b"%PDF-1.4".to_vec(),
            })
            .await
            .expect("save")
            .expect("saved path");

        assert_eq!(saved, sink.dir().join("report.pdf"));
        assert_eq!(std::fs::read(saved).expect("read back"), b"%PDF-1.4");
    }
}
