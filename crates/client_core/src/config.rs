use std::{fs, path::PathBuf, time::Duration};

use anyhow::Context;
use serde::Deserialize;
use shared::protocol::GENERATE_PDF_PATH;
use tracing::warn;
use url::Url;

pub const SETTINGS_FILE: &str = "pdfgen.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server_url: String,
    pub generate_path: String,
    pub output_dir: PathBuf,
    pub ready_hide_delay_ms: u64,
    pub save_dialog: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:8000".into(),
            generate_path: GENERATE_PDF_PATH.into(),
            output_dir: dirs::download_dir().unwrap_or_else(|| PathBuf::from(".")),
            ready_hide_delay_ms: 1000,
            save_dialog: false,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    server_url: Option<String>,
    generate_path: Option<String>,
    output_dir: Option<PathBuf>,
    ready_hide_delay_ms: Option<u64>,
    save_dialog: Option<bool>,
}

impl Settings {
    pub fn endpoint(&self) -> anyhow::Result<Url> {
        let base = Url::parse(self.server_url.trim())
            .with_context(|| format!("invalid server url '{}'", self.server_url))?;
        base.join(&self.generate_path).with_context(|| {
            format!(
                "invalid generate path '{}' for server url '{}'",
                self.generate_path, self.server_url
            )
        })
    }

    pub fn ready_hide_delay(&self) -> Duration {
        Duration::from_millis(self.ready_hide_delay_ms)
    }

    fn apply_file(&mut self, file_cfg: FileSettings) {
        if let Some(v) = file_cfg.server_url {
            self.server_url = v;
        }
        if let Some(v) = file_cfg.generate_path {
            self.generate_path = v;
        }
        if let Some(v) = file_cfg.output_dir {
            self.output_dir = v;
        }
        if let Some(v) = file_cfg.ready_hide_delay_ms {
            self.ready_hide_delay_ms = v;
        }
        if let Some(v) = file_cfg.save_dialog {
            self.save_dialog = v;
        }
    }

    /// Later keys in each group win, so the `APP__` spelling overrides the short one.
    fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(v) = var("PDFGEN_SERVER_URL") {
            self.server_url = v;
        }
        if let Some(v) = var("APP__SERVER_URL") {
            self.server_url = v;
        }

        if let Some(v) = var("APP__GENERATE_PATH") {
            self.generate_path = v;
        }

        if let Some(v) = var("PDFGEN_OUTPUT_DIR") {
            self.output_dir = PathBuf::from(v);
        }
        if let Some(v) = var("APP__OUTPUT_DIR") {
            self.output_dir = PathBuf::from(v);
        }

        if let Some(v) = var("APP__READY_HIDE_DELAY_MS") {
            match v.parse::<u64>() {
                Ok(parsed) => self.ready_hide_delay_ms = parsed,
                Err(err) => warn!(value = %v, %err, "ignoring APP__READY_HIDE_DELAY_MS"),
            }
        }

        if let Some(v) = var("APP__SAVE_DIALOG") {
            self.save_dialog = matches!(v.trim(), "1" | "true" | "yes" | "on");
        }
    }
}

/// Defaults, then `pdfgen.toml` in the working directory, then environment.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(SETTINGS_FILE) {
        match toml::from_str::<FileSettings>(&raw) {
            Ok(file_cfg) => settings.apply_file(file_cfg),
            Err(err) => warn!(file = SETTINGS_FILE, %err, "ignoring unreadable settings file"),
        }
    }

    settings.apply_env(|key| std::env::var(key).ok());
    settings
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn default_endpoint_targets_generate_route() {
        let endpoint = Settings::default().endpoint().expect("endpoint");
        assert_eq!(endpoint.as_str(), "http://127.0.0.1:8000/api/v1/generate-pdf/");
    }

    #[test]
    fn endpoint_replaces_base_path() {
        let settings = Settings {
            server_url: "https://pdf.example.com/ui/index.html".into(),
            ..Settings::default()
        };
        assert_eq!(
            settings.endpoint().expect("endpoint").as_str(),
            "https://pdf.example.com/api/v1/generate-pdf/"
        );
    }

    #[test]
    fn rejects_unparseable_server_url() {
        let settings = Settings {
            server_url: "not a url".into(),
            ..Settings::default()
        };
        assert!(settings.endpoint().is_err());
    }

    #[test]
    fn file_values_override_defaults() {
        let file_cfg: FileSettings = toml::from_str(
            r#"
                server_url = "http://10.0.0.5:9000"
                output_dir = "/tmp/pdfs"
                ready_hide_delay_ms = 250
            "#,
        )
        .expect("toml");

        let mut settings = Settings::default();
        settings.apply_file(file_cfg);

        assert_eq!(settings.server_url, "http://10.0.0.5:9000");
        assert_eq!(settings.output_dir, PathBuf::from("/tmp/pdfs"));
        assert_eq!(settings.ready_hide_delay(), Duration::from_millis(250));
        assert_eq!(settings.generate_path, GENERATE_PDF_PATH);
        assert!(!settings.save_dialog);
    }

    #[test]
    fn app_prefixed_env_wins_over_short_name() {
        let mut settings = Settings::default();
        settings.apply_env(env_from(&[
            ("PDFGEN_SERVER_URL", "http://short:1"),
            ("APP__SERVER_URL", "http://prefixed:2"),
            ("APP__SAVE_DIALOG", "true"),
        ]));

        assert_eq!(settings.server_url, "http://prefixed:2");
        assert!(settings.save_dialog);
    }

    #[test]
    fn invalid_delay_is_ignored() {
        let mut settings = Settings::default();
        settings.apply_env(env_from(&[("APP__READY_HIDE_DELAY_MS", "soon")]));
        assert_eq!(settings.ready_hide_delay_ms, 1000);
    }
}
