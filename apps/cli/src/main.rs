use std::{path::PathBuf, process::ExitCode};

use anyhow::Result;
use clap::Parser;
use client_core::{load_settings, run_submission, DirectorySink, GenerationClient, Settings};
use shared::domain::FormInput;

/// Requests a generated PDF from the generation server and saves it locally.
#[derive(Parser, Debug)]
#[command(name = "pdfgen")]
struct Args {
    /// Single keyword the document is about
    #[arg(long)]
    word: String,
    /// Number of pages, 1-5
    #[arg(long)]
    pages: String,
    #[arg(long)]
    company: String,
    #[arg(long)]
    title: String,
    #[arg(long)]
    author: String,
    #[arg(long)]
    subject: String,
    /// Overrides the configured server URL
    #[arg(long)]
    server_url: Option<String>,
    /// Overrides the configured output directory
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

impl Args {
    fn form(&self) -> FormInput {
        FormInput {
            word: self.word.clone(),
            pages: self.pages.clone(),
            company: self.company.clone(),
            title: self.title.clone(),
            author: self.author.clone(),
            subject: self.subject.clone(),
        }
    }

    fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(server_url) = &self.server_url {
            settings.server_url = server_url.clone();
        }
        if let Some(output_dir) = &self.output_dir {
            settings.output_dir = output_dir.clone();
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let mut settings = load_settings();
    args.apply_overrides(&mut settings);

    let request = match args.form().validate() {
        Ok(request) => request,
        Err(err) => {
            tracing::debug!(%err, "form rejected");
            eprintln!("{}", err.user_message());
            return Ok(ExitCode::FAILURE);
        }
    };

    let client = GenerationClient::from_settings(&settings)?;
    let sink = DirectorySink::new(&settings.output_dir);
    let outcome = run_submission(&client, &sink, request, |stage| {
        println!("{}", stage.status_text());
    })
    .await;

    match outcome {
        Ok(Some(path)) => {
            println!("Saved {}", path.display());
            Ok(ExitCode::SUCCESS)
        }
        Ok(None) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            eprintln!("{}", err.user_message());
            Ok(ExitCode::FAILURE)
        }
    }
}
