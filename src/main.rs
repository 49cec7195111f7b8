// pdf-convert/src/main.rs

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pdf_convert::config::Config;
use pdf_convert::engine::WkhtmltopdfEngine;
use pdf_convert::error::ErrorReport;
use pdf_convert::models::PageSettings;
use pdf_convert::pipeline::PdfConverter;
use pdf_convert::response::{write_attachment, HttpFramedSink};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Emit {
    /// Write the raw PDF bytes to the output file.
    Pdf,
    /// Print a JSON envelope (base64 content + checksum) to stdout.
    Json,
    /// Stream an attachment-framed response (headers + body) to stdout.
    Http,
}

/// Convert HTML or plain text files to a single PDF.
#[derive(Debug, Parser)]
#[command(name = "pdf-convert", version)]
struct Args {
    /// Input files, combined in order into one document.
    files: Vec<PathBuf>,

    /// Convert this literal text/HTML instead of reading files.
    #[arg(long, conflicts_with = "files")]
    text: Option<String>,

    /// Output file name; defaults to a timestamp-based `<digits>.pdf`.
    #[arg(long)]
    name: Option<String>,

    /// Where to write the PDF (only with `--emit pdf`).
    #[arg(long, short)]
    output: Option<PathBuf>,

    #[arg(long, value_enum, default_value = "pdf")]
    emit: Emit,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = Config::load().context("Failed to load configuration")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.service.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!(
        service = %config.service.name,
        version = env!("CARGO_PKG_VERSION"),
        engine = %config.engine.binary,
        "Starting conversion"
    );

    let engine = WkhtmltopdfEngine::from_config(&config);
    let converter = PdfConverter::new(Box::new(engine), PageSettings::from(&config.page));

    let result = match (&args.text, args.files.as_slice()) {
        (Some(text), _) => converter.from_text(text, args.name.clone()).await,
        (None, [single]) => converter.from_file(single, args.name.clone()).await,
        (None, []) => bail!("No input: pass one or more files, or --text"),
        (None, many) => converter.from_files(many, args.name.clone()).await,
    };

    let doc = match result {
        Ok(doc) => doc,
        Err(e) => {
            error!(error = %e, error_type = e.kind(), "Conversion failed");
            if matches!(args.emit, Emit::Json) {
                println!("{}", serde_json::to_string_pretty(&ErrorReport::from(&e))?);
            }
            return Err(e.into());
        }
    };

    match args.emit {
        Emit::Pdf => {
            let path = args
                .output
                .unwrap_or_else(|| PathBuf::from(&doc.file_name));
            tokio::fs::write(&path, &doc.data)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), size_bytes = doc.data.len(), "PDF written");
        }
        Emit::Json => {
            let envelope = doc.to_envelope();
            println!("{}", serde_json::to_string_pretty(&envelope)?);
        }
        Emit::Http => {
            let mut sink = HttpFramedSink::new(tokio::io::stdout());
            write_attachment(&doc, &mut sink).await?;
        }
    }

    Ok(())
}
