// pdf-convert/src/engine/wkhtmltopdf.rs

use std::ffi::OsString;
use std::io::Write;
use std::path::Path;

use async_trait::async_trait;
use tempfile::Builder;
use tokio::fs;
use tokio::process::Command;
use tracing::{debug, info};

use crate::config::{Config, EngineConfig, FontConfig};
use crate::error::{ConvertError, Result};
use crate::fonts;
use crate::models::PageSettings;

use super::PdfEngine;

/// HTML-to-PDF engine backed by the `wkhtmltopdf` binary.
///
/// The HTML goes to a temp file, the engine is invoked with fixed arguments
/// (UTF-8 input, page size and margins from [`PageSettings`]), and the PDF
/// is read back from a temp file. Right-to-left layout comes from the
/// `dir="rtl"` container the loader wraps around every input.
pub struct WkhtmltopdfEngine {
    binary: String,
    fonts: FontConfig,
}

impl WkhtmltopdfEngine {
    pub fn new(engine: &EngineConfig, fonts: &FontConfig) -> Self {
        Self {
            binary: engine.binary.clone(),
            fonts: fonts.clone(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.engine, &config.fonts)
    }

    fn engine_args(page: &PageSettings, input: &Path, output: &Path) -> Vec<OsString> {
        let margin = format!("{}pt", page.margin_pt);
        let mut args: Vec<OsString> = vec![
            "--encoding".into(),
            "utf-8".into(),
            "--page-size".into(),
            page.size.clone().into(),
            "--margin-top".into(),
            margin.clone().into(),
            "--margin-bottom".into(),
            margin.clone().into(),
            "--margin-left".into(),
            margin.clone().into(),
            "--margin-right".into(),
            margin.into(),
            "--enable-local-file-access".into(),
        ];
        args.push(input.as_os_str().to_os_string());
        args.push(output.as_os_str().to_os_string());
        args
    }
}

#[async_trait]
impl PdfEngine for WkhtmltopdfEngine {
    async fn render(&self, html: &str, page: &PageSettings) -> Result<Vec<u8>> {
        // The engine needs the Unicode font to shape Hebrew/Arabic glyphs;
        // fail before spawning anything if it cannot be resolved.
        let font = fonts::resolve_font(&self.fonts)?;

        // Create temporary files
        let mut html_file = Builder::new().suffix(".html").tempfile()?;
        let pdf_file = Builder::new().suffix(".pdf").tempfile()?;

        html_file.write_all(html.as_bytes())?;
        html_file.flush()?;

        debug!(
            html = %html_file.path().display(),
            font = %font.display(),
            "HTML written, invoking render engine"
        );

        let args = Self::engine_args(page, html_file.path(), pdf_file.path());
        let output = Command::new(&self.binary).args(&args).output().await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ConvertError::RenderFailed(stderr.to_string()));
        }

        let pdf_bytes = fs::read(pdf_file.path()).await?;
        if pdf_bytes.is_empty() {
            return Err(ConvertError::RenderFailed(
                "engine produced no output".to_string(),
            ));
        }

        info!(size_kb = pdf_bytes.len() / 1024, "PDF generated successfully");

        Ok(pdf_bytes)
    }
}
