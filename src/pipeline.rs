// pdf-convert/src/pipeline.rs

use std::path::Path;

use chrono::Utc;
use tracing::{info, instrument};

use crate::engine::PdfEngine;
use crate::error::Result;
use crate::loader;
use crate::models::{PageSettings, RenderedDocument};

/// Timestamp-based default file name, matching `^\d+\.pdf$`.
///
/// Callers that need a stable name pass one explicitly; this default is
/// computed at the API edge, not read from a hidden clock inside the
/// render path.
pub fn timestamp_file_name() -> String {
    format!("{}.pdf", Utc::now().timestamp_micros())
}

/// Orchestrates: load → wrap right-to-left → render.
///
/// Stateless across calls; each conversion is one synchronous
/// (await-to-completion) pass with no retry and no partial output.
pub struct PdfConverter {
    engine: Box<dyn PdfEngine>,
    page: PageSettings,
}

impl PdfConverter {
    pub fn new(engine: Box<dyn PdfEngine>, page: PageSettings) -> Self {
        Self { engine, page }
    }

    /// Convert the file at `path`, read as UTF-8 text.
    #[instrument(skip(self, file_name))]
    pub async fn from_file(
        &self,
        path: impl AsRef<Path> + std::fmt::Debug,
        file_name: Option<String>,
    ) -> Result<RenderedDocument> {
        let text = loader::read_source(path).await?;
        self.render(&loader::wrap_rtl(&text), file_name).await
    }

    /// Convert several files into one document, in input order.
    ///
    /// Aborts on the first unreadable file; no partial result.
    #[instrument(skip(self, paths, file_name), fields(files = paths.len()))]
    pub async fn from_files(
        &self,
        paths: &[impl AsRef<Path>],
        file_name: Option<String>,
    ) -> Result<RenderedDocument> {
        let body = loader::compose_files(paths).await?;
        self.render(&body, file_name).await
    }

    /// Convert an in-memory string; can be HTML or plain text.
    #[instrument(skip_all)]
    pub async fn from_text(
        &self,
        text: &str,
        file_name: Option<String>,
    ) -> Result<RenderedDocument> {
        self.render(&loader::wrap_rtl(text), file_name).await
    }

    /// Hand the assembled HTML to the engine and package the result.
    async fn render(&self, html: &str, file_name: Option<String>) -> Result<RenderedDocument> {
        let file_name = file_name.unwrap_or_else(timestamp_file_name);

        let data = self.engine.render(html, &self.page).await?;
        let doc = RenderedDocument::new(file_name, data);

        info!(
            file_name = %doc.file_name,
            size_bytes = doc.data.len(),
            sha256 = %doc.sha256_checksum(),
            "Conversion completed"
        );

        Ok(doc)
    }
}
