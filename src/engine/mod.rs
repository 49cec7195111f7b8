// pdf-convert/src/engine/mod.rs

mod wkhtmltopdf;

pub use wkhtmltopdf::WkhtmltopdfEngine;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::PageSettings;

/// "Render this HTML string with these settings to PDF bytes" as a single
/// opaque capability, so the underlying rendering engine is swappable.
#[async_trait]
pub trait PdfEngine: Send + Sync {
    async fn render(&self, html: &str, page: &PageSettings) -> Result<Vec<u8>>;
}
