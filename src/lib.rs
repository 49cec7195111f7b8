// pdf-convert/src/lib.rs

//! Convert HTML or plain text to a PDF byte stream, with right-to-left
//! (Hebrew/Arabic) layout handled for free.
//!
//! The stages are:
//!
//! 1. **Load** — read UTF-8 sources and wrap each in a fixed RTL container
//!    ([`loader`])
//! 2. **Render** — hand the assembled HTML to an external HTML-to-PDF
//!    engine behind the [`engine::PdfEngine`] trait ([`engine`])
//! 3. **Deliver** — write the PDF bytes as an HTTP attachment response
//!    ([`response`])

pub mod config;
pub mod engine;
pub mod error;
pub mod fonts;
pub mod loader;
pub mod models;
pub mod pipeline;
pub mod response;

// Re-exports for convenience
pub use engine::{PdfEngine, WkhtmltopdfEngine};
pub use error::{ConvertError, Result};
pub use models::{PageSettings, RenderedDocument};
pub use pipeline::{timestamp_file_name, PdfConverter};
pub use response::{write_attachment, ResponseSink};
