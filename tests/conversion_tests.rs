//! End-to-end tests for the conversion pipeline, using a stub engine so no
//! external renderer binary is required.

use std::sync::Mutex;

use async_trait::async_trait;

use pdf_convert::engine::PdfEngine;
use pdf_convert::error::{ConvertError, Result};
use pdf_convert::loader::wrap_rtl;
use pdf_convert::models::PageSettings;
use pdf_convert::pipeline::PdfConverter;
use pdf_convert::response::{write_attachment, MemorySink};

// =====================================================================
// Helpers
// =====================================================================

/// Engine that returns canned PDF bytes and records what it was asked to
/// render.
#[derive(Default)]
struct StubEngine {
    seen: Mutex<Vec<(String, PageSettings)>>,
}

#[async_trait]
impl PdfEngine for StubEngine {
    async fn render(&self, html: &str, page: &PageSettings) -> Result<Vec<u8>> {
        self.seen
            .lock()
            .unwrap()
            .push((html.to_string(), page.clone()));
        Ok(b"%PDF-1.4 stub document".to_vec())
    }
}

struct FailingEngine;

#[async_trait]
impl PdfEngine for FailingEngine {
    async fn render(&self, _html: &str, _page: &PageSettings) -> Result<Vec<u8>> {
        Err(ConvertError::RenderFailed("unclosed tag".to_string()))
    }
}

fn converter_with_stub() -> (PdfConverter, std::sync::Arc<StubEngine>) {
    // The converter owns a boxed engine; share observation through an Arc.
    let engine = std::sync::Arc::new(StubEngine::default());
    let handle = engine.clone();
    (
        PdfConverter::new(Box::new(ArcEngine(engine)), PageSettings::default()),
        handle,
    )
}

/// Boxable wrapper so tests can keep a handle on the stub.
struct ArcEngine(std::sync::Arc<StubEngine>);

#[async_trait]
impl PdfEngine for ArcEngine {
    async fn render(&self, html: &str, page: &PageSettings) -> Result<Vec<u8>> {
        self.0.render(html, page).await
    }
}

fn assert_valid_pdf(bytes: &[u8]) {
    assert!(!bytes.is_empty(), "PDF is empty");
    assert_eq!(&bytes[0..5], b"%PDF-", "Missing PDF header");
}

// =====================================================================
// Text conversion
// =====================================================================

#[tokio::test]
async fn hebrew_text_renders_through_rtl_wrapper() {
    let (converter, engine) = converter_with_stub();

    let doc = converter
        .from_text("<p>שלום עולם</p>", None)
        .await
        .unwrap();

    assert_valid_pdf(&doc.data);

    let stem = doc.file_name.strip_suffix(".pdf").unwrap();
    assert!(stem.chars().all(|c| c.is_ascii_digit()));

    let seen = engine.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0, wrap_rtl("<p>שלום עולם</p>"));
    assert_eq!(seen[0].1.size, "Letter");
    assert_eq!(seen[0].1.margin_pt, 50);
}

#[tokio::test]
async fn explicit_name_is_kept() {
    let (converter, _) = converter_with_stub();
    let doc = converter
        .from_text("hi", Some("invoice.pdf".to_string()))
        .await
        .unwrap();
    assert_eq!(doc.file_name, "invoice.pdf");
}

// =====================================================================
// File conversion
// =====================================================================

#[tokio::test]
async fn multiple_files_concatenate_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.html");
    let b = dir.path().join("b.html");
    std::fs::write(&a, "<p>alef</p>").unwrap();
    std::fs::write(&b, "<p>bet</p>").unwrap();

    let (converter, engine) = converter_with_stub();
    let doc = converter.from_files(&[&a, &b], None).await.unwrap();
    assert_valid_pdf(&doc.data);

    let seen = engine.seen.lock().unwrap();
    assert_eq!(
        seen[0].0,
        format!("{}{}", wrap_rtl("<p>alef</p>"), wrap_rtl("<p>bet</p>"))
    );
}

#[tokio::test]
async fn missing_file_produces_no_pdf() {
    let (converter, engine) = converter_with_stub();

    let err = converter
        .from_file("no/such/file.html", None)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), "input_unavailable");
    assert!(engine.seen.lock().unwrap().is_empty(), "engine must not run");
}

// =====================================================================
// Error propagation
// =====================================================================

#[tokio::test]
async fn engine_failure_propagates_unchanged() {
    let converter = PdfConverter::new(Box::new(FailingEngine), PageSettings::default());
    let err = converter.from_text("<p>", None).await.unwrap_err();
    assert_eq!(err.kind(), "render_failed");
    assert!(err.to_string().contains("unclosed tag"));
}

// =====================================================================
// Delivery
// =====================================================================

#[tokio::test]
async fn rendered_document_streams_as_attachment() {
    let (converter, _) = converter_with_stub();
    let doc = converter
        .from_text("hello", Some("report.pdf".to_string()))
        .await
        .unwrap();

    let mut sink = MemorySink::new();
    write_attachment(&doc, &mut sink).await.unwrap();

    assert_eq!(sink.content_type.as_deref(), Some("application/pdf"));
    assert_eq!(
        sink.header("Content-Disposition"),
        Some("attachment; filename=report.pdf")
    );
    assert_eq!(sink.body, doc.data);
    assert!(sink.finished);
}
