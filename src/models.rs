// pdf-convert/src/models.rs

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

pub const PDF_MIME_TYPE: &str = "application/pdf";

/// Fixed settings the render engine is invoked with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageSettings {
    pub size: String,
    pub margin_pt: u32,
}

impl Default for PageSettings {
    fn default() -> Self {
        // US-Letter with 50pt margins on all sides
        Self {
            size: "Letter".to_string(),
            margin_pt: 50,
        }
    }
}

impl From<&crate::config::PageConfig> for PageSettings {
    fn from(cfg: &crate::config::PageConfig) -> Self {
        Self {
            size: cfg.size.clone(),
            margin_pt: cfg.margin_pt,
        }
    }
}

/// One conversion result: the PDF bytes plus the suggested file name.
/// Immutable after creation; lives for a single request/response cycle.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub file_name: String,
    pub data: Vec<u8>,
}

impl RenderedDocument {
    pub fn new(file_name: String, data: Vec<u8>) -> Self {
        Self { file_name, data }
    }

    pub fn sha256_checksum(&self) -> String {
        hex::encode(Sha256::digest(&self.data))
    }

    /// Serialisable record of this document, for JSON transports.
    pub fn to_envelope(&self) -> ConversionEnvelope {
        ConversionEnvelope {
            file_name: self.file_name.clone(),
            mime_type: PDF_MIME_TYPE.to_string(),
            size_bytes: self.data.len(),
            content_base64: BASE64.encode(&self.data),
            sha256_checksum: self.sha256_checksum(),
            generated_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionEnvelope {
    pub file_name: String,
    pub mime_type: String,
    pub size_bytes: usize,
    pub content_base64: String,
    pub sha256_checksum: String,
    pub generated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_reflects_document() {
        let doc = RenderedDocument::new("123.pdf".into(), b"%PDF-1.4 test".to_vec());
        let env = doc.to_envelope();
        assert_eq!(env.file_name, "123.pdf");
        assert_eq!(env.mime_type, PDF_MIME_TYPE);
        assert_eq!(env.size_bytes, doc.data.len());
        assert_eq!(BASE64.decode(&env.content_base64).unwrap(), doc.data);
        assert_eq!(env.sha256_checksum, doc.sha256_checksum());
    }

    #[test]
    fn default_page_settings_are_letter_with_50pt_margins() {
        let page = PageSettings::default();
        assert_eq!(page.size, "Letter");
        assert_eq!(page.margin_pt, 50);
    }
}
