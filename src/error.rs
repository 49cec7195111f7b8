// pdf-convert/src/error.rs

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConvertError>;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Input unavailable: {path}: {source}")]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Font not found: {0}")]
    FontNotFound(PathBuf),

    #[error("Rendering failed: {0}")]
    RenderFailed(String),

    #[error("Engine IO error: {0}")]
    EngineIo(#[from] std::io::Error),

    #[error("Output delivery failed: {0}")]
    DeliveryFailed(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ConvertError {
    /// Stable label for log fields and machine-readable reports.
    pub fn kind(&self) -> &'static str {
        match self {
            ConvertError::InputUnavailable { .. } => "input_unavailable",
            ConvertError::FontNotFound(_) => "font_not_found",
            ConvertError::RenderFailed(_) => "render_failed",
            ConvertError::EngineIo(_) => "engine_io_error",
            ConvertError::DeliveryFailed(_) => "delivery_failed",
            ConvertError::Serialization(_) => "serialization_error",
        }
    }
}

#[derive(Debug, serde::Serialize)]
pub struct ErrorReport {
    pub error: String,
    pub error_type: String,
}

impl From<&ConvertError> for ErrorReport {
    fn from(err: &ConvertError) -> Self {
        ErrorReport {
            error: err.to_string(),
            error_type: err.kind().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_distinct() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let errors = vec![
            ConvertError::InputUnavailable {
                path: PathBuf::from("a.html"),
                source: io,
            },
            ConvertError::FontNotFound(PathBuf::from("ARIAL.TTF")),
            ConvertError::RenderFailed("bad html".into()),
            ConvertError::DeliveryFailed("sink closed".into()),
        ];
        let kinds: Vec<_> = errors.iter().map(|e| e.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                "input_unavailable",
                "font_not_found",
                "render_failed",
                "delivery_failed"
            ]
        );
    }

    #[test]
    fn report_carries_message_and_type() {
        let err = ConvertError::RenderFailed("engine exited with status 1".into());
        let report = ErrorReport::from(&err);
        assert_eq!(report.error_type, "render_failed");
        assert!(report.error.contains("engine exited"));
    }
}
