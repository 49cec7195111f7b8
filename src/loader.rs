// pdf-convert/src/loader.rs

use std::path::Path;

use tokio::fs;
use tracing::debug;

use crate::error::{ConvertError, Result};

const RTL_OPEN: &str = r#"<div dir="rtl" style="font-family: arial;">"#;
const RTL_CLOSE: &str = "</div>";

/// Wrap text or HTML in the fixed right-to-left container.
///
/// The wrapping is byte-exact: the input is not escaped, trimmed, or
/// otherwise transformed. The container forces RTL layout and a default
/// font family for content that sets no CSS of its own.
pub fn wrap_rtl(html: &str) -> String {
    let mut body = String::with_capacity(RTL_OPEN.len() + html.len() + RTL_CLOSE.len());
    body.push_str(RTL_OPEN);
    body.push_str(html);
    body.push_str(RTL_CLOSE);
    body
}

/// Read one source file as UTF-8 text.
pub async fn read_source(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .await
        .map_err(|source| ConvertError::InputUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(path = %path.display(), size_bytes = text.len(), "Source file read");
    Ok(text)
}

/// Read and wrap each file, concatenating the fragments in input order
/// into one HTML body.
///
/// Aborts on the first unreadable file; no partial result is produced.
pub async fn compose_files(paths: &[impl AsRef<Path>]) -> Result<String> {
    let mut body = String::new();

    for path in paths {
        let text = read_source(path).await?;
        body.push_str(&wrap_rtl(&text));
    }

    Ok(body)
}
