// pdf-convert/src/fonts.rs

use std::path::PathBuf;

use tracing::debug;

use crate::config::FontConfig;
use crate::error::{ConvertError, Result};

/// Platform-standard fonts directory.
#[cfg(target_os = "windows")]
pub fn system_fonts_dir() -> PathBuf {
    std::env::var_os("WINDIR")
        .map(|windir| PathBuf::from(windir).join("Fonts"))
        .unwrap_or_else(|| PathBuf::from(r"C:\Windows\Fonts"))
}

#[cfg(target_os = "macos")]
pub fn system_fonts_dir() -> PathBuf {
    PathBuf::from("/Library/Fonts")
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
pub fn system_fonts_dir() -> PathBuf {
    PathBuf::from("/usr/share/fonts")
}

/// Resolve the Unicode font file the render engine depends on.
///
/// Tries the configured file name as given, then its lowercase form.
/// Absence is fatal for any conversion call.
pub fn resolve_font(cfg: &FontConfig) -> Result<PathBuf> {
    let dir = cfg
        .dir
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(system_fonts_dir);

    let exact = dir.join(&cfg.file);
    if exact.is_file() {
        debug!(font = %exact.display(), "Unicode font resolved");
        return Ok(exact);
    }

    let lowercase = dir.join(cfg.file.to_lowercase());
    if lowercase.is_file() {
        debug!(font = %lowercase.display(), "Unicode font resolved");
        return Ok(lowercase);
    }

    Err(ConvertError::FontNotFound(exact))
}
