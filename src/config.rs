// pdf-convert/src/config.rs

use config::{Config as ConfigLoader, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub engine: EngineConfig,
    pub page: PageConfig,
    pub fonts: FontConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub log_level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Path or name of the HTML-to-PDF engine binary.
    pub binary: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageConfig {
    pub size: String,
    pub margin_pt: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FontConfig {
    /// Overrides the platform-standard fonts directory when set.
    pub dir: Option<String>,
    pub file: String,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let config = ConfigLoader::builder()
            // Start with default values
            .set_default("service.name", "pdf-convert")?
            .set_default("service.log_level", "info")?
            .set_default("engine.binary", "wkhtmltopdf")?
            .set_default("page.size", "Letter")?
            .set_default("page.margin_pt", "50")?
            .set_default("fonts.file", "ARIAL.TTF")?
            // Load from config file if it exists
            .add_source(File::with_name("config").required(false))
            // Override with environment variables (e.g., PDFCONVERT__PAGE__SIZE)
            .add_source(Environment::with_prefix("PDFCONVERT").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
