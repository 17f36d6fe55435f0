use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the rendering and configuration layers.
///
/// Segmenting and inline formatting never fail; malformed markup degrades to
/// plain text instead.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading or writing a file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The config file is not valid TOML for [`crate::Config`].
    #[error("Invalid config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Typst compilation failed: {0}")]
    Typst(String),
    #[error("PDF generation failed: {0}")]
    Pdf(String),
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
