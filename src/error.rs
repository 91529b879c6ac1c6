use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the catalog, its sources and its actions
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed product document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown product: {0}")]
    UnknownProduct(String),

    #[error("Export failed: {0}")]
    Export(String),

    #[error("Could not open share link: {0}")]
    Share(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
