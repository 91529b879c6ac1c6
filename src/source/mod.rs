/// Product data sources
///
/// This module handles:
/// - Fetching the raw product document (files, in-memory fixtures)
/// - Resolving product image references to local files with a fallback

pub mod thumbnail;

use std::future::Future;
use std::path::PathBuf;

use crate::error::{CatalogError, Result};

/// Something that can hand over the product document as text.
///
/// Parsing happens in the catalog, a source only retrieves bytes.
pub trait ProductSource {
    /// Retrieve the whole document
    fn fetch(&self) -> impl Future<Output = Result<String>> + Send;

    /// Human-readable address of the document, used in logs and share
    /// messages
    fn location(&self) -> String;
}

/// Reads the product document from the local filesystem
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ProductSource for FileSource {
    async fn fetch(&self) -> Result<String> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| CatalogError::Io {
                path: self.path.clone(),
                source,
            })
    }

    fn location(&self) -> String {
        std::path::absolute(&self.path)
            .unwrap_or_else(|_| self.path.clone())
            .display()
            .to_string()
    }
}

/// Serves a document held in memory (fixtures, embedded demo data)
#[derive(Debug, Clone)]
pub struct StaticSource {
    body: String,
    location: String,
}

impl StaticSource {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            location: "memory://products.json".to_string(),
        }
    }
}

impl ProductSource for StaticSource {
    async fn fetch(&self) -> Result<String> {
        Ok(self.body.clone())
    }

    fn location(&self) -> String {
        self.location.clone()
    }
}
