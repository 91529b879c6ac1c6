use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{CatalogError, Result};
use crate::state::catalog::Catalog;
use crate::state::data::Product;

/// Turns a product into a document on disk.
///
/// Returns the written path, or `None` when the user backed out.
pub trait Exporter {
    fn export(&self, product: &Product) -> Result<Option<PathBuf>>;
}

/// Contents of an exported spec sheet
#[derive(Serialize, Debug)]
struct SpecSheet<'a> {
    brand: &'a str,
    generated_at: DateTime<Utc>,
    product: &'a Product,
}

/// Write a pretty-printed JSON spec sheet to `path`
pub fn write_spec_sheet(product: &Product, brand: &str, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            CatalogError::Export(format!("cannot create {}: {e}", parent.display()))
        })?;
    }

    let sheet = SpecSheet {
        brand,
        generated_at: Utc::now(),
        product,
    };
    let json =
        serde_json::to_string_pretty(&sheet).map_err(|e| CatalogError::Export(e.to_string()))?;

    fs::write(path, json)
        .map_err(|e| CatalogError::Export(format!("cannot write {}: {e}", path.display())))
}

/// File name used for a product's spec sheet
pub fn spec_sheet_name(product: &Product) -> String {
    let safe: String = product
        .id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    format!("{safe}.json")
}

/// Writes spec sheets into a fixed directory without asking
#[derive(Debug, Clone)]
pub struct SpecSheetExporter {
    dir: PathBuf,
    brand: String,
}

impl SpecSheetExporter {
    pub fn new(dir: impl Into<PathBuf>, brand: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            brand: brand.into(),
        }
    }
}

impl Exporter for SpecSheetExporter {
    fn export(&self, product: &Product) -> Result<Option<PathBuf>> {
        let path = self.dir.join(spec_sheet_name(product));
        write_spec_sheet(product, &self.brand, &path)?;
        Ok(Some(path))
    }
}

/// Look a product up by id and hand it to the exporter
pub fn export_product(
    catalog: &Catalog,
    id: &str,
    exporter: &impl Exporter,
) -> Result<Option<PathBuf>> {
    let product = catalog
        .find(id)
        .ok_or_else(|| CatalogError::UnknownProduct(id.to_string()))?;

    let written = exporter.export(product)?;
    match &written {
        Some(path) => tracing::info!(id, path = %path.display(), "📄 Exported spec sheet"),
        None => tracing::debug!(id, "Export cancelled"),
    }
    Ok(written)
}
