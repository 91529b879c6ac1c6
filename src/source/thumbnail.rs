use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::state::data::Product;

/// Maps product image references to files on disk.
///
/// References are relative to the image root (the working directory when
/// none is configured), never to the product document. A reference
/// resolves to that file when it exists and decodes as an image; anything
/// else falls back to the placeholder. This resolver is the only place
/// the fallback is decided. Results are computed once per reference so
/// rendering never touches the disk.
#[derive(Debug, Clone)]
pub struct ImageResolver {
    root: Option<PathBuf>,
    placeholder: PathBuf,
    resolved: HashMap<String, PathBuf>,
}

impl ImageResolver {
    pub fn new(root: Option<PathBuf>, placeholder: impl Into<PathBuf>) -> Self {
        Self {
            root,
            placeholder: placeholder.into(),
            resolved: HashMap::new(),
        }
    }

    /// Resolve every image of every product up front
    pub fn prime<'a>(&mut self, products: impl IntoIterator<Item = &'a Product>) {
        let mut fallbacks = 0;
        for product in products {
            for reference in &product.images {
                if self.resolved.contains_key(reference) {
                    continue;
                }
                let path = self.resolve_uncached(reference);
                if path == self.placeholder {
                    fallbacks += 1;
                }
                self.resolved.insert(reference.clone(), path);
            }
        }

        if fallbacks > 0 {
            tracing::warn!(fallbacks, "🖼️  Some product images could not be loaded, using placeholder");
        }
    }

    /// Path to display for a reference. Unknown references get the placeholder.
    pub fn lookup(&self, reference: &str) -> &Path {
        self.resolved
            .get(reference)
            .map(PathBuf::as_path)
            .unwrap_or(&self.placeholder)
    }

    pub fn placeholder(&self) -> &Path {
        &self.placeholder
    }

    fn resolve_uncached(&self, reference: &str) -> PathBuf {
        if reference.contains("://") {
            tracing::debug!(reference, "Remote image reference, using placeholder");
            return self.placeholder.clone();
        }

        let candidate = match &self.root {
            Some(base) => base.join(reference),
            None => PathBuf::from(reference),
        };

        match image::image_dimensions(&candidate) {
            Ok(_) => candidate,
            Err(e) => {
                tracing::debug!(path = %candidate.display(), error = %e, "Image failed to load");
                self.placeholder.clone()
            }
        }
    }
}
