use std::collections::HashSet;
use std::fmt::Display;

use serde::Deserialize;
use serde_json::value::RawValue;

use super::data::Product;
use super::filter::{self, FilterPolicy};
use crate::error::{CatalogError, Result};
use crate::source::ProductSource;

/// Which screen the catalog is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Summary cards for the current view list
    #[default]
    Grid,
    /// A single product, by index into the master list
    Detail(usize),
}

/// Outcome of the initial load
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Pending,
    Loaded(LoadReport),
    Failed(String),
}

/// Counts from validating the product document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: usize,
}

/// Validated products ready to become the master list
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedCatalog {
    pub products: Vec<Product>,
    pub report: LoadReport,
}

/// Top-level shape of the product document. Entries are kept raw so a
/// single malformed product can be skipped without failing the load.
#[derive(Deserialize)]
struct CatalogDocument<'a> {
    #[serde(borrow)]
    products: Vec<&'a RawValue>,
}

/// Parse and validate a product document.
///
/// The document itself must be shaped `{"products": [...]}`. Individual
/// entries that don't deserialize, have no images, or reuse an earlier
/// id are skipped and counted.
pub fn parse_document(text: &str) -> Result<LoadedCatalog> {
    let document: CatalogDocument = serde_json::from_str(text)?;

    let mut products = Vec::with_capacity(document.products.len());
    let mut seen_ids = HashSet::new();
    let mut skipped = 0;

    for (position, raw) in document.products.into_iter().enumerate() {
        let product: Product = match serde_json::from_str(raw.get()) {
            Ok(product) => product,
            Err(e) => {
                tracing::warn!(position, error = %e, "⚠️  Skipping malformed product entry");
                skipped += 1;
                continue;
            }
        };

        if product.images.is_empty() {
            tracing::warn!(position, id = %product.id, "⚠️  Skipping product without images");
            skipped += 1;
            continue;
        }

        if !seen_ids.insert(product.id.clone()) {
            tracing::warn!(position, id = %product.id, "⚠️  Skipping duplicate product id");
            skipped += 1;
            continue;
        }

        products.push(product);
    }

    let report = LoadReport {
        loaded: products.len(),
        skipped,
    };

    Ok(LoadedCatalog { products, report })
}

/// Fetch the document from a source and validate it
pub async fn fetch_catalog<S: ProductSource>(source: &S) -> Result<LoadedCatalog> {
    tracing::debug!(location = %source.location(), "Fetching product document");
    let text = source.fetch().await?;
    parse_document(&text)
}

/// The catalog state: the master list, the derived view list and the
/// current screen.
///
/// The view list holds indices into the master list, strictly
/// increasing, so it is always an order-preserving subset of it.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    master: Vec<Product>,
    view: Vec<usize>,
    mode: ViewMode,
    search: String,
    category: Option<String>,
    policy: FilterPolicy,
    status: LoadStatus,
}

impl Catalog {
    /// An empty catalog waiting for its first load
    pub fn new(policy: FilterPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// A loaded catalog built from products already in memory
    pub fn with_products(products: Vec<Product>, policy: FilterPolicy) -> Self {
        let report = LoadReport {
            loaded: products.len(),
            skipped: 0,
        };
        let mut catalog = Self::new(policy);
        catalog.finish_load::<CatalogError>(Ok(LoadedCatalog { products, report }));
        catalog
    }

    /// Load the master list from a source.
    ///
    /// Failures are logged and leave both lists empty; there is no retry.
    pub async fn load<S: ProductSource>(&mut self, source: &S) {
        let result = fetch_catalog(source).await;
        self.finish_load(result);
    }

    /// Install the result of a fetch. Only the first load populates the
    /// master list; it is never replaced afterwards.
    pub fn finish_load<E: Display>(&mut self, result: std::result::Result<LoadedCatalog, E>) {
        if self.status != LoadStatus::Pending {
            tracing::warn!("Ignoring repeated catalog load");
            return;
        }

        match result {
            Ok(loaded) => {
                tracing::info!(
                    loaded = loaded.report.loaded,
                    skipped = loaded.report.skipped,
                    "📦 Catalog loaded"
                );
                self.master = loaded.products;
                self.view = (0..self.master.len()).collect();
                self.status = LoadStatus::Loaded(loaded.report);
            }
            Err(e) => {
                tracing::error!(error = %e, "❌ Error loading products");
                self.master.clear();
                self.view.clear();
                self.status = LoadStatus::Failed(e.to_string());
            }
        }
    }

    /// Filter the view by a free-text term
    pub fn apply_search(&mut self, term: &str) {
        self.search = term.to_string();
        if self.policy == FilterPolicy::Override {
            self.category = None;
        }
        self.recompute();
    }

    /// Filter the view by category. `None` or an empty string shows all.
    pub fn apply_category_filter(&mut self, category: Option<&str>) {
        self.category = filter::normalize_category(category).map(str::to_string);
        if self.policy == FilterPolicy::Override {
            self.search.clear();
        }
        self.recompute();
    }

    fn recompute(&mut self) {
        let category = self.category.as_deref();
        self.view = self
            .master
            .iter()
            .enumerate()
            .filter(|(_, p)| {
                filter::matches_search(p, &self.search) && filter::matches_category(p, category)
            })
            .map(|(i, _)| i)
            .collect();

        tracing::debug!(
            search = %self.search,
            category = ?self.category,
            visible = self.view.len(),
            "View list recomputed"
        );
    }

    /// Switch to the detail screen for a master-list index
    pub fn show_detail(&mut self, index: usize) -> Result<&Product> {
        let product = self
            .master
            .get(index)
            .ok_or_else(|| CatalogError::UnknownProduct(format!("#{index}")))?;
        self.mode = ViewMode::Detail(index);
        Ok(product)
    }

    /// Switch to the detail screen for a product id
    pub fn show_detail_by_id(&mut self, id: &str) -> Result<&Product> {
        let index = self
            .position(id)
            .ok_or_else(|| CatalogError::UnknownProduct(id.to_string()))?;
        self.show_detail(index)
    }

    /// Return to the grid. The view list is left as it was.
    pub fn back(&mut self) {
        self.mode = ViewMode::Grid;
    }

    /// Look a product up by id in the master list
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.master.iter().find(|p| p.id == id)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.master.iter().position(|p| p.id == id)
    }

    /// Distinct categories in order of first appearance
    pub fn categories(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.master
            .iter()
            .filter(|p| seen.insert(p.category.as_str()))
            .map(|p| p.category.clone())
            .collect()
    }

    pub fn master(&self) -> &[Product] {
        &self.master
    }

    /// Indices of the visible products, in master order
    pub fn view_indices(&self) -> &[usize] {
        &self.view
    }

    /// Visible products with their master indices
    pub fn view_products(&self) -> impl Iterator<Item = (usize, &Product)> + '_ {
        self.view.iter().map(|&i| (i, &self.master[i]))
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// The product on the detail screen, if one is shown
    pub fn selected(&self) -> Option<&Product> {
        match self.mode {
            ViewMode::Detail(index) => self.master.get(index),
            ViewMode::Grid => None,
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::StaticSource;
    use crate::state::data::Specifications;
    use pretty_assertions::assert_eq;

    fn product(id: &str, category: &str, model: &str) -> Product {
        Product {
            id: id.to_string(),
            category: category.to_string(),
            model: model.to_string(),
            images: vec![format!("images/{id}.jpg")],
            specifications: [("capacity", "200L"), ("weight", "45kg")]
                .into_iter()
                .collect::<Specifications>(),
            features: vec!["Quiet".to_string()],
        }
    }

    fn fixture(policy: FilterPolicy) -> Catalog {
        Catalog::with_products(
            vec![
                product("A1", "Freezers", "Ice-X"),
                product("B2", "Fridges", "Cool-Y"),
                product("C3", "Freezers", "Deep-Z"),
                product("D4", "Fridges", "Ice-Box"),
            ],
            policy,
        )
    }

    fn visible_ids(catalog: &Catalog) -> Vec<&str> {
        catalog.view_products().map(|(_, p)| p.id.as_str()).collect()
    }

    #[test]
    fn test_two_product_scenario() {
        let mut catalog = Catalog::with_products(
            vec![
                product("A1", "Freezers", "Ice-X"),
                product("B2", "Fridges", "Cool-Y"),
            ],
            FilterPolicy::Override,
        );

        catalog.apply_category_filter(Some("Fridges"));
        assert_eq!(visible_ids(&catalog), vec!["B2"]);

        catalog.apply_search("ice");
        assert_eq!(visible_ids(&catalog), vec!["A1"]);
    }

    #[test]
    fn test_search_results_are_matching_subset() {
        let mut catalog = fixture(FilterPolicy::Override);
        for term in ["ice", "ICE", "200l", "b2", "nothing-like-this", "-"] {
            catalog.apply_search(term);
            for (i, p) in catalog.view_products() {
                assert!(std::ptr::eq(p, &catalog.master()[i]));
                assert!(filter::matches_search(p, term));
            }
            assert!(catalog.view_indices().windows(2).all(|w| w[0] < w[1]));
        }

        catalog.apply_search("");
        assert_eq!(catalog.view_indices(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_category_filter_is_exact() {
        let mut catalog = fixture(FilterPolicy::Override);

        catalog.apply_category_filter(Some("Freezers"));
        assert_eq!(visible_ids(&catalog), vec!["A1", "C3"]);

        catalog.apply_category_filter(Some("freezers"));
        assert!(visible_ids(&catalog).is_empty());

        catalog.apply_category_filter(Some(""));
        assert_eq!(visible_ids(&catalog), vec!["A1", "B2", "C3", "D4"]);

        catalog.apply_category_filter(None);
        assert_eq!(catalog.view_indices().len(), 4);
    }

    #[test]
    fn test_filters_are_idempotent() {
        let mut catalog = fixture(FilterPolicy::Override);

        catalog.apply_search("ice");
        let first = catalog.view_indices().to_vec();
        catalog.apply_search("ice");
        assert_eq!(catalog.view_indices(), first.as_slice());

        catalog.apply_category_filter(Some("Fridges"));
        let first = catalog.view_indices().to_vec();
        catalog.apply_category_filter(Some("Fridges"));
        assert_eq!(catalog.view_indices(), first.as_slice());
    }

    #[test]
    fn test_override_policy_discards_other_filter() {
        let mut catalog = fixture(FilterPolicy::Override);

        catalog.apply_category_filter(Some("Fridges"));
        catalog.apply_search("ice");
        assert_eq!(visible_ids(&catalog), vec!["A1", "D4"]);
        assert_eq!(catalog.category(), None);

        catalog.apply_category_filter(Some("Freezers"));
        assert_eq!(visible_ids(&catalog), vec!["A1", "C3"]);
        assert_eq!(catalog.search_term(), "");
    }

    #[test]
    fn test_compose_policy_ands_filters() {
        let mut catalog = fixture(FilterPolicy::Compose);

        catalog.apply_category_filter(Some("Fridges"));
        catalog.apply_search("ice");
        assert_eq!(visible_ids(&catalog), vec!["D4"]);

        catalog.apply_category_filter(None);
        assert_eq!(visible_ids(&catalog), vec!["A1", "D4"]);

        catalog.apply_search("");
        assert_eq!(catalog.view_indices().len(), 4);
    }

    #[test]
    fn test_filters_do_not_change_mode() {
        let mut catalog = fixture(FilterPolicy::Override);
        catalog.show_detail(1).unwrap();

        catalog.apply_search("ice");
        catalog.apply_category_filter(Some("Freezers"));
        assert_eq!(catalog.mode(), ViewMode::Detail(1));
    }

    #[test]
    fn test_detail_then_back_keeps_view() {
        let mut catalog = fixture(FilterPolicy::Override);
        catalog.apply_search("ice");
        let before = catalog.view_indices().to_vec();

        let shown = catalog.show_detail_by_id("A1").unwrap();
        assert_eq!(shown.model, "Ice-X");
        assert_eq!(catalog.mode(), ViewMode::Detail(0));
        assert_eq!(catalog.selected().map(|p| p.id.as_str()), Some("A1"));

        catalog.back();
        assert_eq!(catalog.mode(), ViewMode::Grid);
        assert_eq!(catalog.selected(), None);
        assert_eq!(catalog.view_indices(), before.as_slice());
    }

    #[test]
    fn test_unknown_detail_leaves_mode_alone() {
        let mut catalog = fixture(FilterPolicy::Override);

        assert!(matches!(
            catalog.show_detail_by_id("ZZZ"),
            Err(CatalogError::UnknownProduct(_))
        ));
        assert!(catalog.show_detail(42).is_err());
        assert_eq!(catalog.mode(), ViewMode::Grid);
    }

    #[test]
    fn test_categories_in_first_appearance_order() {
        let catalog = fixture(FilterPolicy::Override);
        assert_eq!(catalog.categories(), vec!["Freezers", "Fridges"]);
    }

    #[test]
    fn test_parse_skips_malformed_entries() {
        let text = r#"{"products": [
            {"id": "A1", "category": "Freezers", "model": "Ice-X", "images": ["a.jpg"],
             "specifications": {"capacity": "200L"}, "features": ["Quiet"]},
            {"id": "B2", "category": "Fridges", "model": "Cool-Y", "images": []},
            {"id": "C3", "model": "No category", "images": ["c.jpg"]},
            {"id": "A1", "category": "Freezers", "model": "Ice-X again", "images": ["a2.jpg"]},
            {"id": "D4", "category": "Fridges", "model": "Ice-Box", "images": ["d.jpg"]}
        ]}"#;

        let loaded = parse_document(text).unwrap();
        let ids: Vec<&str> = loaded.products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["A1", "D4"]);
        assert_eq!(loaded.report, LoadReport { loaded: 2, skipped: 3 });
    }

    #[test]
    fn test_parse_rejects_wrong_shape() {
        assert!(matches!(parse_document("[]"), Err(CatalogError::Parse(_))));
        assert!(matches!(parse_document(r#"{"items": []}"#), Err(CatalogError::Parse(_))));
        assert!(matches!(parse_document("not json"), Err(CatalogError::Parse(_))));
    }

    #[tokio::test]
    async fn test_load_populates_lists() {
        let source = StaticSource::new(
            r#"{"products": [
                {"id": "A1", "category": "Freezers", "model": "Ice-X", "images": ["a.jpg"]},
                {"id": "B2", "category": "Fridges", "model": "Cool-Y", "images": ["b.jpg"]}
            ]}"#,
        );
        let mut catalog = Catalog::new(FilterPolicy::Override);
        assert_eq!(catalog.status(), &LoadStatus::Pending);

        catalog.load(&source).await;

        assert_eq!(catalog.master().len(), 2);
        assert_eq!(catalog.view_indices(), &[0, 1]);
        assert_eq!(
            catalog.status(),
            &LoadStatus::Loaded(LoadReport { loaded: 2, skipped: 0 })
        );
    }

    #[tokio::test]
    async fn test_failed_load_leaves_lists_empty() {
        let mut catalog = Catalog::new(FilterPolicy::Override);
        catalog.load(&StaticSource::new("{ broken")).await;

        assert!(catalog.master().is_empty());
        assert!(catalog.view_indices().is_empty());
        assert!(matches!(catalog.status(), LoadStatus::Failed(_)));

        catalog.apply_search("ice");
        assert!(catalog.view_indices().is_empty());
    }

    #[tokio::test]
    async fn test_master_list_is_set_once() {
        let mut catalog = fixture(FilterPolicy::Override);
        catalog
            .load(&StaticSource::new(r#"{"products": []}"#))
            .await;
        assert_eq!(catalog.master().len(), 4);
    }
}
