/// Search and category predicates
///
/// Both predicates are pure. The catalog decides which list they run
/// over and whether they combine, according to the [`FilterPolicy`].

use serde::{Deserialize, Serialize};

use super::data::Product;

/// How search and category filters interact
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FilterPolicy {
    /// Each filter recomputes the view from the full product list and
    /// discards the other filter's input
    #[default]
    Override,
    /// Both filters stay active and the view shows products matching
    /// the search term AND the category
    Compose,
}

/// Check a product against a search term.
///
/// The term is compared lowercased against the model, the id and the
/// serialized specifications (keys included). An empty term matches
/// every product.
pub fn matches_search(product: &Product, term: &str) -> bool {
    let term = term.to_lowercase();
    if term.is_empty() {
        return true;
    }

    product.model.to_lowercase().contains(&term)
        || product.id.to_lowercase().contains(&term)
        || product
            .specifications
            .serialized()
            .to_lowercase()
            .contains(&term)
}

/// Exact, case-sensitive category match. `None` matches everything.
pub fn matches_category(product: &Product, category: Option<&str>) -> bool {
    match category {
        Some(category) => product.category == category,
        None => true,
    }
}

/// Treat a blank selector value as "all categories"
pub fn normalize_category(category: Option<&str>) -> Option<&str> {
    category.filter(|c| !c.is_empty())
}
