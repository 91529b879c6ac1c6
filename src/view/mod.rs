/// Pure view model
///
/// `render` turns the catalog state into a `ViewTree` without touching
/// any widget toolkit. The `ui` module maps the tree onto iced widgets,
/// which keeps everything here testable with plain fixture data. Image
/// references are passed through as written; whether a file or the
/// placeholder is shown is decided by `source::thumbnail::ImageResolver`.

pub mod card;
pub mod detail;

pub use card::Card;
pub use detail::{format_key, DetailAction, DetailView, SpecRow};

use crate::state::catalog::{Catalog, LoadStatus, ViewMode};

/// Everything the window shows for one catalog state
#[derive(Debug, Clone, PartialEq)]
pub enum ViewTree {
    Grid(GridView),
    Detail(DetailView),
}

/// The card grid plus an optional notice shown instead of (or above) it
#[derive(Debug, Clone, PartialEq)]
pub struct GridView {
    pub cards: Vec<Card>,
    pub notice: Option<Notice>,
}

/// Visible explanation for an empty grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Loading,
    LoadFailed(String),
    NoMatches,
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::Loading => "Loading products...".to_string(),
            Notice::LoadFailed(reason) => format!("Could not load products: {reason}"),
            Notice::NoMatches => "No products match".to_string(),
        }
    }
}

/// Render the catalog for its current mode
pub fn render(catalog: &Catalog) -> ViewTree {
    match (catalog.mode(), catalog.selected()) {
        (ViewMode::Detail(index), Some(product)) => {
            ViewTree::Detail(DetailView::new(index, product))
        }
        _ => ViewTree::Grid(render_grid(catalog)),
    }
}

/// One card per visible product, in view order
pub fn render_grid(catalog: &Catalog) -> GridView {
    let cards: Vec<Card> = catalog
        .view_products()
        .map(|(index, product)| Card::new(index, product))
        .collect();

    let notice = match catalog.status() {
        LoadStatus::Pending => Some(Notice::Loading),
        LoadStatus::Failed(reason) => Some(Notice::LoadFailed(reason.clone())),
        LoadStatus::Loaded(_) if cards.is_empty() => Some(Notice::NoMatches),
        LoadStatus::Loaded(_) => None,
    };

    GridView { cards, notice }
}
