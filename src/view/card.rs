use crate::state::data::Product;

/// Grid card summarizing one product
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    /// Master-list index opened when the card is selected
    pub target: usize,
    pub category: String,
    pub model: String,
    pub id: String,
    pub capacity: String,
    pub weight: String,
    /// First image reference; the image resolver picks the file to show
    pub thumbnail: String,
}

impl Card {
    pub fn new(target: usize, product: &Product) -> Self {
        Self {
            target,
            category: product.category.clone(),
            model: product.model.clone(),
            id: product.id.clone(),
            capacity: product.specifications.get("capacity").unwrap_or_default(),
            weight: product.specifications.get("weight").unwrap_or_default(),
            thumbnail: product.thumbnail().unwrap_or_default().to_string(),
        }
    }
}
