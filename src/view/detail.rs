use crate::state::data::Product;

/// Full product screen
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    /// Master-list index of the product shown
    pub target: usize,
    pub model: String,
    pub id: String,
    /// Every image, in document order
    pub gallery: Vec<String>,
    pub specifications: Vec<SpecRow>,
    pub features: Vec<String>,
    pub actions: Vec<DetailAction>,
}

/// One row of the specifications table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecRow {
    pub label: String,
    pub value: String,
}

/// Buttons at the bottom of the detail screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailAction {
    Share(String),
    Export(String),
}

impl DetailAction {
    pub fn label(&self) -> &'static str {
        match self {
            DetailAction::Share(_) => "Share via WhatsApp",
            DetailAction::Export(_) => "Download spec sheet",
        }
    }
}

impl DetailView {
    pub fn new(target: usize, product: &Product) -> Self {
        let specifications = product
            .specifications
            .iter()
            .map(|(key, value)| SpecRow {
                label: format_key(key),
                value,
            })
            .collect();

        Self {
            target,
            model: product.model.clone(),
            id: product.id.clone(),
            gallery: product.images.clone(),
            specifications,
            features: product.features.clone(),
            actions: vec![
                DetailAction::Share(product.id.clone()),
                DetailAction::Export(product.id.clone()),
            ],
        }
    }
}

/// Turn a specification key into a table label.
///
/// Underscores become spaces, then every ASCII letter or digit that
/// starts a word is uppercased: `max_load_kg` -> `Max Load Kg`.
pub fn format_key(key: &str) -> String {
    let mut label = String::with_capacity(key.len());
    let mut in_word = false;

    for c in key.chars() {
        let c = if c == '_' { ' ' } else { c };
        let is_word = c.is_ascii_alphanumeric();
        if is_word && !in_word {
            label.push(c.to_ascii_uppercase());
        } else {
            label.push(c);
        }
        in_word = is_word;
    }

    label
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::Specifications;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_key() {
        assert_eq!(format_key("capacity"), "Capacity");
        assert_eq!(format_key("max_load_kg"), "Max Load Kg");
        assert_eq!(format_key("co2-rating"), "Co2-Rating");
        assert_eq!(format_key("energy_class (EU)"), "Energy Class (EU)");
        assert_eq!(format_key("2nd_shelf"), "2nd Shelf");
        assert_eq!(format_key("__power"), "  Power");
        assert_eq!(format_key(""), "");
    }

    #[test]
    fn test_format_key_only_touches_ascii_word_starts() {
        assert_eq!(format_key("décor_type"), "DéCor Type");
        assert_eq!(format_key("été"), "éTé");
    }

    #[test]
    fn test_detail_layout() {
        let product = Product {
            id: "A1".to_string(),
            category: "Freezers".to_string(),
            model: "Ice-X".to_string(),
            images: vec!["front.jpg".to_string(), "side.jpg".to_string(), "open.jpg".to_string()],
            specifications: [
                ("weight", "45kg"),
                ("capacity", "200L"),
                ("temperature_range", "-18 to -24C"),
            ]
            .into_iter()
            .collect::<Specifications>(),
            features: vec!["Fast freeze".to_string(), "Door alarm".to_string()],
        };

        let detail = DetailView::new(0, &product);

        assert_eq!(detail.gallery, vec!["front.jpg", "side.jpg", "open.jpg"]);
        let labels: Vec<&str> = detail.specifications.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Weight", "Capacity", "Temperature Range"]);
        assert_eq!(detail.specifications[2].value, "-18 to -24C");
        assert_eq!(detail.features, vec!["Fast freeze", "Door alarm"]);
        assert_eq!(
            detail.actions,
            vec![
                DetailAction::Share("A1".to_string()),
                DetailAction::Export("A1".to_string()),
            ]
        );
    }
}
