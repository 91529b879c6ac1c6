/// iced widgets for the catalog
///
/// Every function here consumes a piece of the pure `ViewTree` and
/// produces widgets; no catalog state is read or changed in this module.

pub mod detail;
pub mod grid;

use std::fmt;
use std::path::PathBuf;

use iced::widget::{column, container, pick_list, row, text, text_input};
use iced::{Alignment, Element, Length};
use rfd::FileDialog;

use crate::actions::export::{spec_sheet_name, write_spec_sheet, Exporter};
use crate::app::Message;
use crate::error::Result;
use crate::source::thumbnail::ImageResolver;
use crate::state::data::Product;
use crate::view::ViewTree;

/// Entry of the category selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryOption {
    All,
    Named(String),
}

impl CategoryOption {
    pub fn from_filter(category: Option<&str>) -> Self {
        match category {
            Some(name) => CategoryOption::Named(name.to_string()),
            None => CategoryOption::All,
        }
    }

    pub fn as_filter(&self) -> Option<&str> {
        match self {
            CategoryOption::All => None,
            CategoryOption::Named(name) => Some(name),
        }
    }
}

impl fmt::Display for CategoryOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryOption::All => write!(f, "All categories"),
            CategoryOption::Named(name) => write!(f, "{name}"),
        }
    }
}

/// Current values of the search box and category selector
#[derive(Debug, Clone)]
pub struct Controls {
    pub search: String,
    pub category: CategoryOption,
    pub categories: Vec<String>,
    /// The search box accepts input only once the catalog has loaded
    pub enabled: bool,
}

/// Whole window: toolbar, the grid or detail screen, status line
pub fn view<'a>(
    tree: ViewTree,
    controls: Controls,
    images: &ImageResolver,
    status: &str,
) -> Element<'a, Message> {
    let body: Element<'a, Message> = match tree {
        ViewTree::Grid(grid_view) => column![toolbar(controls), grid::grid(grid_view, images)]
            .spacing(16)
            .into(),
        ViewTree::Detail(detail_view) => detail::detail(detail_view, images),
    };

    let content = column![
        container(body).height(Length::Fill),
        text(status.to_string()).size(14),
    ]
    .spacing(12)
    .padding(24);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn toolbar<'a>(controls: Controls) -> Element<'a, Message> {
    let mut search = text_input("Search by model, code or specification...", &controls.search)
        .padding(10)
        .width(Length::FillPortion(3));
    if controls.enabled {
        search = search.on_input(Message::SearchChanged);
    }

    let mut options = vec![CategoryOption::All];
    options.extend(controls.categories.into_iter().map(CategoryOption::Named));

    let category = pick_list(options, Some(controls.category), Message::CategorySelected)
        .padding(10)
        .width(Length::FillPortion(1));

    row![search, category]
        .spacing(12)
        .align_y(Alignment::Center)
        .into()
}

/// Asks where to save each spec sheet, starting in a default folder
#[derive(Debug, Clone)]
pub struct DialogExporter {
    start_dir: PathBuf,
    brand: String,
}

impl DialogExporter {
    pub fn new(start_dir: PathBuf, brand: impl Into<String>) -> Self {
        Self {
            start_dir,
            brand: brand.into(),
        }
    }
}

impl Exporter for DialogExporter {
    fn export(&self, product: &Product) -> Result<Option<PathBuf>> {
        let picked = FileDialog::new()
            .set_title("Save Spec Sheet")
            .set_directory(&self.start_dir)
            .set_file_name(spec_sheet_name(product))
            .add_filter("JSON", &["json"])
            .save_file();

        let Some(path) = picked else {
            return Ok(None);
        };

        write_spec_sheet(product, &self.brand, &path)?;
        Ok(Some(path))
    }
}
