use iced::{Element, Task, Theme};

use crate::actions::export::{export_product, SpecSheetExporter};
use crate::actions::share::{self, ShareConfig, SystemBrowser};
use crate::config::AppConfig;
use crate::source::thumbnail::ImageResolver;
use crate::source::{FileSource, ProductSource};
use crate::state::catalog::{fetch_catalog, Catalog, LoadStatus, LoadedCatalog};
use crate::ui::{self, CategoryOption, DialogExporter};
use crate::view;

/// Main application state
pub struct CatalogApp {
    /// The product catalog and its current screen
    catalog: Catalog,
    /// Resolved product images, filled once the catalog has loaded
    images: ImageResolver,
    share: ShareConfig,
    config: AppConfig,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// Background load finished
    Loaded(Result<LoadOutcome, String>),
    /// Search box edited
    SearchChanged(String),
    /// Category picked in the selector
    CategorySelected(CategoryOption),
    /// A grid card was clicked (master-list index)
    ProductSelected(usize),
    /// Back button on the detail screen
    Back,
    /// Share button, by product id
    Share(String),
    /// Export button, by product id
    Export(String),
}

/// What the background load hands back to the UI thread
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub catalog: LoadedCatalog,
    /// Image lookups already probed off the UI thread
    pub images: ImageResolver,
}

/// Fetch and validate the document, then probe every product image on the
/// blocking pool.
pub async fn load_catalog(
    source: FileSource,
    mut images: ImageResolver,
) -> Result<LoadOutcome, String> {
    let catalog = fetch_catalog(&source).await.map_err(|e| e.to_string())?;

    tokio::task::spawn_blocking(move || {
        images.prime(&catalog.products);
        LoadOutcome { catalog, images }
    })
    .await
    .map_err(|e| format!("Image probing failed: {e}"))
}

impl CatalogApp {
    /// Create the application and start loading the product document
    pub fn new(config: AppConfig) -> (Self, Task<Message>) {
        let source = FileSource::new(config.data_source.clone());
        let location = source.location();

        tracing::info!(
            source = %location,
            policy = ?config.filter_policy,
            "🛒 Product catalog starting"
        );

        let images = ImageResolver::new(
            config.image_root.clone(),
            config.placeholder_image.clone(),
        );

        let app = CatalogApp {
            catalog: Catalog::new(config.filter_policy),
            images: images.clone(),
            share: config.share_config(&location),
            config,
            status: format!("Loading {location}..."),
        };

        let load = Task::perform(load_catalog(source, images), Message::Loaded);

        (app, load)
    }

    /// Handle application messages and update state
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Loaded(result) => {
                let first = !self.is_ready();
                let result = result.map(|outcome| {
                    if first {
                        self.images = outcome.images;
                    }
                    outcome.catalog
                });
                self.catalog.finish_load(result);
                self.status = match self.catalog.status() {
                    LoadStatus::Loaded(report) if report.skipped > 0 => format!(
                        "{} products loaded, {} malformed entries skipped.",
                        report.loaded, report.skipped
                    ),
                    LoadStatus::Loaded(report) => format!("{} products loaded.", report.loaded),
                    LoadStatus::Failed(_) => "Catalog unavailable.".to_string(),
                    LoadStatus::Pending => String::new(),
                };
            }
            Message::SearchChanged(term) => {
                if self.is_ready() {
                    self.catalog.apply_search(&term);
                }
            }
            Message::CategorySelected(choice) => {
                if self.is_ready() {
                    self.catalog.apply_category_filter(choice.as_filter());
                }
            }
            Message::ProductSelected(index) => {
                if let Err(e) = self.catalog.show_detail(index) {
                    tracing::warn!(error = %e, "Card pointed at a missing product");
                }
            }
            Message::Back => self.catalog.back(),
            Message::Share(id) => {
                match share::share(&self.catalog, &id, &self.share, &SystemBrowser) {
                    Ok(Some(_)) => self.status = format!("Shared {id}."),
                    Ok(None) => {}
                    Err(e) => {
                        tracing::error!(error = %e, "❌ Share failed");
                        self.status = e.to_string();
                    }
                }
            }
            Message::Export(id) => {
                let result = match &self.config.export_dir {
                    Some(dir) => {
                        let exporter = SpecSheetExporter::new(dir, &self.config.brand);
                        export_product(&self.catalog, &id, &exporter)
                    }
                    None => {
                        let exporter = DialogExporter::new(
                            self.config.default_export_dir(),
                            &self.config.brand,
                        );
                        export_product(&self.catalog, &id, &exporter)
                    }
                };

                match result {
                    Ok(Some(path)) => self.status = format!("✅ Saved {}", path.display()),
                    Ok(None) => {}
                    Err(e) => {
                        tracing::error!(error = %e, "❌ Export failed");
                        self.status = e.to_string();
                    }
                }
            }
        }

        Task::none()
    }

    fn is_ready(&self) -> bool {
        !matches!(self.catalog.status(), LoadStatus::Pending)
    }

    /// Build the user interface
    pub fn view(&self) -> Element<Message> {
        let tree = view::render(&self.catalog);

        let controls = ui::Controls {
            search: self.catalog.search_term().to_string(),
            category: CategoryOption::from_filter(self.catalog.category()),
            categories: self.catalog.categories(),
            enabled: self.is_ready(),
        };

        ui::view(tree, controls, &self.images, &self.status)
    }

    /// Set the application theme
    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}
