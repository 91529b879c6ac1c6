use clap::Parser;
use tracing_subscriber::EnvFilter;

use product_catalog::app::CatalogApp;
use product_catalog::config::{AppConfig, Cli};

/// Log to stderr; RUST_LOG overrides the configured level
fn initialize_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> iced::Result {
    let cli = Cli::parse();

    let config = match AppConfig::resolve(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(2);
        }
    };

    initialize_tracing(&config.log_level);

    iced::application("Product Catalog", CatalogApp::update, CatalogApp::view)
        .theme(CatalogApp::theme)
        .centered()
        .run_with(move || CatalogApp::new(config))
}
