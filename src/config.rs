/// Application configuration
///
/// Settings come from three layers, later ones winning:
/// 1. Built-in defaults
/// 2. A TOML file (`--config`, or `<config dir>/product-catalog/config.toml`)
/// 3. Command line flags

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::actions::share::ShareConfig;
use crate::error::{CatalogError, Result};
use crate::state::filter::FilterPolicy;

/// Command line flags
#[derive(Parser, Debug, Default)]
#[command(name = "product-catalog", version, about = "Browse a product catalog")]
pub struct Cli {
    /// Path to the products JSON document
    #[arg(long, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Configuration file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory that product image paths are relative to
    #[arg(long, value_name = "DIR")]
    pub image_root: Option<PathBuf>,

    /// How search and category filters combine
    #[arg(long, value_enum)]
    pub filter_policy: Option<PolicyArg>,

    /// Log level (trace, debug, info, warn, error). RUST_LOG takes precedence.
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyArg {
    Override,
    Compose,
}

impl From<PolicyArg> for FilterPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Override => FilterPolicy::Override,
            PolicyArg::Compose => FilterPolicy::Compose,
        }
    }
}

/// All runtime settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Product document location
    pub data_source: PathBuf,
    /// Directory that product image paths are relative to. Unset means the
    /// working directory, like a page root.
    pub image_root: Option<PathBuf>,
    /// Image shown when a product image is missing or unreadable
    pub placeholder_image: PathBuf,
    /// Company name used in share messages and spec sheets
    pub brand: String,
    /// Messaging deep-link endpoint
    pub share_base_url: String,
    /// Address put into share messages; defaults to the data source location
    pub page_address: Option<String>,
    /// Write spec sheets here without asking; when unset a save dialog opens
    pub export_dir: Option<PathBuf>,
    pub filter_policy: FilterPolicy,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_source: PathBuf::from("data/products.json"),
            image_root: None,
            placeholder_image: PathBuf::from("assets/placeholder.jpg"),
            brand: "GeneralTec".to_string(),
            share_base_url: "https://wa.me/".to_string(),
            page_address: None,
            export_dir: None,
            filter_policy: FilterPolicy::Override,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Build the effective configuration from the command line
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) if !path.exists() => {
                return Err(CatalogError::Config(format!(
                    "config file not found: {}",
                    path.display()
                )))
            }
            Some(path) => Self::load_from(path)?,
            None => match Self::default_path() {
                Some(path) => Self::load_from(&path)?,
                None => Self::default(),
            },
        };

        config.apply_cli(cli);
        Ok(config)
    }

    /// Read a TOML file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::Config(format!("cannot read {}: {e}", path.display())))?;
        toml::from_str(&content)
            .map_err(|e| CatalogError::Config(format!("invalid {}: {e}", path.display())))
    }

    /// `<config dir>/product-catalog/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("product-catalog").join("config.toml"))
    }

    fn apply_cli(&mut self, cli: &Cli) {
        if let Some(data) = &cli.data {
            self.data_source = data.clone();
        }
        if let Some(root) = &cli.image_root {
            self.image_root = Some(root.clone());
        }
        if let Some(policy) = cli.filter_policy {
            self.filter_policy = policy.into();
        }
        if let Some(level) = &cli.log_level {
            self.log_level = level.clone();
        }
    }

    /// Share settings, with the page address falling back to `location`
    pub fn share_config(&self, location: &str) -> ShareConfig {
        ShareConfig {
            brand: self.brand.clone(),
            base_url: self.share_base_url.clone(),
            page_address: self
                .page_address
                .clone()
                .unwrap_or_else(|| location.to_string()),
        }
    }

    /// Where the save dialog starts
    pub fn default_export_dir(&self) -> PathBuf {
        self.export_dir.clone().unwrap_or_else(|| {
            dirs::download_dir()
                .or_else(dirs::home_dir)
                .unwrap_or_default()
                .join("product-catalog")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = AppConfig::load_from(Path::new("/nonexistent/config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
brand = "Acme Cooling"
filter_policy = "compose"
export_dir = "/tmp/sheets"
"#,
        )
        .unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.brand, "Acme Cooling");
        assert_eq!(config.filter_policy, FilterPolicy::Compose);
        assert_eq!(config.export_dir, Some(PathBuf::from("/tmp/sheets")));
        assert_eq!(config.data_source, PathBuf::from("data/products.json"));
        assert_eq!(config.share_base_url, "https://wa.me/");
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "filter_policy = \"sometimes\"").unwrap();

        assert!(matches!(
            AppConfig::load_from(&path),
            Err(CatalogError::Config(_))
        ));
    }

    #[test]
    fn test_cli_flags_win() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "data_source = \"from-file.json\"\nlog_level = \"warn\"").unwrap();

        let cli = Cli::parse_from([
            "product-catalog",
            "--config",
            path.to_str().unwrap(),
            "--data",
            "from-cli.json",
            "--filter-policy",
            "compose",
        ]);
        let config = AppConfig::resolve(&cli).unwrap();

        assert_eq!(config.data_source, PathBuf::from("from-cli.json"));
        assert_eq!(config.image_root, None);
        assert_eq!(config.filter_policy, FilterPolicy::Compose);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_image_root_from_file_and_flag() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "image_root = \"/srv/catalog\"").unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.image_root, Some(PathBuf::from("/srv/catalog")));

        let cli = Cli::parse_from([
            "product-catalog",
            "--config",
            path.to_str().unwrap(),
            "--data",
            "/home/user/catalog/products.json",
            "--image-root",
            "/home/user/catalog",
        ]);
        let config = AppConfig::resolve(&cli).unwrap();
        assert_eq!(config.image_root, Some(PathBuf::from("/home/user/catalog")));
    }

    #[test]
    fn test_explicit_missing_config_is_an_error() {
        let cli = Cli {
            config: Some(PathBuf::from("/nonexistent/config.toml")),
            ..Cli::default()
        };
        assert!(AppConfig::resolve(&cli).is_err());
    }

    #[test]
    fn test_page_address_falls_back_to_location() {
        let mut config = AppConfig::default();
        assert_eq!(
            config.share_config("/srv/catalog/data/products.json").page_address,
            "/srv/catalog/data/products.json"
        );

        config.page_address = Some("https://catalog.example.com/".to_string());
        assert_eq!(
            config.share_config("ignored").page_address,
            "https://catalog.example.com/"
        );
    }
}
