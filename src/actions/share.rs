use std::io;
use std::process::{Command, ExitStatus};
use std::thread::{self, JoinHandle};

use crate::error::{CatalogError, Result};
use crate::state::catalog::Catalog;

/// What goes into a share message and where it is sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareConfig {
    /// Company name used in the message
    pub brand: String,
    /// Deep-link endpoint that accepts a `text` query parameter
    pub base_url: String,
    /// Address appended to the message
    pub page_address: String,
}

/// A composed share message and its deep link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    pub text: String,
    pub url: String,
}

/// Opens a deep link in a new browsing context
pub trait ShareTarget {
    fn open(&self, url: &str) -> Result<()>;
}

/// Hands links to the platform's default URL handler
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowser;

impl ShareTarget for SystemBrowser {
    fn open(&self, url: &str) -> Result<()> {
        launch(opener_command(url)).map(|_| ())
    }
}

fn opener_command(url: &str) -> Command {
    #[cfg(target_os = "macos")]
    let command = {
        let mut command = Command::new("open");
        command.arg(url);
        command
    };
    #[cfg(target_os = "windows")]
    let command = {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", "", url]);
        command
    };
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let command = {
        let mut command = Command::new("xdg-open");
        command.arg(url);
        command
    };

    command
}

/// Start the opener and wait for it on a detached thread, so the exited
/// process is reaped without blocking the UI.
fn launch(mut command: Command) -> Result<JoinHandle<io::Result<ExitStatus>>> {
    let mut child = command.spawn().map_err(CatalogError::Share)?;
    Ok(thread::spawn(move || child.wait()))
}

/// Build the share message for a product id.
///
/// Returns `None` when the id is not in the catalog.
pub fn compose(catalog: &Catalog, id: &str, config: &ShareConfig) -> Option<ShareRequest> {
    let product = catalog.find(id)?;

    let text = format!(
        "Check out {} ({}) from {}:\n\n{}",
        product.model, product.id, config.brand, config.page_address
    );
    let url = format!("{}?text={}", config.base_url, urlencoding::encode(&text));

    Some(ShareRequest { text, url })
}

/// Compose and open a share link. Unknown ids are a silent no-op.
pub fn share(
    catalog: &Catalog,
    id: &str,
    config: &ShareConfig,
    target: &impl ShareTarget,
) -> Result<Option<ShareRequest>> {
    let Some(request) = compose(catalog, id, config) else {
        tracing::debug!(id, "Share requested for unknown product, ignoring");
        return Ok(None);
    };

    target.open(&request.url)?;
    tracing::info!(id, "📤 Opened share link");
    Ok(Some(request))
}
