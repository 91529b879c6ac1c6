//! Product catalog viewer
//!
//! Loads a static product document, shows it as a searchable and
//! filterable card grid with a detail screen per product, and offers
//! share and spec-sheet export actions.

pub mod actions;
pub mod app;
pub mod config;
pub mod error;
pub mod source;
pub mod state;
pub mod ui;
pub mod view;
