/// State management module
///
/// This module handles all catalog state, including:
/// - Product data structures (data.rs)
/// - Search and category predicates (filter.rs)
/// - The catalog itself: master list, view list, screen (catalog.rs)

pub mod catalog;
pub mod data;
pub mod filter;
