/// Actions offered on the detail screen
///
/// - Share: build a messaging deep link and open it (share.rs)
/// - Export: hand a product to a document writer (export.rs)
///
/// Both look products up in the catalog passed to them; neither keeps
/// any state of its own.

pub mod export;
pub mod share;
