//! Colour and icon lookup for the editor's energy bars.
//!
//! Given a bar type, an item name and a production/consumption flag,
//! `BarStyleResolver` picks the colour and icon a bar segment is drawn with:
//! - Reserved items (base movement, osmoregulation) use fixed styling and
//!   shadow any organelle with the same name
//! - Other items are looked up in the `OrganelleCatalog`
//! - Anything unresolved falls back to neutral gray and no icon
//!
//! Lookups never fail; a renamed or missing organelle shows a placeholder
//! instead of breaking the editor.

mod icon_loader;
mod resolver;
mod tests;
pub mod types;

pub use icon_loader::IconLoader;
pub use resolver::{colour_to_egui, BarStyleResolver};
pub use types::{BarType, ReservedBar, ATP_TAG, FALLBACK_COLOUR};
