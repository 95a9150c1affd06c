//! Organelle parameter data.
//!
//! The `OrganelleCatalog` resource holds every organelle definition loaded
//! from the parameter file at startup. It is read-only after loading:
//! editor widgets look organelles up by internal name to style themselves.

mod error;
mod loading;
pub mod types;

pub use error::CatalogError;
pub use loading::{load_organelle_catalog, parse_catalog, CatalogSource};
pub use types::{OrganelleCatalog, OrganelleDefinition};
