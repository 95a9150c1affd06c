//! Parameter file parsing and the startup system that fills the catalog.

use bevy::color::Srgba;
use bevy::prelude::*;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

use super::error::CatalogError;
use super::types::{OrganelleCatalog, OrganelleDefinition};
use crate::config::{ASSET_ROOT, ORGANELLES_FILE};

/// Where the startup system gets the organelle catalog from.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// Load the JSON parameter file at this path.
    File(PathBuf),
    /// The `OrganelleCatalog` resource was inserted directly; leave it alone.
    Provided,
}

impl Default for CatalogSource {
    fn default() -> Self {
        CatalogSource::File(Path::new(ASSET_ROOT).join(ORGANELLES_FILE))
    }
}

/// One entry of the parameter file. The internal name is the object key.
#[derive(Debug, Deserialize)]
struct RawOrganelle {
    #[serde(default)]
    name: String,
    production_colour: String,
    consumption_colour: String,
    #[serde(default)]
    icon_path: String,
}

/// Top-level object of the parameter file, in file order.
///
/// Repeated keys are kept as separate entries so the catalog can apply its
/// first-match rule; a plain JSON map would keep only the last one.
struct OrganelleEntries(Vec<(String, RawOrganelle)>);

impl<'de> Deserialize<'de> for OrganelleEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = OrganelleEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping organelle internal names to definitions")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, RawOrganelle>()? {
                    entries.push(entry);
                }
                Ok(OrganelleEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// Catalog colours are always opaque; an alpha byte in the file is ignored.
fn parse_colour(organelle: &str, field: &'static str, value: &str) -> Result<Color, CatalogError> {
    Srgba::hex(value)
        .map(|srgba| Color::from(Srgba { alpha: 1.0, ..srgba }))
        .map_err(|_| CatalogError::InvalidColour {
            organelle: organelle.to_string(),
            field,
            value: value.to_string(),
        })
}

/// Parse the organelle parameter file format.
///
/// The top level is a JSON object keyed by internal name; key order becomes
/// the catalog's iteration order.
pub fn parse_catalog(json: &str) -> Result<OrganelleCatalog, CatalogError> {
    let OrganelleEntries(entries) = serde_json::from_str(json)?;

    let mut definitions = Vec::with_capacity(entries.len());
    for (internal_name, raw) in entries {
        let production_colour =
            parse_colour(&internal_name, "production_colour", &raw.production_colour)?;
        let consumption_colour =
            parse_colour(&internal_name, "consumption_colour", &raw.consumption_colour)?;
        let name = if raw.name.is_empty() {
            internal_name.clone()
        } else {
            raw.name
        };
        definitions.push(OrganelleDefinition {
            internal_name,
            name,
            production_colour,
            consumption_colour,
            icon_path: raw.icon_path,
        });
    }

    Ok(OrganelleCatalog::new(definitions))
}

impl OrganelleCatalog {
    /// Read and parse a parameter file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        parse_catalog(&json)
    }
}

/// Startup system: fill `OrganelleCatalog` from the configured source.
///
/// A missing or malformed file leaves the catalog empty. Energy bars then
/// fall back to neutral styling instead of taking the editor down.
pub fn load_organelle_catalog(source: Res<CatalogSource>, mut catalog: ResMut<OrganelleCatalog>) {
    let path = match source.as_ref() {
        CatalogSource::File(path) => path,
        CatalogSource::Provided => {
            info!("Using provided organelle catalog ({} entries)", catalog.len());
            return;
        }
    };

    match OrganelleCatalog::load(path) {
        Ok(loaded) => {
            info!(
                "Loaded {} organelle definitions from {}",
                loaded.len(),
                path.display()
            );
            *catalog = loaded;
        }
        Err(e) => {
            warn!(
                "Failed to load organelle catalog from {}, continuing with an empty catalog: {}",
                path.display(),
                e
            );
            *catalog = OrganelleCatalog::default();
        }
    }
}
