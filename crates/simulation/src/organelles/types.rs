//! Organelle definitions and the keyed catalog that owns them.

use bevy::prelude::*;
use std::collections::HashMap;

/// Static parameters of one organelle type.
#[derive(Debug, Clone, PartialEq)]
pub struct OrganelleDefinition {
    /// Unique key, e.g. `"mitochondrion"`.
    pub internal_name: String,
    /// Human-readable name shown in tooltips.
    pub name: String,
    /// Bar colour when the organelle generates ATP.
    pub production_colour: Color,
    /// Bar colour when the organelle spends ATP.
    pub consumption_colour: Color,
    /// Icon asset path relative to the asset root. Empty means no icon.
    pub icon_path: String,
}

impl OrganelleDefinition {
    pub fn new(
        internal_name: impl Into<String>,
        production_colour: Color,
        consumption_colour: Color,
        icon_path: impl Into<String>,
    ) -> Self {
        let internal_name = internal_name.into();
        Self {
            name: internal_name.clone(),
            internal_name,
            production_colour,
            consumption_colour,
            icon_path: icon_path.into(),
        }
    }

    /// Builder-style display name override.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Colour for the production or consumption side of an energy bar.
    pub fn colour(&self, production: bool) -> Color {
        if production {
            self.production_colour
        } else {
            self.consumption_colour
        }
    }
}

/// All organelle definitions, in load order, indexed by internal name.
///
/// When two definitions share an internal name, the first one in load order
/// is the one returned by lookups.
#[derive(Resource, Debug, Clone, Default)]
pub struct OrganelleCatalog {
    definitions: Vec<OrganelleDefinition>,
    index: HashMap<String, usize>,
}

impl OrganelleCatalog {
    pub fn new(definitions: Vec<OrganelleDefinition>) -> Self {
        let mut index = HashMap::with_capacity(definitions.len());
        for (i, def) in definitions.iter().enumerate() {
            index.entry(def.internal_name.clone()).or_insert(i);
        }
        Self { definitions, index }
    }

    /// Look up an organelle by its internal name.
    pub fn get(&self, internal_name: &str) -> Option<&OrganelleDefinition> {
        self.index
            .get(internal_name)
            .map(|&i| &self.definitions[i])
    }

    pub fn contains(&self, internal_name: &str) -> bool {
        self.index.contains_key(internal_name)
    }

    /// Iterate definitions in load order.
    pub fn iter(&self) -> impl Iterator<Item = &OrganelleDefinition> {
        self.definitions.iter()
    }

    /// All definitions in load order.
    pub fn get_all(&self) -> &[OrganelleDefinition] {
        &self.definitions
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl FromIterator<OrganelleDefinition> for OrganelleCatalog {
    fn from_iter<I: IntoIterator<Item = OrganelleDefinition>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
