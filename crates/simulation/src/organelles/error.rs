// ---------------------------------------------------------------------------
// CatalogError: failures while loading the organelle parameter file
// ---------------------------------------------------------------------------

use std::fmt;

/// Errors that can occur while loading organelle definitions.
///
/// Only the loading boundary produces these. Lookups into a loaded catalog
/// never fail.
#[derive(Debug)]
pub enum CatalogError {
    /// The parameter file could not be read.
    Io(std::io::Error),
    /// The file is not valid JSON or an entry has the wrong shape.
    Parse(serde_json::Error),
    /// A colour field is not a valid `#RRGGBB` / `#RRGGBBAA` hex string.
    InvalidColour {
        organelle: String,
        field: &'static str,
        value: String,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(e) => write!(f, "I/O error: {e}"),
            CatalogError::Parse(e) => write!(f, "Parse error: {e}"),
            CatalogError::InvalidColour {
                organelle,
                field,
                value,
            } => write!(
                f,
                "Invalid colour for organelle '{organelle}': {field} = \"{value}\""
            ),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Io(e) => Some(e),
            CatalogError::Parse(e) => Some(e),
            CatalogError::InvalidColour { .. } => None,
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(e: std::io::Error) -> Self {
        CatalogError::Io(e)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Parse(e)
    }
}
