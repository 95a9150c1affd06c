/// Directory Bevy serves assets from, relative to the working directory.
pub const ASSET_ROOT: &str = "assets";

/// Organelle parameter file, relative to [`ASSET_ROOT`].
pub const ORGANELLES_FILE: &str = "config/organelles.json";

/// Environment variable that overrides the organelle parameter file path.
pub const ORGANELLES_PATH_ENV: &str = "PROTOCELL_ORGANELLES";

/// Reserved energy item: ATP spent moving the cell.
pub const BASE_MOVEMENT: &str = "baseMovement";

/// Reserved energy item: ATP spent on osmoregulation (cell upkeep).
pub const OSMOREGULATION: &str = "osmoregulation";
