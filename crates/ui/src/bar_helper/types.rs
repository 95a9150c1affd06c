//! Bar types, reserved items and fixed colours.

use bevy::prelude::*;
use simulation::config::{BASE_MOVEMENT, OSMOREGULATION};

/// Tag the editor uses for ATP (energy) bars.
pub const ATP_TAG: &str = "ATP";

/// Neutral gray for anything without a specific rule.
pub const FALLBACK_COLOUR: Color = Color::srgb(0.68, 0.68, 0.68);

const BASE_MOVEMENT_COLOUR: Color = Color::srgb(1.0, 0.33, 0.14);
const OSMOREGULATION_COLOUR: Color = Color::srgb(1.0, 0.84, 0.24);

const BASE_MOVEMENT_ICON: &str = "textures/gui/bevel/baseMovementIcon.png";
const OSMOREGULATION_ICON: &str = "textures/gui/bevel/osmoIcon.png";

/// Which styling rule set a bar uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BarType {
    /// ATP production/consumption bars.
    Atp,
    /// Any bar type without styling rules. Always resolves to the fallback.
    Other,
}

impl BarType {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            ATP_TAG => BarType::Atp,
            _ => BarType::Other,
        }
    }
}

/// Built-in ATP consumers styled independently of the organelle catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReservedBar {
    BaseMovement,
    Osmoregulation,
}

impl ReservedBar {
    pub fn from_item(name: &str) -> Option<Self> {
        match name {
            BASE_MOVEMENT => Some(ReservedBar::BaseMovement),
            OSMOREGULATION => Some(ReservedBar::Osmoregulation),
            _ => None,
        }
    }

    /// Same colour on production and consumption bars.
    pub fn colour(self) -> Color {
        match self {
            ReservedBar::BaseMovement => BASE_MOVEMENT_COLOUR,
            ReservedBar::Osmoregulation => OSMOREGULATION_COLOUR,
        }
    }

    /// Icon asset path relative to the asset root.
    pub fn icon_path(self) -> &'static str {
        match self {
            ReservedBar::BaseMovement => BASE_MOVEMENT_ICON,
            ReservedBar::Osmoregulation => OSMOREGULATION_ICON,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReservedBar::BaseMovement => "Base Movement",
            ReservedBar::Osmoregulation => "Osmoregulation",
        }
    }
}
