//! ATP Balance Bar UI Panel.
//!
//! Displays the energy balance of the cell being edited:
//! - Total ATP production, consumption and net balance (moving and stationary)
//! - Production bar: one segment per producing organelle
//! - Consumption bar: one segment per consumer, including base movement and
//!   osmoregulation
//!
//! Segment colours and icons come from `bar_helper::BarStyleResolver`.

mod panels;
pub mod types;
mod ui_system;

use bevy::prelude::*;

pub use types::{build_segments, AtpBalanceBarVisible, BarSegment};
pub use ui_system::{atp_balance_bar_keybind, atp_balance_bar_ui};

/// Plugin that registers the ATP balance bar UI.
pub struct AtpBalanceBarPlugin;

impl Plugin for AtpBalanceBarPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AtpBalanceBarVisible>().add_systems(
            Update,
            (atp_balance_bar_keybind, atp_balance_bar_ui).chain(),
        );
    }
}
