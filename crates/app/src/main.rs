use bevy::asset::io::file::FileAssetReader;
use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};
use std::path::PathBuf;

use simulation::config::{ASSET_ROOT, ORGANELLES_FILE, ORGANELLES_PATH_ENV};
use simulation::organelles::CatalogSource;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Protocell Editor".to_string(),
            resolution: (1280.0, 720.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(16)),
        unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
    });

    // Resolve the parameter file the same way Bevy resolves its asset root.
    let organelles_path = std::env::var(ORGANELLES_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            FileAssetReader::get_base_path()
                .join(ASSET_ROOT)
                .join(ORGANELLES_FILE)
        });
    app.insert_resource(CatalogSource::File(organelles_path));

    app.add_plugins((simulation::SimulationPlugin, ui::UiPlugin))
        .add_systems(Startup, (spawn_camera, seed_starting_cell));

    app.run();
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// The editor opens on a minimal starting cell: one cytoplasm and the
/// built-in upkeep costs, so the ATP bars have something to show.
fn seed_starting_cell(
    mut balance: ResMut<simulation::energy_balance::EnergyBalance>,
    mut visible: ResMut<ui::atp_balance_bar::AtpBalanceBarVisible>,
) {
    balance.add_production("cytoplasm", 3.0);
    balance.add_consumption(simulation::config::OSMOREGULATION, 1.0);
    balance.add_movement_consumption(1.0);
    visible.0 = true;
}
