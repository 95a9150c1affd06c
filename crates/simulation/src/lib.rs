use bevy::prelude::*;

pub mod config;
pub mod energy_balance;
pub mod organelles;

/// Registers the simulation parameter data and the energy balance model.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<organelles::CatalogSource>()
            .init_resource::<organelles::OrganelleCatalog>()
            .init_resource::<energy_balance::EnergyBalance>()
            .add_systems(Startup, organelles::load_organelle_catalog);
    }
}
