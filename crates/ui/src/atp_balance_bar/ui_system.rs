//! Main ATP balance bar UI systems.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::energy_balance::EnergyBalance;
use simulation::organelles::OrganelleCatalog;

use super::panels;
use super::types::{bar_scale, build_segments, AtpBalanceBarVisible, BarSegment};
use crate::bar_helper::BarType;

/// Toggles the ATP balance window with the B key.
pub fn atp_balance_bar_keybind(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut visible: ResMut<AtpBalanceBarVisible>,
    mut contexts: EguiContexts,
) {
    if contexts.ctx_mut().wants_keyboard_input() {
        return;
    }
    if keyboard.just_pressed(KeyCode::KeyB) {
        visible.0 = !visible.0;
    }
}

/// Registers each segment's icon with egui so it can be drawn.
fn register_icons(
    contexts: &mut EguiContexts,
    segments: &[BarSegment<Handle<Image>>],
) -> Vec<Option<egui::TextureId>> {
    segments
        .iter()
        .map(|s| s.icon.clone().map(|handle| contexts.add_image(handle)))
        .collect()
}

/// Displays the ATP production and consumption bars.
pub fn atp_balance_bar_ui(
    mut contexts: EguiContexts,
    visible: Res<AtpBalanceBarVisible>,
    balance: Res<EnergyBalance>,
    catalog: Res<OrganelleCatalog>,
    asset_server: Res<AssetServer>,
) {
    if !visible.0 {
        return;
    }

    let production = build_segments(
        &balance.production,
        BarType::Atp,
        true,
        &catalog,
        asset_server.as_ref(),
    );
    let consumption = build_segments(
        &balance.consumption,
        BarType::Atp,
        false,
        &catalog,
        asset_server.as_ref(),
    );
    let production_icons = register_icons(&mut contexts, &production);
    let consumption_icons = register_icons(&mut contexts, &consumption);
    let scale = bar_scale(&balance);

    egui::Window::new("ATP Balance")
        .default_open(true)
        .default_width(320.0)
        .show(contexts.ctx_mut(), |ui| {
            panels::render_balance_summary(
                ui,
                balance.total_production,
                balance.total_consumption,
                balance.final_balance(),
                balance.final_balance_stationary(),
            );

            ui.add_space(4.0);
            ui.separator();

            panels::render_segmented_bar(ui, "Production", &production, &production_icons, scale);

            ui.add_space(4.0);
            ui.separator();

            panels::render_segmented_bar(
                ui,
                "Consumption",
                &consumption,
                &consumption_icons,
                scale,
            );
        });
}
