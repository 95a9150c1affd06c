use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod atp_balance_bar;
pub mod bar_helper;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .add_plugins(atp_balance_bar::AtpBalanceBarPlugin);
    }
}
