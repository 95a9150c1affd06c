//! The colour/icon lookup itself.

use bevy::prelude::*;
use bevy_egui::egui;
use simulation::organelles::OrganelleCatalog;

use super::icon_loader::IconLoader;
use super::types::{BarType, ReservedBar, FALLBACK_COLOUR};

/// Stateless colour and icon lookup for energy bar segments.
///
/// Borrows the organelle catalog for the duration of a frame; holds nothing
/// else. Reserved items are checked first, then the catalog.
#[derive(Debug, Clone, Copy)]
pub struct BarStyleResolver<'a> {
    catalog: &'a OrganelleCatalog,
}

impl<'a> BarStyleResolver<'a> {
    pub fn new(catalog: &'a OrganelleCatalog) -> Self {
        Self { catalog }
    }

    /// Colour for the bar segment of `item`.
    ///
    /// `production` picks the organelle's production or consumption colour.
    /// Reserved items ignore it.
    pub fn resolve_colour(&self, bar_type: BarType, item: &str, production: bool) -> Color {
        match bar_type {
            BarType::Atp => {
                if let Some(reserved) = ReservedBar::from_item(item) {
                    return reserved.colour();
                }
                self.catalog
                    .get(item)
                    .map_or(FALLBACK_COLOUR, |organelle| organelle.colour(production))
            }
            BarType::Other => FALLBACK_COLOUR,
        }
    }

    /// Icon asset path for `item`, if one applies.
    pub fn icon_path(&self, bar_type: BarType, item: &str) -> Option<&'a str> {
        match bar_type {
            BarType::Atp => {
                if let Some(reserved) = ReservedBar::from_item(item) {
                    return Some(reserved.icon_path());
                }
                self.catalog
                    .get(item)
                    .map(|organelle| organelle.icon_path.as_str())
            }
            BarType::Other => None,
        }
    }

    /// Icon for the bar segment of `item`, loaded through `loader`.
    ///
    /// Whatever the loader returns is passed through, including `None`.
    pub fn resolve_icon<L>(&self, bar_type: BarType, item: &str, loader: &L) -> Option<L::Handle>
    where
        L: IconLoader + ?Sized,
    {
        let path = self.icon_path(bar_type, item)?;
        loader.load_icon(path)
    }
}

/// Convert a Bevy colour to the egui colour used for painting.
pub fn colour_to_egui(colour: Color) -> egui::Color32 {
    let srgba = colour.to_srgba();
    let to_u8 = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(
        to_u8(srgba.red),
        to_u8(srgba.green),
        to_u8(srgba.blue),
        to_u8(srgba.alpha),
    )
}
