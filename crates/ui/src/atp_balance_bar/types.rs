//! Types and segment building for the ATP balance bars.

use bevy::prelude::*;
use simulation::energy_balance::EnergyBalance;
use simulation::organelles::OrganelleCatalog;
use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::bar_helper::{BarStyleResolver, BarType, IconLoader, ReservedBar};

/// Resource controlling whether the ATP balance window is visible.
#[derive(Resource, Default)]
pub struct AtpBalanceBarVisible(pub bool);

/// Widest a bar is drawn, in points.
pub const BAR_MAX_WIDTH: f32 = 300.0;

pub const BAR_HEIGHT: f32 = 18.0;

/// Icon edge length in the legend, in points.
pub const ICON_SIZE: f32 = 16.0;

/// One coloured piece of a segmented bar.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSegment<H> {
    /// Item name as recorded in the energy balance.
    pub name: String,
    /// Display text for tooltips and the legend.
    pub label: String,
    /// ATP per second.
    pub value: f32,
    pub colour: Color,
    pub icon: Option<H>,
}

/// Display label: reserved label, else the organelle's display name, else
/// the raw item name.
pub fn segment_label(catalog: &OrganelleCatalog, item: &str) -> String {
    if let Some(reserved) = ReservedBar::from_item(item) {
        return reserved.label().to_string();
    }
    catalog
        .get(item)
        .map_or_else(|| item.to_string(), |organelle| organelle.name.clone())
}

/// Build the segments of one bar, largest first.
///
/// Entries with a zero value are skipped. Equal values are ordered by name so
/// the bar does not flicker between frames.
pub fn build_segments<L>(
    entries: &BTreeMap<String, f32>,
    bar_type: BarType,
    production: bool,
    catalog: &OrganelleCatalog,
    loader: &L,
) -> Vec<BarSegment<L::Handle>>
where
    L: IconLoader + ?Sized,
{
    let resolver = BarStyleResolver::new(catalog);

    let mut segments: Vec<BarSegment<L::Handle>> = entries
        .iter()
        .filter(|(_, value)| **value > 0.0)
        .map(|(name, &value)| BarSegment {
            name: name.clone(),
            label: segment_label(catalog, name),
            value,
            colour: resolver.resolve_colour(bar_type, name, production),
            icon: resolver.resolve_icon(bar_type, name, loader),
        })
        .collect();

    segments.sort_by(|a, b| {
        b.value
            .partial_cmp(&a.value)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.name.cmp(&b.name))
    });
    segments
}

/// Both bars share one scale so their lengths are comparable.
pub fn bar_scale(balance: &EnergyBalance) -> f32 {
    balance.total_production.max(balance.total_consumption)
}

/// Pixel width of each segment for a bar drawn against `scale`.
pub fn segment_widths<H>(segments: &[BarSegment<H>], scale: f32, bar_width: f32) -> Vec<f32> {
    if scale <= 0.0 {
        return vec![0.0; segments.len()];
    }
    segments
        .iter()
        .map(|s| (s.value / scale).min(1.0) * bar_width)
        .collect()
}
