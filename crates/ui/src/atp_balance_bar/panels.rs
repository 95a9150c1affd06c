//! Individual UI panel rendering functions for the ATP balance window.

use bevy::prelude::*;
use bevy_egui::egui;

use super::types::{segment_widths, BarSegment, BAR_HEIGHT, BAR_MAX_WIDTH, ICON_SIZE};
use crate::bar_helper::colour_to_egui;

// =============================================================================
// Colors
// =============================================================================

const COLOR_GREEN: egui::Color32 = egui::Color32::from_rgb(80, 220, 80);
const COLOR_RED: egui::Color32 = egui::Color32::from_rgb(255, 60, 60);
const COLOR_BAR_BG: egui::Color32 = egui::Color32::from_rgb(40, 40, 40);

// =============================================================================
// Balance Summary
// =============================================================================

/// Renders total production, consumption and the resulting balance.
pub fn render_balance_summary(
    ui: &mut egui::Ui,
    total_production: f32,
    total_consumption: f32,
    final_balance: f32,
    final_balance_stationary: f32,
) {
    ui.horizontal(|ui| {
        ui.label("ATP Production:");
        ui.label(format!("{:.1}/s", total_production));
    });
    ui.horizontal(|ui| {
        ui.label("ATP Consumption:");
        ui.label(format!("{:.1}/s", total_consumption));
    });
    ui.horizontal(|ui| {
        ui.label("Balance:");
        ui.colored_label(balance_color(final_balance), format!("{:+.1}/s", final_balance));
    });
    ui.horizontal(|ui| {
        ui.label("Balance (stationary):");
        ui.colored_label(
            balance_color(final_balance_stationary),
            format!("{:+.1}/s", final_balance_stationary),
        );
    });
}

fn balance_color(balance: f32) -> egui::Color32 {
    if balance < 0.0 {
        COLOR_RED
    } else {
        COLOR_GREEN
    }
}

// =============================================================================
// Segmented Bar
// =============================================================================

/// Renders one segmented bar plus its legend.
///
/// `icons` holds the egui texture for each segment, in segment order.
pub fn render_segmented_bar(
    ui: &mut egui::Ui,
    title: &str,
    segments: &[BarSegment<Handle<Image>>],
    icons: &[Option<egui::TextureId>],
    scale: f32,
) {
    ui.strong(title);
    if segments.is_empty() {
        ui.label("None");
        return;
    }

    let desired_width = ui.available_width().min(BAR_MAX_WIDTH);
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(desired_width, BAR_HEIGHT),
        egui::Sense::hover(),
    );

    ui.painter().rect_filled(rect, 2.0, COLOR_BAR_BG);

    let widths = segment_widths(segments, scale, rect.width());
    let mut x = rect.min.x;
    for (i, (segment, width)) in segments.iter().zip(widths).enumerate() {
        if width <= 0.0 {
            continue;
        }
        let seg_rect = egui::Rect::from_min_size(
            egui::pos2(x, rect.min.y),
            egui::vec2(width, rect.height()),
        );
        ui.painter()
            .rect_filled(seg_rect, 0.0, colour_to_egui(segment.colour));
        ui.interact(seg_rect, ui.id().with((title, i)), egui::Sense::hover())
            .on_hover_text(format!("{}: {:.1} ATP/s", segment.label, segment.value));
        x += width;
    }

    for (segment, icon) in segments.iter().zip(icons) {
        ui.horizontal(|ui| {
            match icon {
                Some(texture) => {
                    ui.add(egui::Image::new((
                        *texture,
                        egui::vec2(ICON_SIZE, ICON_SIZE),
                    )));
                }
                None => {
                    let (swatch, _) = ui.allocate_exact_size(
                        egui::vec2(ICON_SIZE, ICON_SIZE),
                        egui::Sense::hover(),
                    );
                    ui.painter()
                        .rect_filled(swatch, 2.0, colour_to_egui(segment.colour));
                }
            }
            ui.label(format!("{}: {:.1}", segment.label, segment.value));
        });
    }
}
