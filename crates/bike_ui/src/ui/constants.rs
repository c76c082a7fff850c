//! Constants used throughout the UI.

use eframe::egui::Color32;

/// Brand palette carried over from the original dashboard styling.
pub const PRIMARY_RED: Color32 = Color32::from_rgb(0xD3, 0x2F, 0x2F);
pub const LIGHT_RED: Color32 = Color32::from_rgb(0xFF, 0xCD, 0xD2);
pub const INCENTIVE_GREEN: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);

pub const MAP_HEIGHT: f32 = 500.0;

/// Margin added around the station extent when framing the map (degrees).
pub const MAP_MARGIN_DEG: f64 = 0.004;

/// Station cards per row.
pub const CARD_COLUMNS: usize = 4;
