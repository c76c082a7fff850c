//! Map rendering: bounds, projection, and station markers.

use eframe::egui::{self, Align2, Color32, FontId};

use bike_core::station::Station;
use bike_core::status::{MarkerColor, MarkerIcon, MarkerStyle};

use crate::ui::constants::MAP_MARGIN_DEG;

/// Geographic bounds for map projection.
pub struct MapBounds {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lng_min: f64,
    pub lng_max: f64,
}

impl MapBounds {
    /// Frame all stations with a margin; an empty network frames the center.
    pub fn around(stations: &[Station], center: (f64, f64)) -> Self {
        let mut lat_min = center.0;
        let mut lat_max = center.0;
        let mut lng_min = center.1;
        let mut lng_max = center.1;
        for station in stations {
            lat_min = lat_min.min(station.lat);
            lat_max = lat_max.max(station.lat);
            lng_min = lng_min.min(station.lng);
            lng_max = lng_max.max(station.lng);
        }
        Self {
            lat_min: lat_min - MAP_MARGIN_DEG,
            lat_max: lat_max + MAP_MARGIN_DEG,
            lng_min: lng_min - MAP_MARGIN_DEG,
            lng_max: lng_max + MAP_MARGIN_DEG,
        }
    }
}

/// Project a coordinate to screen space.
pub fn project(lat: f64, lng: f64, bounds: &MapBounds, rect: egui::Rect) -> Option<egui::Pos2> {
    if bounds.lat_max <= bounds.lat_min || bounds.lng_max <= bounds.lng_min {
        return None;
    }

    let x = (lng - bounds.lng_min) / (bounds.lng_max - bounds.lng_min);
    let y = (bounds.lat_max - lat) / (bounds.lat_max - bounds.lat_min);
    if !(0.0..=1.0).contains(&x) || !(0.0..=1.0).contains(&y) {
        return None;
    }

    let px = rect.left() + rect.width() * x as f32;
    let py = rect.top() + rect.height() * y as f32;
    Some(egui::pos2(px, py))
}

pub fn marker_fill(color: MarkerColor) -> Color32 {
    match color {
        MarkerColor::Green => Color32::from_rgb(0x4C, 0xAF, 0x50),
        MarkerColor::Orange => Color32::from_rgb(0xFF, 0x98, 0x00),
        MarkerColor::Red => Color32::from_rgb(0xF4, 0x43, 0x36),
        MarkerColor::DarkRed => Color32::from_rgb(0x8B, 0x00, 0x00),
    }
}

/// Draw a station marker. Waiting users (the user-clock icon) show as a ring
/// around the dot.
pub fn draw_station(
    painter: &egui::Painter,
    pos: egui::Pos2,
    station: &Station,
    style: MarkerStyle,
    show_label: bool,
) {
    let fill = marker_fill(style.color);
    painter.circle_filled(pos, 6.0, fill);
    if style.icon == MarkerIcon::UserClock {
        painter.circle_stroke(pos, 9.0, egui::Stroke::new(2.0, fill));
    }
    if show_label {
        painter.text(
            pos + egui::vec2(0.0, 11.0),
            Align2::CENTER_TOP,
            &station.name,
            FontId::proportional(10.0),
            Color32::LIGHT_GRAY,
        );
    }
}

pub fn render_map_legend(ui: &mut egui::Ui) {
    ui.horizontal_wrapped(|ui| {
        ui.colored_label(marker_fill(MarkerColor::DarkRed), "● ring");
        ui.label("no bikes, users waiting");
        ui.colored_label(marker_fill(MarkerColor::Red), "●");
        ui.label("no bikes");
        ui.colored_label(marker_fill(MarkerColor::Orange), "●");
        ui.label("few bikes");
        ui.colored_label(marker_fill(MarkerColor::Green), "●");
        ui.label("good availability (ring: full, users waiting to return)");
    });
}
