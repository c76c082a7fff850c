//! Central dashboard: the station map and the card grid.

use eframe::egui::{self, Color32};

use bike_core::incentives::{rebalance_incentive, RebalanceIncentive};
use bike_core::station::{Need, Station};
use bike_core::status::{marker_style, station_notices, Notice};

use crate::app::BikeUiApp;
use crate::ui::constants::{CARD_COLUMNS, INCENTIVE_GREEN, LIGHT_RED, MAP_HEIGHT, PRIMARY_RED};
use crate::ui::rendering::{draw_station, project, MapBounds};

pub fn render_dashboard(ui: &mut egui::Ui, app: &mut BikeUiApp) {
    render_map_panel(ui, app);

    ui.heading("Station details & actions");
    // Button clicks are collected while the cards render over the immutable
    // station list, then applied in one pass.
    let mut clicks: Vec<(usize, Need)> = Vec::new();
    for row in app.stations.chunks(CARD_COLUMNS) {
        ui.columns(CARD_COLUMNS, |columns| {
            for (column, station) in columns.iter_mut().zip(row) {
                render_station_card(column, app, station, &mut clicks);
            }
        });
    }
    for (station_id, need) in clicks {
        app.wait_at(station_id, need);
    }
}

fn render_map_panel(ui: &mut egui::Ui, app: &BikeUiApp) {
    ui.heading("Live station map");
    let map_size = egui::Vec2::new(ui.available_width(), MAP_HEIGHT);
    let (map_rect, _) = ui.allocate_exact_size(map_size, egui::Sense::hover());
    let painter = ui.painter_at(map_rect);

    painter.rect_filled(map_rect, 0.0, egui::Color32::from_gray(20));
    painter.rect_stroke(
        map_rect,
        0.0,
        egui::Stroke::new(1.0, egui::Color32::from_gray(60)),
        egui::StrokeKind::Middle,
    );

    let bounds = MapBounds::around(&app.stations, app.config.center);
    for station in &app.stations {
        if let Some(pos) = project(station.lat, station.lng, &bounds, map_rect) {
            let style = marker_style(station, &app.config);
            draw_station(&painter, pos, station, style, app.show_labels);
        }
    }
}

fn render_station_card(
    ui: &mut egui::Ui,
    app: &BikeUiApp,
    station: &Station,
    clicks: &mut Vec<(usize, Need)>,
) {
    ui.group(|ui| {
        ui.strong(&station.name);
        ui.label(format!(
            "Bikes: {}   Docks: {}",
            station.available_bikes, station.free_docks
        ));
        ui.label(format!(
            "Rent queue: {}   Return queue: {}",
            station.waiting_to_rent, station.waiting_to_return
        ));
        ui.label(
            egui::RichText::new(format!("Capacity: {}", station.total_capacity))
                .small()
                .color(Color32::GRAY),
        );

        ui.horizontal(|ui| {
            // Joining a queue only makes sense once the resource is gone.
            if ui
                .add_enabled(
                    station.available_bikes == 0,
                    egui::Button::new("Wait to RENT"),
                )
                .clicked()
            {
                clicks.push((station.id, Need::Bikes));
            }
            if ui
                .add_enabled(station.free_docks == 0, egui::Button::new("Wait to RETURN"))
                .clicked()
            {
                clicks.push((station.id, Need::Docks));
            }
        });

        for notice in station_notices(&app.stations, station.id, &app.selector) {
            let (color, text) = notice_line(&notice);
            ui.colored_label(color, text);
        }

        if let Some(incentive) = rebalance_incentive(station, &app.config) {
            let (color, text) = incentive_line(incentive, &station.name);
            ui.colored_label(color, text);
        }
    });
}

fn notice_line(notice: &Notice) -> (Color32, String) {
    match notice {
        Notice::OutOfBikes { waiting: 0 } => (PRIMARY_RED, "No bikes available!".to_string()),
        Notice::OutOfBikes { waiting } => {
            (PRIMARY_RED, format!("No bikes! {waiting} user(s) waiting."))
        }
        Notice::OutOfDocks { waiting: 0 } => {
            (PRIMARY_RED, "Station full! No free docks.".to_string())
        }
        Notice::OutOfDocks { waiting } => (
            PRIMARY_RED,
            format!("Station full! {waiting} user(s) waiting."),
        ),
        Notice::TryAlternative {
            need: Need::Bikes,
            name,
            available,
            ..
        } => (LIGHT_RED, format!("Try {name}: {available} bikes.")),
        Notice::TryAlternative {
            need: Need::Docks,
            name,
            available,
            ..
        } => (LIGHT_RED, format!("Try returning at {name}: {available} docks.")),
        Notice::NoAlternative { need: Need::Bikes } => {
            (LIGHT_RED, "No other stations with bikes found.".to_string())
        }
        Notice::NoAlternative { need: Need::Docks } => (
            LIGHT_RED,
            "No other stations with free docks found.".to_string(),
        ),
        Notice::ReturnCredit { name, .. } => (
            INCENTIVE_GREEN,
            format!("Incentive: return at {name} & earn 1 credit!"),
        ),
    }
}

fn incentive_line(incentive: RebalanceIncentive, name: &str) -> (Color32, String) {
    match incentive {
        RebalanceIncentive::FreeElectricRide => (
            INCENTIVE_GREEN,
            format!("FREE E-RIDE! Bring a bike to {name} and your next electric ride is free."),
        ),
        RebalanceIncentive::ReturnBonus => (
            INCENTIVE_GREEN,
            format!("Help rebalance! Return a bike at {name} & earn a bonus."),
        ),
        RebalanceIncentive::TakeBonus => (
            INCENTIVE_GREEN,
            format!("Help rebalance! Take a bike from {name} & earn a bonus."),
        ),
    }
}
