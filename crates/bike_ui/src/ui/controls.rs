//! Control panel: refresh, seed, network parameters, legend.

use eframe::egui;

use bike_core::catalog::STATION_CATALOG;

use crate::app::BikeUiApp;
use crate::ui::constants::PRIMARY_RED;
use crate::ui::rendering::render_map_legend;

pub fn render_control_panel(ui: &mut egui::Ui, app: &mut BikeUiApp) {
    ui.horizontal(|ui| {
        if ui.button("Simulate time passing (refresh)").clicked() {
            app.refresh();
        }
        ui.checkbox(&mut app.seed_enabled, "Seed");
        ui.add_enabled(app.seed_enabled, egui::DragValue::new(&mut app.seed_value));
        ui.checkbox(&mut app.show_labels, "Station labels");
        ui.label(format!("{} stations", app.stations.len()));
    });

    if let Some(err) = &app.config_error {
        ui.colored_label(PRIMARY_RED, format!("Configuration error: {err}"));
    }

    egui::CollapsingHeader::new("Network parameters")
        .default_open(false)
        .show(ui, |ui| {
            ui.add(
                egui::Slider::new(&mut app.config.station_count, 0..=STATION_CATALOG.len() * 2)
                    .text("Stations"),
            );
            ui.add(egui::Slider::new(&mut app.config.min_capacity, 2..=40).text("Min capacity"));
            ui.add(egui::Slider::new(&mut app.config.max_capacity, 2..=40).text("Max capacity"));
            ui.add(egui::Slider::new(&mut app.config.max_waiting, 1..=10).text("Max waiting"));
            ui.label("Parameter changes apply on refresh.");
        });

    egui::CollapsingHeader::new("Map legend (bike availability)")
        .default_open(true)
        .show(ui, |ui| {
            render_map_legend(ui);
        });
}
