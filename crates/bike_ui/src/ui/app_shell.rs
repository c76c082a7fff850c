use eframe::egui;

use crate::app::BikeUiApp;
use crate::ui::controls::render_control_panel;
use crate::ui::dashboard::render_dashboard;

pub fn run() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1280.0, 900.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Biking Barcelona - Crowd Simulation",
        options,
        Box::new(|_cc| Ok(Box::new(BikeUiApp::new()))),
    )
}

impl eframe::App for BikeUiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            render_control_panel(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                render_dashboard(ui, self);
            });
        });
    }
}
