use std::sync::Arc;

use eframe::egui;

use crate::data::model::LaunchDataset;
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct LaunchDashApp {
    pub state: AppState,
}

impl LaunchDashApp {
    /// Start with `dataset` already loaded, or empty with `status` shown.
    pub fn new(dataset: Option<Arc<LaunchDataset>>, status: Option<String>) -> Self {
        let mut state = AppState::default();
        if let Some(ds) = dataset {
            state.set_dataset(ds);
        }
        state.status_message = status;
        Self { state }
    }
}

impl eframe::App for LaunchDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: controls ----
        egui::SidePanel::left("control_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: both charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let (Some(view), Some(controls)) = (&self.state.view, &self.state.controls) else {
                ui.centered_and_justified(|ui| {
                    ui.heading("Open a launch records file  (File → Open…)");
                });
                return;
            };
            let chart_height = (ui.available_height() / 2.0 - 40.0).max(120.0);
            plot::pie_chart(ui, &view.pie, chart_height);
            ui.separator();
            plot::scatter_chart(ui, &view.scatter, controls.payload, chart_height);
        });
    }
}
