use std::sync::Arc;

use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::filter::{site_options, SiteSelector};
use crate::state::{slider_domain, AppState, SLIDER_MARKS, SLIDER_STEP};

// ---------------------------------------------------------------------------
// Left side panel – dashboard controls
// ---------------------------------------------------------------------------

/// Render the left control panel: site dropdown and payload range.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Controls");
    ui.separator();

    let (Some(dataset), Some(controls)) = (&state.dataset, &state.controls) else {
        ui.label("No dataset loaded.");
        return;
    };

    let options = site_options(dataset);
    let (min, max) = slider_domain(dataset);
    let current = controls.site.clone();
    let (mut lo, mut hi) = (controls.payload.lo, controls.payload.hi);

    // ---- Site selector ----
    ui.strong("Launch site");
    let mut picked: Option<SiteSelector> = None;
    egui::ComboBox::from_id_salt("site_dropdown")
        .selected_text(current.to_string())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for opt in &options {
                let is_current = current.value() == opt.value;
                if ui.selectable_label(is_current, opt.label.as_str()).clicked() && !is_current {
                    picked = Some(SiteSelector::parse(&opt.value));
                }
            }
        });
    ui.add_space(8.0);

    // ---- Payload range ----
    ui.strong("Payload range (Kg)");
    let lo_changed = ui
        .add(
            egui::Slider::new(&mut lo, min..=max)
                .step_by(SLIDER_STEP)
                .text("min"),
        )
        .changed();
    let hi_changed = ui
        .add(
            egui::Slider::new(&mut hi, min..=max)
                .step_by(SLIDER_STEP)
                .text("max"),
        )
        .changed();
    ui.horizontal(|ui: &mut Ui| {
        for (_, label) in SLIDER_MARKS {
            ui.small(label);
        }
    });

    if let Some(site) = picked {
        state.set_site(site);
    }
    if lo_changed || hi_changed {
        state.set_payload_range(lo, hi);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let (Some(ds), Some(view)) = (&state.dataset, &state.view) {
            ui.label(format!(
                "{} launches loaded, {} in payload range",
                ds.len(),
                view.scatter.point_count
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open launch records")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} launches from {} with sites {:?}",
                    dataset.len(),
                    path.display(),
                    dataset.sites()
                );
                state.set_dataset(Arc::new(dataset));
            }
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                state.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}
