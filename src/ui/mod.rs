// src/ui/mod.rs
use eframe::egui;

use crate::jobs::JobRunner;
use crate::state::AppState;

pub mod comparison;
pub mod results;
pub mod summary;
pub mod upload;

/// Empty-state panel shown by a tab that has not fetched anything yet.
pub(crate) fn placeholder_panel(ui: &mut egui::Ui, icon: &str, title: &str, body: &str) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.add_space(32.0);
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new(icon).size(40.0));
            ui.strong(title);
            ui.label(body);
        });
        ui.add_space(32.0);
    });
}

pub(crate) fn loading_panel(ui: &mut egui::Ui, message: &str) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.add_space(32.0);
        ui.vertical_centered(|ui| {
            ui.spinner();
            ui.add_space(8.0);
            ui.label(message);
        });
        ui.add_space(32.0);
    });
}

pub(crate) fn error_panel(ui: &mut egui::Ui, message: &str, hint: &str) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.colored_label(egui::Color32::RED, "❌ Error");
        ui.label(message);
        ui.small(hint);
    });
}

/// One `/outputs/` download button. Disabled while any download is in
/// flight, so at most one output fetch runs at a time.
pub(crate) fn download_button(
    ui: &mut egui::Ui,
    state: &mut AppState,
    jobs: &JobRunner,
    filename: &str,
    label: &str,
) {
    let busy = state.downloading.as_deref() == Some(filename);
    let text = if busy {
        format!("⏳ {}", label)
    } else {
        format!("⬇ {}", label)
    };
    if ui
        .add_enabled(state.downloading.is_none(), egui::Button::new(text))
        .clicked()
    {
        state.downloading = Some(filename.to_string());
        jobs.spawn_download(state.epoch, filename.to_string(), ui.ctx());
    }
}
