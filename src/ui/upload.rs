// src/ui/upload.rs
use eframe::egui;
use rfd::FileDialog;

use crate::jobs::JobRunner;
use crate::state::AppState;
use crate::utils::format_kib;

pub fn show_upload_view(ui: &mut egui::Ui, state: &mut AppState, jobs: &JobRunner) {
    handle_dropped_files(ui, state);

    ui.add_space(8.0);
    ui.heading("📤 Upload Your Review Data");
    ui.label("Upload a CSV file containing your e-commerce reviews for sentiment analysis.");
    ui.add_space(12.0);

    show_drop_target(ui, state);

    ui.add_space(12.0);
    show_format_hints(ui);

    if let Some(error) = &state.upload.error {
        ui.add_space(8.0);
        ui.colored_label(egui::Color32::RED, format!("❌ {}", error));
    }

    ui.add_space(12.0);
    let can_analyze = state.upload.can_analyze();
    let label = if can_analyze {
        "⚡ Analyze Reviews"
    } else {
        "📤 Upload CSV to Begin"
    };
    let analyze = ui
        .add_enabled(
            can_analyze,
            egui::Button::new(label).min_size(egui::vec2(ui.available_width(), 36.0)),
        )
        .clicked();
    if analyze {
        if let Some(candidate) = state.upload.candidate.clone() {
            let epoch = state.begin_analysis();
            jobs.spawn_analyze(epoch, candidate.path, ui.ctx());
        }
    }
}

fn show_drop_target(ui: &mut egui::Ui, state: &mut AppState) {
    let hovering_files = ui.ctx().input(|i| !i.raw.hovered_files.is_empty());
    let stroke_color = if hovering_files {
        ui.visuals().selection.stroke.color
    } else {
        ui.visuals().widgets.inactive.bg_stroke.color
    };

    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(24.0))
        .stroke(egui::Stroke::new(1.5, stroke_color))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                match &state.upload.candidate {
                    Some(candidate) => {
                        ui.label(egui::RichText::new("✅").size(28.0));
                        ui.strong(&candidate.name);
                        ui.label(format!(
                            "{} | drop another file to replace it",
                            format_kib(candidate.size)
                        ));
                    }
                    None => {
                        ui.label(egui::RichText::new("📥").size(28.0));
                        ui.strong("Drop your CSV file here");
                        ui.label("or browse from your computer");
                    }
                }
                ui.add_space(8.0);
                if ui.button("Browse…").clicked() {
                    let file_dialog = FileDialog::new()
                        .add_filter("CSV files", &["csv"])
                        .set_title("Select Review CSV");
                    if let Some(path) = file_dialog.pick_file() {
                        state.upload.select_file(path);
                    }
                }
            });
        });
}

fn show_format_hints(ui: &mut egui::Ui) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.strong("💡 Expected CSV Format");
        ui.label("• Required: review text and rating (1-5 stars)");
        ui.label("• Optional: product name, price, summary");
        ui.label("• Column names are auto-detected by the backend");
    });
}

fn handle_dropped_files(ui: &egui::Ui, state: &mut AppState) {
    let dropped = ui.ctx().input(|i| i.raw.dropped_files.clone());
    // Like the drop zone it replaces, only the first dropped file counts.
    if let Some(path) = dropped.into_iter().next().and_then(|file| file.path) {
        state.upload.select_file(path);
    }
}
