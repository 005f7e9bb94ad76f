// src/app.rs
use eframe::egui;
use tracing::info;

use crate::api::ApiClient;
use crate::config::Settings;
use crate::jobs::JobRunner;
use crate::state::{AnalysisPhase, AppState, Screen};

pub struct RadarApp {
    state: AppState,
    jobs: JobRunner,
}

impl RadarApp {
    pub fn new(settings: Settings) -> anyhow::Result<Self> {
        let client = ApiClient::new(settings.api_url)?;
        Ok(Self {
            state: AppState::new(),
            jobs: JobRunner::new(client),
        })
    }

    fn show_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("⚡ Review Radar");
            ui.label("Transform reviews into actionable insights");
        });

        // The tab bar only exists once a payload does; switching tabs never
        // refetches anything.
        if self.state.is_ready() {
            ui.separator();
            ui.horizontal(|ui| {
                let tabs = [
                    (Screen::Results, "📊 Analysis Results"),
                    (Screen::Summary, "🤖 AI Summary"),
                    (Screen::Comparison, "⚖ Model Comparison"),
                ];
                for (screen, label) in tabs {
                    if ui
                        .selectable_label(self.state.current_screen == screen, label)
                        .clicked()
                    {
                        self.state.select_screen(screen);
                    }
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("↻ New Analysis").clicked() {
                        self.state.reset();
                    }
                });
            });
        }
    }

    fn show_loading(&self, ui: &mut egui::Ui) {
        ui.add_space(64.0);
        ui.vertical_centered(|ui| {
            ui.spinner();
            ui.add_space(12.0);
            ui.heading("Analyzing Your Reviews");
            ui.label("The backend is processing your data. Large files can take up to two minutes.");
        });
    }

    fn drain_jobs(&mut self) {
        while let Some(msg) = self.jobs.poll() {
            self.state.apply_job(msg);
        }
    }

    /// Runs the save dialog for a finished download. Modal dialogs must
    /// stay on the UI thread, so the worker only parks the bytes.
    fn handle_pending_save(&mut self) {
        if let Some(save) = self.state.pending_save.take() {
            match crate::file::save_bytes_as(&save.filename, &save.bytes) {
                Ok(Some(path)) => info!(path = %path.display(), "output file saved"),
                Ok(None) => {} // dialog cancelled
                Err(err) => self.state.error_message = Some(err.to_string()),
            }
        }
    }
}

impl eframe::App for RadarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_jobs();
        self.handle_pending_save();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.show_header(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| match &self.state.phase {
            AnalysisPhase::Idle => {
                crate::ui::upload::show_upload_view(ui, &mut self.state, &self.jobs);
            }
            AnalysisPhase::Loading => self.show_loading(ui),
            AnalysisPhase::Ready(payload) => {
                let payload = payload.clone();
                match self.state.current_screen {
                    Screen::Results => crate::ui::results::show_results_view(
                        ui,
                        &payload,
                        &mut self.state,
                        &self.jobs,
                    ),
                    Screen::Summary => {
                        crate::ui::summary::show_summary_view(ui, &mut self.state, &self.jobs)
                    }
                    Screen::Comparison => {
                        crate::ui::comparison::show_comparison_view(ui, &mut self.state, &self.jobs)
                    }
                }
            }
        });

        // Show error modal if needed
        let error_msg = self.state.error_message.clone();
        if let Some(error) = error_msg {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(&error);
                    if ui.button("OK").clicked() {
                        self.state.error_message = None;
                    }
                });
        }
    }
}
