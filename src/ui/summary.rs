// src/ui/summary.rs
use eframe::egui;

use crate::api::types::LlmProvider;
use crate::jobs::JobRunner;
use crate::state::{AppState, RequestState};
use crate::ui::{error_panel, loading_panel, placeholder_panel};

/// Fixed local filename for the saved markdown.
const SUMMARY_FILENAME: &str = "executive-summary.md";

pub fn show_summary_view(ui: &mut egui::Ui, state: &mut AppState, jobs: &JobRunner) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.strong("🤖 AI-Powered Executive Summary");
        ui.label(
            "Distill key insights, strengths, weaknesses, and recommendations \
             from your analysis using a language model.",
        );
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            for provider in LlmProvider::ALL {
                if ui
                    .selectable_label(state.summary.provider == provider, provider.label())
                    .clicked()
                {
                    state.summary.provider = provider;
                }
            }
            ui.separator();
            let generating = state.summary.request.is_loading();
            let label = if generating {
                "⏳ Generating…"
            } else {
                "✨ Generate Summary"
            };
            if ui
                .add_enabled(!generating, egui::Button::new(label))
                .clicked()
            {
                state.summary.begin();
                jobs.spawn_summary(state.epoch, state.summary.provider, ui.ctx());
            }
        });
    });

    ui.add_space(12.0);

    // Clone to release the borrow on state before the download button
    // below mutates it.
    let request = state.summary.request.clone();
    match request {
        RequestState::Idle => placeholder_panel(
            ui,
            "🤖",
            "No Summary Generated Yet",
            "Generate a summary to see an AI-written narrative of your analysis results.",
        ),
        RequestState::Loading => {
            loading_panel(ui, "AI is analyzing your data and crafting insights…");
        }
        RequestState::Ready(markdown) => show_summary_text(ui, state, &markdown),
        RequestState::Failed(message) => error_panel(
            ui,
            &message,
            "Make sure you've run the analysis first and that your API keys are configured.",
        ),
    }
}

fn show_summary_text(ui: &mut egui::Ui, state: &mut AppState, markdown: &str) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        egui::ScrollArea::vertical()
            .id_source("summary_scroll")
            .max_height(420.0)
            .show(ui, |ui| {
                ui.label(markdown);
            });
        ui.separator();
        if ui.button("📄 Download Summary").clicked() {
            if let Err(err) = crate::file::save_text_as(SUMMARY_FILENAME, markdown) {
                state.error_message = Some(err.to_string());
            }
        }
    });
}
