// src/ui/comparison.rs
use eframe::egui;

use crate::api::types::{ComparisonResponse, ModelScores};
use crate::jobs::JobRunner;
use crate::state::comparison_state::{METRICS_FILENAME, REPORT_FILENAME};
use crate::state::{AppState, RequestState};
use crate::ui::{download_button, error_panel, loading_panel, placeholder_panel};
use crate::utils::{recommended_model, Recommendation};

pub fn show_comparison_view(ui: &mut egui::Ui, state: &mut AppState, jobs: &JobRunner) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.strong("⚖ Model Performance Comparison");
        ui.label(
            "Compare VADER (rule-based) against TF-IDF + Logistic Regression \
             (ML-based) sentiment analysis on your dataset.",
        );
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            let running = state.comparison.request.is_loading();
            let label = if running {
                "⏳ Running Comparison…"
            } else {
                "▶ Run Comparison"
            };
            if ui.add_enabled(!running, egui::Button::new(label)).clicked() {
                state.comparison.begin();
                jobs.spawn_comparison(state.epoch, ui.ctx());
            }
            if let Some(fetched) = state.comparison.last_fetched {
                ui.label(format!("Last updated: {}", fetched.format("%H:%M:%S")));
            }
        });
    });

    ui.add_space(12.0);

    let request = state.comparison.request.clone();
    match request {
        RequestState::Idle => placeholder_panel(
            ui,
            "⚖",
            "No Comparison Run Yet",
            "Run the comparison to evaluate both sentiment models on your dataset.",
        ),
        RequestState::Loading => loading_panel(ui, "Evaluating both models on your dataset…"),
        RequestState::Ready(result) => show_comparison_result(ui, &result, state, jobs),
        RequestState::Failed(message) => error_panel(
            ui,
            &message,
            "Make sure you've uploaded and analyzed data before running model comparison.",
        ),
    }
}

fn show_comparison_result(
    ui: &mut egui::Ui,
    result: &ComparisonResponse,
    state: &mut AppState,
    jobs: &JobRunner,
) {
    egui::ScrollArea::vertical()
        .id_source("comparison_scroll")
        .show(ui, |ui| {
            ui.columns(2, |columns| {
                model_card(
                    &mut columns[0],
                    "📚 VADER (Rule-Based)",
                    &result.metrics.vader,
                );
                model_card(
                    &mut columns[1],
                    "🤖 TF-IDF + Logistic Regression",
                    &result.metrics.logistic_regression,
                );
            });

            ui.add_space(12.0);
            ui.group(|ui| {
                ui.set_width(ui.available_width());
                ui.strong("Model Agreement");
                ui.add_space(4.0);
                ui.columns(2, |columns| {
                    stat(
                        &mut columns[0],
                        format!("{:.2}%", result.metrics.comparison.agreement_percent),
                        "Models Agree",
                    );
                    stat(
                        &mut columns[1],
                        result.metrics.comparison.test_size.to_string(),
                        "Test Samples",
                    );
                });
            });

            ui.add_space(12.0);
            ui.group(|ui| {
                ui.set_width(ui.available_width());
                ui.strong("🏆 Recommended Model");
                let verdict = match recommended_model(&result.metrics) {
                    Recommendation::LogisticRegression => {
                        "✅ TF-IDF + Logistic Regression performs better on your dataset"
                    }
                    Recommendation::Vader => "✅ VADER performs better on your dataset",
                    Recommendation::Equal => "⚖ Both models perform equally on your dataset",
                };
                ui.label(verdict);
            });

            ui.add_space(12.0);
            ui.group(|ui| {
                ui.set_width(ui.available_width());
                ui.strong("📋 Detailed Analysis Report");
                ui.add_space(4.0);
                egui::ScrollArea::vertical()
                    .id_source("comparison_report_scroll")
                    .max_height(260.0)
                    .show(ui, |ui| {
                        ui.monospace(&result.report);
                    });
            });

            ui.add_space(12.0);
            ui.horizontal(|ui| {
                download_button(ui, state, jobs, METRICS_FILENAME, "Download Metrics (JSON)");
                download_button(ui, state, jobs, REPORT_FILENAME, "Download Report (TXT)");
            });
        });
}

fn model_card(ui: &mut egui::Ui, title: &str, scores: &ModelScores) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.strong(title);
        ui.add_space(4.0);
        egui::Grid::new(title)
            .num_columns(2)
            .spacing([24.0, 4.0])
            .show(ui, |ui| {
                metric_row(ui, "Accuracy", scores.accuracy);
                metric_row(ui, "Precision", scores.precision);
                metric_row(ui, "Recall", scores.recall);
                metric_row(ui, "F1 Score", scores.f1);
            });
    });
}

fn metric_row(ui: &mut egui::Ui, name: &str, value: f64) {
    ui.label(name);
    ui.strong(format!("{:.2}%", value * 100.0));
    ui.end_row();
}

fn stat(ui: &mut egui::Ui, value: String, label: &str) {
    ui.vertical(|ui| {
        ui.label(egui::RichText::new(value).size(24.0).strong());
        ui.label(label);
    });
}
