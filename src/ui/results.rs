// src/ui/results.rs
use eframe::egui;

use crate::api::types::{AnalysisResponse, Keyword};
use crate::jobs::JobRunner;
use crate::state::AppState;
use crate::ui::download_button;
use crate::utils::{format_percent, sentiment_percentages, visible_keywords};

const POSITIVE_COLOR: egui::Color32 = egui::Color32::from_rgb(34, 170, 96);
const NEUTRAL_COLOR: egui::Color32 = egui::Color32::from_rgb(230, 160, 30);
const NEGATIVE_COLOR: egui::Color32 = egui::Color32::from_rgb(220, 70, 80);

/// Pure display over an already-fetched analysis payload; issues no
/// requests of its own except the per-file downloads.
pub fn show_results_view(
    ui: &mut egui::Ui,
    payload: &AnalysisResponse,
    state: &mut AppState,
    jobs: &JobRunner,
) {
    egui::ScrollArea::vertical()
        .id_source("results_scroll")
        .show(ui, |ui| {
            show_summary_cards(ui, payload);
            ui.add_space(12.0);
            show_sentiment_bar(ui, payload);
            ui.add_space(12.0);
            show_keywords(ui, payload);
            show_aspect_table(ui, payload);
            show_failure_components(ui, payload);
            show_top_products(ui, payload);
            show_downloads(ui, payload, state, jobs);
        });
}

fn show_summary_cards(ui: &mut egui::Ui, payload: &AnalysisResponse) {
    let counts = payload.summary.sentiment_summary;
    ui.columns(4, |columns| {
        summary_card(
            &mut columns[0],
            "📊",
            payload.summary.total_reviews,
            "Total Reviews",
        );
        summary_card(&mut columns[1], "😊", counts.positive, "Positive");
        summary_card(&mut columns[2], "😐", counts.neutral, "Neutral");
        summary_card(&mut columns[3], "😞", counts.negative, "Negative");
    });
}

fn summary_card(ui: &mut egui::Ui, icon: &str, value: u64, label: &str) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new(icon).size(22.0));
            ui.label(egui::RichText::new(value.to_string()).size(26.0).strong());
            ui.label(label);
        });
    });
}

fn show_sentiment_bar(ui: &mut egui::Ui, payload: &AnalysisResponse) {
    ui.strong("Sentiment Distribution");
    ui.add_space(4.0);

    let counts = &payload.summary.sentiment_summary;
    let segments = sentiment_percentages(counts, payload.summary.total_reviews);
    let colors = [POSITIVE_COLOR, NEUTRAL_COLOR, NEGATIVE_COLOR];

    let (rect, _) =
        ui.allocate_exact_size(egui::vec2(ui.available_width(), 28.0), egui::Sense::hover());
    let painter = ui.painter();
    painter.rect_filled(rect, 4.0, ui.visuals().extreme_bg_color);

    let mut left = rect.left();
    for (percent, color) in segments.iter().zip(colors) {
        let width = rect.width() * (*percent as f32) / 100.0;
        if width <= 0.0 {
            continue;
        }
        let segment = egui::Rect::from_min_size(
            egui::pos2(left, rect.top()),
            egui::vec2(width, rect.height()),
        );
        painter.rect_filled(segment, 0.0, color);
        // Labels only fit on wide-enough segments.
        if width > 44.0 {
            painter.text(
                segment.center(),
                egui::Align2::CENTER_CENTER,
                format_percent(*percent),
                egui::FontId::proportional(12.0),
                egui::Color32::WHITE,
            );
        }
        left += width;
    }
}

fn show_keywords(ui: &mut egui::Ui, payload: &AnalysisResponse) {
    ui.columns(2, |columns| {
        keyword_list(
            &mut columns[0],
            "✓ Top Positive Keywords",
            &payload.data.positive_keywords,
        );
        keyword_list(
            &mut columns[1],
            "✗ Top Negative Keywords",
            &payload.data.negative_keywords,
        );
    });
}

fn keyword_list(ui: &mut egui::Ui, title: &str, keywords: &[Keyword]) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.strong(title);
        ui.add_space(4.0);
        if keywords.is_empty() {
            ui.label("No keywords found");
            return;
        }
        for keyword in visible_keywords(keywords) {
            ui.horizontal(|ui| {
                ui.label(&keyword.word);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.monospace(format!("{:.3}", keyword.score_adj_mean_over_df));
                });
            });
        }
    });
}

fn show_aspect_table(ui: &mut egui::Ui, payload: &AnalysisResponse) {
    let aspects = &payload.data.aspect_sentiment;
    if aspects.is_empty() {
        return;
    }
    ui.add_space(12.0);
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.strong("Aspect Sentiment Breakdown");
        ui.add_space(4.0);
        egui::Grid::new("aspect_sentiment_grid")
            .num_columns(5)
            .spacing([24.0, 4.0])
            .striped(true)
            .show(ui, |ui| {
                ui.strong("Aspect");
                ui.strong("Positive");
                ui.strong("Neutral");
                ui.strong("Negative");
                ui.strong("Not Mentioned");
                ui.end_row();
                for aspect in aspects {
                    ui.label(&aspect.aspect);
                    ui.colored_label(POSITIVE_COLOR, aspect.positive.to_string());
                    ui.colored_label(NEUTRAL_COLOR, aspect.neutral.to_string());
                    ui.colored_label(NEGATIVE_COLOR, aspect.negative.to_string());
                    ui.label(aspect.not_mentioned.to_string());
                    ui.end_row();
                }
            });
    });
}

fn show_failure_components(ui: &mut egui::Ui, payload: &AnalysisResponse) {
    let failures = &payload.data.failure_components;
    if failures.is_empty() {
        return;
    }
    ui.add_space(12.0);
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.strong("⚠ Component Failures Detected");
        ui.add_space(4.0);
        for failure in failures {
            ui.group(|ui| {
                ui.set_width(ui.available_width());
                ui.strong(&failure.product);
                ui.colored_label(NEGATIVE_COLOR, &failure.components);
            });
        }
    });
}

fn show_top_products(ui: &mut egui::Ui, payload: &AnalysisResponse) {
    let products = &payload.data.top_products;
    if products.is_empty() {
        return;
    }
    ui.add_space(12.0);
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.strong("Top Reviewed Products");
        ui.add_space(4.0);
        for product in products {
            ui.group(|ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.strong(&product.product_name);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(format!("{} reviews", product.review_count));
                    });
                });
                ui.horizontal(|ui| {
                    ui.colored_label(POSITIVE_COLOR, format!("✓ {} positive", product.positive));
                    ui.colored_label(NEUTRAL_COLOR, format!("− {} neutral", product.neutral));
                    ui.colored_label(NEGATIVE_COLOR, format!("✗ {} negative", product.negative));
                });
                if let Some(keywords) = &product.top_positive_keywords {
                    ui.label(format!("Positive: {}", keywords));
                }
                if let Some(keywords) = &product.top_negative_keywords {
                    ui.label(format!("Negative: {}", keywords));
                }
            });
            ui.add_space(4.0);
        }
    });
}

fn show_downloads(
    ui: &mut egui::Ui,
    payload: &AnalysisResponse,
    state: &mut AppState,
    jobs: &JobRunner,
) {
    if payload.output_files.is_empty() {
        return;
    }
    ui.add_space(12.0);
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.strong("📥 Download Results");
        ui.add_space(4.0);
        for filename in payload.output_files.values() {
            download_button(ui, state, jobs, filename, filename);
        }
    });
}
