// src/api/types.rs
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Result of one `/analyze` run. Field names track the backend's JSON
/// exactly, including its mixed casing conventions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub status: String,
    pub message: String,
    pub summary: AnalysisSummary,
    pub data: AnalysisData,
    /// Logical name -> server-side filename, retrievable via `/outputs/`.
    pub output_files: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub total_reviews: u64,
    pub sentiment_summary: SentimentCounts,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SentimentCounts {
    pub positive: u64,
    pub negative: u64,
    pub neutral: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisData {
    pub positive_keywords: Vec<Keyword>,
    pub negative_keywords: Vec<Keyword>,
    pub aspect_sentiment: Vec<AspectSentiment>,
    pub failure_components: Vec<FailureComponent>,
    pub top_products: Vec<TopProduct>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Keyword {
    pub word: String,
    pub score_adj_mean_over_df: f64,
}

/// Per-aspect counts. The backend capitalizes these keys and uses a
/// space in "Not Mentioned".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AspectSentiment {
    pub aspect: String,
    #[serde(rename = "Positive")]
    pub positive: u64,
    #[serde(rename = "Neutral")]
    pub neutral: u64,
    #[serde(rename = "Negative")]
    pub negative: u64,
    #[serde(rename = "Not Mentioned")]
    pub not_mentioned: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureComponent {
    pub product: String,
    pub components: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopProduct {
    #[serde(rename = "ProductName")]
    pub product_name: String,
    #[serde(rename = "ReviewCount")]
    pub review_count: u64,
    #[serde(rename = "Positive")]
    pub positive: u64,
    #[serde(rename = "Neutral")]
    pub neutral: u64,
    #[serde(rename = "Negative")]
    pub negative: u64,
    #[serde(rename = "TopPositiveKeywords", default)]
    pub top_positive_keywords: Option<String>,
    #[serde(rename = "TopNegativeKeywords", default)]
    pub top_negative_keywords: Option<String>,
}

/// LLM provider used for `/formulate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    #[default]
    Gemini,
    Openrouter,
}

impl LlmProvider {
    pub const ALL: [LlmProvider; 2] = [LlmProvider::Gemini, LlmProvider::Openrouter];

    pub fn label(&self) -> &'static str {
        match self {
            LlmProvider::Gemini => "Google Gemini",
            LlmProvider::Openrouter => "OpenRouter",
        }
    }
}

/// Request body for `/formulate`.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryRequest {
    pub llm_provider: LlmProvider,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub status: String,
    pub llm_provider: String,
    pub total_reviews: u64,
    pub sentiment_summary: SentimentTotals,
    /// Markdown narrative produced by the LLM.
    pub executive_summary: String,
}

/// Same counts as [`SentimentCounts`], but `/formulate` capitalizes the keys.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SentimentTotals {
    #[serde(rename = "Positive")]
    pub positive: u64,
    #[serde(rename = "Negative")]
    pub negative: u64,
    #[serde(rename = "Neutral")]
    pub neutral: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonResponse {
    pub status: String,
    pub metrics: ComparisonMetrics,
    pub report: String,
    pub cached: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonMetrics {
    pub vader: ModelScores,
    pub logistic_regression: ModelScores,
    pub comparison: AgreementStats,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ModelScores {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AgreementStats {
    pub agreement_percent: f64,
    pub test_size: u64,
}
