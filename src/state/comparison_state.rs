// src/state/comparison_state.rs
use chrono::{DateTime, Local};

use crate::api::types::ComparisonResponse;
use crate::api::ApiError;
use crate::state::RequestState;

/// Server-side filenames for the two comparison artifacts. Fixed by the
/// backend, not part of `output_files`.
pub const METRICS_FILENAME: &str = "model_comparison_metrics.json";
pub const REPORT_FILENAME: &str = "model_comparison_report.txt";

#[derive(Debug, Default)]
pub struct ComparisonState {
    pub request: RequestState<ComparisonResponse>,
    /// When the current result was fetched, shown next to the Run button.
    pub last_fetched: Option<DateTime<Local>>,
}

impl ComparisonState {
    pub fn begin(&mut self) {
        self.request = RequestState::Loading;
    }

    pub fn finish(&mut self, result: Result<ComparisonResponse, ApiError>) {
        match result {
            Ok(response) => {
                self.request = RequestState::Ready(response);
                self.last_fetched = Some(Local::now());
            }
            Err(err) => self.request = RequestState::Failed(err.to_string()),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{AgreementStats, ComparisonMetrics, ModelScores};

    fn sample_response() -> ComparisonResponse {
        let scores = ModelScores {
            accuracy: 0.7,
            precision: 0.7,
            recall: 0.7,
            f1: 0.7,
        };
        ComparisonResponse {
            status: "ok".to_string(),
            metrics: ComparisonMetrics {
                vader: scores,
                logistic_regression: scores,
                comparison: AgreementStats {
                    agreement_percent: 80.0,
                    test_size: 50,
                },
            },
            report: "report".to_string(),
            cached: false,
        }
    }

    #[test]
    fn success_records_fetch_time() {
        let mut state = ComparisonState::default();
        state.begin();
        assert!(state.last_fetched.is_none());

        state.finish(Ok(sample_response()));
        assert!(matches!(state.request, RequestState::Ready(_)));
        assert!(state.last_fetched.is_some());
    }

    #[test]
    fn failure_keeps_previous_fetch_time() {
        let mut state = ComparisonState::default();
        state.finish(Ok(sample_response()));
        let fetched = state.last_fetched;

        state.begin();
        state.finish(Err(ApiError::Backend("upload data first".to_string())));
        assert!(matches!(&state.request, RequestState::Failed(msg) if msg == "upload data first"));
        assert_eq!(state.last_fetched, fetched);
    }

    #[test]
    fn reset_clears_result_and_fetch_time() {
        let mut state = ComparisonState::default();
        state.finish(Ok(sample_response()));
        state.reset();
        assert!(matches!(state.request, RequestState::Idle));
        assert!(state.last_fetched.is_none());
    }
}
