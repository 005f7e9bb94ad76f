// src/state/summary_state.rs
use crate::api::types::{LlmProvider, SummaryResponse};
use crate::api::ApiError;
use crate::state::RequestState;

/// State behind the AI Summary tab. Holds only the markdown text of the
/// last successful generation; everything else on that tab derives from it.
#[derive(Debug, Default)]
pub struct SummaryState {
    pub provider: LlmProvider,
    pub request: RequestState<String>,
}

impl SummaryState {
    pub fn begin(&mut self) {
        // Drop any previous summary before fetching, so a failure never
        // shows stale text next to a fresh error.
        self.request = RequestState::Loading;
    }

    pub fn finish(&mut self, result: Result<SummaryResponse, ApiError>) {
        self.request = match result {
            Ok(response) => RequestState::Ready(response.executive_summary),
            Err(err) => RequestState::Failed(err.to_string()),
        };
    }

    /// Back to the untouched-tab state; invoked by the shell on every new
    /// analysis cycle.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_stores_the_markdown() {
        let mut state = SummaryState::default();
        state.begin();
        assert!(state.request.is_loading());

        state.finish(Ok(SummaryResponse {
            status: "ok".to_string(),
            llm_provider: "gemini".to_string(),
            total_reviews: 10,
            sentiment_summary: crate::api::types::SentimentTotals {
                positive: 6,
                negative: 1,
                neutral: 3,
            },
            executive_summary: "# Summary".to_string(),
        }));
        assert!(matches!(&state.request, RequestState::Ready(md) if md == "# Summary"));
    }

    #[test]
    fn failure_stores_the_message() {
        let mut state = SummaryState::default();
        state.begin();
        state.finish(Err(ApiError::Backend("no analysis yet".to_string())));
        assert!(matches!(&state.request, RequestState::Failed(msg) if msg == "no analysis yet"));
    }

    #[test]
    fn reset_returns_to_idle_and_default_provider() {
        let mut state = SummaryState {
            provider: LlmProvider::Openrouter,
            request: RequestState::Ready("old".to_string()),
        };
        state.reset();
        assert_eq!(state.provider, LlmProvider::Gemini);
        assert!(matches!(state.request, RequestState::Idle));
    }
}
