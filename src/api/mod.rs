// src/api/mod.rs
use std::path::Path;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use reqwest::blocking::{multipart, Client, Response};
use reqwest::header::{HeaderMap, HeaderValue, CACHE_CONTROL, PRAGMA};
use serde::de::DeserializeOwned;

pub mod error;
pub mod types;

pub use error::ApiError;
use types::{AnalysisResponse, ComparisonResponse, LlmProvider, SummaryRequest, SummaryResponse};

/// Typed client for the review analysis backend. One HTTP round trip per
/// operation; no retries, no cancellation. Callers are expected to run
/// these blocking calls off the UI thread.
pub struct ApiClient {
    http: Client,
    base_url: String,
    cache_bust: AtomicI64,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        // The backend sits behind caching middleware that does not version
        // responses, so every request carries no-cache headers plus a
        // timestamp query parameter.
        let mut headers = HeaderMap::new();
        headers.insert(
            CACHE_CONTROL,
            HeaderValue::from_static("no-cache, no-store, must-revalidate"),
        );
        headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));

        let http = Client::builder().default_headers(headers).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
            cache_bust: AtomicI64::new(0),
        })
    }

    /// Uploads a CSV and runs the full analysis pipeline.
    pub fn analyze(&self, path: &Path) -> Result<AnalysisResponse, ApiError> {
        let bytes = std::fs::read(path).map_err(|source| ApiError::ReadFile {
            path: path.display().to_string(),
            source,
        })?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("reviews.csv")
            .to_string();
        let part = multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str("text/csv")?;
        let form = multipart::Form::new().part("file", part);

        let response = self.http.post(self.url("/analyze")).multipart(form).send()?;
        let response = Self::unwrap_error(response, "Analysis failed")?;
        Self::decode(response)
    }

    /// Asks the backend to formulate an executive summary over the most
    /// recent analysis. `model` overrides the provider's default model.
    pub fn generate_summary(
        &self,
        provider: LlmProvider,
        model: Option<String>,
    ) -> Result<SummaryResponse, ApiError> {
        let body = SummaryRequest {
            llm_provider: provider,
            model,
        };
        let response = self.http.post(self.url("/formulate")).json(&body).send()?;
        let response = Self::unwrap_error(response, "Summary generation failed")?;
        Self::decode(response)
    }

    /// Runs VADER vs logistic regression on the backend's held-out split.
    pub fn compare_models(&self) -> Result<ComparisonResponse, ApiError> {
        let response = self.http.get(self.url("/compare")).send()?;
        let response = Self::unwrap_error(response, "Model comparison failed")?;
        Self::decode(response)
    }

    /// Fetches a backend-produced artifact as raw bytes for local saving.
    pub fn download_output(&self, filename: &str) -> Result<Vec<u8>, ApiError> {
        let response = self
            .http
            .get(self.url(&format!("/outputs/{}", filename)))
            .send()?;
        if !response.status().is_success() {
            return Err(ApiError::Download {
                filename: filename.to_string(),
            });
        }
        Ok(response.bytes()?.to_vec())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}?_={}", self.base_url, path, self.next_cache_bust())
    }

    /// Strictly increasing timestamp for the `_=` query parameter, so two
    /// requests in the same millisecond still get distinct URLs.
    fn next_cache_bust(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let last = self
            .cache_bust
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            })
            .unwrap_or(now);
        now.max(last + 1)
    }

    fn unwrap_error(response: Response, fallback: &str) -> Result<Response, ApiError> {
        if response.status().is_success() {
            return Ok(response);
        }
        let body = response.text().unwrap_or_default();
        Err(ApiError::Backend(extract_backend_error(&body, fallback)))
    }

    fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let body = response.text()?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Pulls the `error` field out of a failure body, falling back to a
/// per-operation generic message when the body is not what we expect.
fn extract_backend_error(body: &str, fallback: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("error")
                .and_then(|e| e.as_str())
                .map(str::to_owned)
        })
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_backend_error_field() {
        assert_eq!(
            extract_backend_error(r#"{"error": "bad csv"}"#, "Analysis failed"),
            "bad csv"
        );
    }

    #[test]
    fn falls_back_when_error_field_missing() {
        assert_eq!(
            extract_backend_error(r#"{"detail": "nope"}"#, "Analysis failed"),
            "Analysis failed"
        );
        assert_eq!(
            extract_backend_error("<html>502</html>", "Model comparison failed"),
            "Model comparison failed"
        );
        assert_eq!(
            extract_backend_error("", "Summary generation failed"),
            "Summary generation failed"
        );
    }

    #[test]
    fn cache_bust_is_strictly_increasing() {
        let client = ApiClient::new("http://localhost:1").unwrap();
        let mut last = 0;
        for _ in 0..1000 {
            let next = client.next_cache_bust();
            assert!(next > last, "{} should exceed {}", next, last);
            last = next;
        }
    }

    #[test]
    fn urls_carry_the_cache_bust_parameter() {
        let client = ApiClient::new("http://localhost:1").unwrap();
        let url = client.url("/compare");
        assert!(url.starts_with("http://localhost:1/compare?_="));
        let url = client.url("/outputs/predictions.csv");
        assert!(url.starts_with("http://localhost:1/outputs/predictions.csv?_="));
    }
}
