// src/config/mod.rs

/// Production deployment of the analysis backend.
pub const DEFAULT_API_URL: &str = "https://project-blackflag.onrender.com";

pub const API_URL_ENV: &str = "REVIEW_RADAR_API_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_url: String,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(API_URL_ENV).ok())
    }

    fn from_value(value: Option<String>) -> Self {
        let raw = value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self {
            api_url: raw.trim_end_matches('/').to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_falls_back_to_default() {
        assert_eq!(Settings::from_value(None).api_url, DEFAULT_API_URL);
    }

    #[test]
    fn empty_value_falls_back_to_default() {
        assert_eq!(
            Settings::from_value(Some("   ".to_string())).api_url,
            DEFAULT_API_URL
        );
    }

    #[test]
    fn trailing_slash_is_normalized() {
        let settings = Settings::from_value(Some("http://127.0.0.1:5000/".to_string()));
        assert_eq!(settings.api_url, "http://127.0.0.1:5000");
    }
}
