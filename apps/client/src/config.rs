use anyhow::{Context, Result};

const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Client configuration loaded from environment variables.
/// Every value has a default; only malformed values are rejected.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub request_timeout_secs: u64,
    pub max_upload_mb: u64,
    /// When false, a score of exactly 0 is never written to its display slot.
    pub show_zero_scores: bool,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            api_url: normalize_base_url(
                &std::env::var("MATCH_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            ),
            request_timeout_secs: parse_env("REQUEST_TIMEOUT_SECS", 120)?,
            max_upload_mb: parse_env("MAX_UPLOAD_MB", 10)?,
            show_zero_scores: parse_env("SHOW_ZERO_SCORES", true)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Overrides the base URL, e.g. from a command-line flag.
    pub fn with_api_url(mut self, api_url: &str) -> Self {
        self.api_url = normalize_base_url(api_url);
        self
    }

    pub fn match_url(&self) -> String {
        format!("{}/api/match", self.api_url)
    }

    pub fn feedback_url(&self) -> String {
        format!("{}/api/feedback", self.api_url)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout_secs: 120,
            max_upload_mb: 10,
            show_zero_scores: true,
            rust_log: "info".to_string(),
        }
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        assert_eq!(normalize_base_url("http://host:9000/"), "http://host:9000");
        assert_eq!(normalize_base_url(" http://host "), "http://host");
    }

    #[test]
    fn test_endpoint_urls_share_base() {
        let config = Config {
            api_url: "https://match.example.com".to_string(),
            ..Config::default()
        };
        assert_eq!(config.match_url(), "https://match.example.com/api/match");
        assert_eq!(config.feedback_url(), "https://match.example.com/api/feedback");
    }

    #[test]
    fn test_api_url_override_is_normalized() {
        let config = Config::default().with_api_url("http://10.0.0.5:8000/");
        assert_eq!(config.match_url(), "http://10.0.0.5:8000/api/match");
    }

    #[test]
    fn test_parse_env_uses_default_when_unset() {
        let value: u64 = parse_env("MATCH_CLIENT_TEST_UNSET_VARIABLE", 42).unwrap();
        assert_eq!(value, 42);
    }
}
