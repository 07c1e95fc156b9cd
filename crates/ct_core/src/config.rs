//! Process-wide settings, built once at startup and shared read-only.
//!
//! Both API keys are required: [`Settings::new`] refuses to build without them,
//! so a misconfigured process fails before it can issue a single request.

use std::fmt;
use std::time::Duration;
use url::Url;
use crate::{Error, Result};

pub const NEWS_API_KEY_VAR: &str = "NEWS_API_KEY";
pub const MODEL_API_KEY_VAR: &str = "GEMINI_API_KEY";

pub const DEFAULT_NEWS_BASE_URL: &str = "https://newsapi.org/v2";
pub const DEFAULT_MODEL_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai/";
pub const DEFAULT_MODEL_NAME: &str = "gemini-1.5-flash";
pub const DEFAULT_PROVIDER: &str = "openai";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Clone)]
pub struct NewsSettings {
    pub base_url: String,
    pub api_key: String,
}

impl fmt::Debug for NewsSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsSettings")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[derive(Clone)]
pub struct ModelSettings {
    pub provider: String,
    pub base_url: String,
    pub model_name: String,
    pub api_key: String,
}

impl fmt::Debug for ModelSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelSettings")
            .field("provider", &self.provider)
            .field("base_url", &self.base_url)
            .field("model_name", &self.model_name)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub news: NewsSettings,
    pub model: ModelSettings,
    /// Upper bound for each external call.
    pub request_timeout: Duration,
}

impl Settings {
    pub fn new(news_api_key: Option<String>, model_api_key: Option<String>) -> Result<Self> {
        let news_api_key = require_secret(NEWS_API_KEY_VAR, news_api_key)?;
        let model_api_key = require_secret(MODEL_API_KEY_VAR, model_api_key)?;

        Ok(Self {
            news: NewsSettings {
                base_url: DEFAULT_NEWS_BASE_URL.to_string(),
                api_key: news_api_key,
            },
            model: ModelSettings {
                provider: DEFAULT_PROVIDER.to_string(),
                base_url: DEFAULT_MODEL_BASE_URL.to_string(),
                model_name: DEFAULT_MODEL_NAME.to_string(),
                api_key: model_api_key,
            },
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        })
    }

    pub fn with_news_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.news.base_url = base_url.into();
        self
    }

    pub fn with_model_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.model.base_url = base_url.into();
        self
    }

    pub fn with_model_name(mut self, model_name: impl Into<String>) -> Self {
        self.model.model_name = model_name.into();
        self
    }

    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.model.provider = provider.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Checks everything that can be checked without touching the network.
    pub fn validate(&self) -> Result<()> {
        parse_base_url("news", &self.news.base_url)?;
        parse_base_url("model", &self.model.base_url)?;
        if self.model.model_name.trim().is_empty() {
            return Err(Error::Config("Model name must not be empty".to_string()));
        }
        if self.request_timeout.is_zero() {
            return Err(Error::Config("Request timeout must be greater than zero".to_string()));
        }
        Ok(())
    }
}

fn require_secret(var: &str, value: Option<String>) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(Error::Config(format!(
            "{} is not set. Provide it as a flag, an environment variable, or in a .env file.",
            var
        ))),
    }
}

fn parse_base_url(what: &str, raw: &str) -> Result<Url> {
    let url = Url::parse(raw)
        .map_err(|e| Error::Config(format!("Invalid {} base URL '{}': {}", what, raw, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(Error::Config(format!(
            "Unsupported scheme '{}' in {} base URL",
            scheme, what
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_are_fatal() {
        let err = Settings::new(None, Some("model-key".to_string())).unwrap_err();
        assert!(matches!(err, Error::Config(ref msg) if msg.contains(NEWS_API_KEY_VAR)));

        let err = Settings::new(Some("news-key".to_string()), Some("  ".to_string())).unwrap_err();
        assert!(matches!(err, Error::Config(ref msg) if msg.contains(MODEL_API_KEY_VAR)));
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::new(Some("n".to_string()), Some("m".to_string())).unwrap();
        assert_eq!(settings.news.base_url, DEFAULT_NEWS_BASE_URL);
        assert_eq!(settings.model.model_name, DEFAULT_MODEL_NAME);
        assert_eq!(settings.model.provider, DEFAULT_PROVIDER);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_urls() {
        let settings = Settings::new(Some("n".to_string()), Some("m".to_string()))
            .unwrap()
            .with_news_base_url("not a url");
        assert!(matches!(settings.validate(), Err(Error::Config(_))));

        let settings = Settings::new(Some("n".to_string()), Some("m".to_string()))
            .unwrap()
            .with_model_base_url("ftp://example.com");
        assert!(matches!(settings.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_debug_redacts_keys() {
        let settings = Settings::new(Some("secret-news".to_string()), Some("secret-model".to_string())).unwrap();
        let rendered = format!("{:?}", settings);
        assert!(!rendered.contains("secret-news"));
        assert!(!rendered.contains("secret-model"));
        assert!(rendered.contains("<redacted>"));
    }
}
