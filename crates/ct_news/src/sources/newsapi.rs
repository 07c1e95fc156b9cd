use std::fmt;
use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use ct_core::config::NewsSettings;
use ct_core::logging::Logger;
use ct_core::{Article, Error, NewsSource, Result, Topic, MAX_DIGEST_ARTICLES};
use super::utils;

#[derive(Deserialize)]
struct SearchResponse {
    articles: Option<Vec<RawArticle>>,
}

#[derive(Deserialize)]
struct RawArticle {
    title: Option<String>,
    source: Option<RawSource>,
    url: Option<String>,
    #[serde(rename = "publishedAt")]
    published_at: Option<String>,
}

#[derive(Deserialize)]
struct RawSource {
    name: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    code: Option<String>,
    message: Option<String>,
}

impl From<RawArticle> for Article {
    fn from(raw: RawArticle) -> Self {
        Article::new(
            raw.title.unwrap_or_default(),
            raw.source.and_then(|s| s.name).unwrap_or_default(),
            raw.url.unwrap_or_default(),
            raw.published_at.as_deref().unwrap_or_default(),
        )
    }
}

/// Client for NewsAPI's `/everything` search.
pub struct NewsApiSource {
    client: Client,
    base_url: String,
    api_key: String,
    logger: Logger,
}

impl fmt::Debug for NewsApiSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsApiSource")
            .field("client", &"<reqwest::Client>")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl NewsApiSource {
    pub fn new(settings: &NewsSettings, timeout: Duration) -> Result<Self> {
        if settings.api_key.trim().is_empty() {
            return Err(Error::Config("News API key is required".to_string()));
        }
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: settings.base_url.clone(),
            api_key: settings.api_key.clone(),
            logger: Logger::new().with_prefix("📡").with_prefix("newsapi"),
        })
    }

    fn retrieval_error(&self, context: &str, err: impl fmt::Display) -> Error {
        Error::Retrieval(utils::redact(&format!("{}: {}", context, err), &self.api_key))
    }
}

#[async_trait]
impl NewsSource for NewsApiSource {
    fn name(&self) -> &str {
        "NewsAPI"
    }

    async fn search(&self, topic: &Topic) -> Result<Vec<Article>> {
        let url = utils::endpoint(&self.base_url, "everything");
        let page_size = MAX_DIGEST_ARTICLES.to_string();
        self.logger.debug(&format!("Searching for '{}'", topic));

        let response = self.client
            .get(&url)
            .query(&[
                ("q", topic.as_str()),
                ("language", "en"),
                ("sortBy", "publishedAt"),
                ("pageSize", page_size.as_str()),
                ("apiKey", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| self.retrieval_error("News endpoint unreachable", e.without_url()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.retrieval_error("Failed to read news response", e.without_url()))?;

        if !status.is_success() {
            let detail = serde_json::from_str::<ApiErrorBody>(&body)
                .ok()
                .and_then(|b| match (b.code, b.message) {
                    (Some(code), Some(message)) => Some(format!("{} ({})", message, code)),
                    (None, Some(message)) => Some(message),
                    (Some(code), None) => Some(code),
                    (None, None) => None,
                })
                .unwrap_or_else(|| "no details".to_string());
            self.logger.warn(&format!("News endpoint returned {}", status));
            return Err(self.retrieval_error(&format!("News endpoint returned {}", status), detail));
        }

        let parsed: SearchResponse = serde_json::from_str(&body)
            .map_err(|e| self.retrieval_error("Malformed news response", e))?;
        let articles: Vec<Article> = parsed
            .articles
            .unwrap_or_default()
            .into_iter()
            .map(Article::from)
            .collect();

        self.logger.info(&format!("Found {} articles for '{}'", articles.len(), topic));
        Ok(articles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn source(base_url: &str) -> NewsApiSource {
        let settings = NewsSettings {
            base_url: base_url.to_string(),
            api_key: "test-news-key".to_string(),
        };
        NewsApiSource::new(&settings, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_source_requires_api_key() {
        let settings = NewsSettings {
            base_url: "https://newsapi.org/v2".to_string(),
            api_key: String::new(),
        };
        let result = NewsApiSource::new(&settings, Duration::from_secs(5));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[tokio::test]
    async fn test_search_sends_expected_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/everything"))
            .and(query_param("q", "Iran Israel"))
            .and(query_param("language", "en"))
            .and(query_param("sortBy", "publishedAt"))
            .and(query_param("pageSize", "5"))
            .and(query_param("apiKey", "test-news-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "ok",
                "articles": [{
                    "title": "Talks resume",
                    "source": { "id": null, "name": "AP" },
                    "url": "https://example.com/talks",
                    "publishedAt": "2024-06-02T11:22:33Z"
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let topic = Topic::new("Iran Israel").unwrap();
        let articles = source(&server.uri()).search(&topic).await.unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "Talks resume");
        assert_eq!(articles[0].source, "AP");
        assert_eq!(articles[0].published, "2024-06-02");
    }

    #[tokio::test]
    async fn test_null_fields_become_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/everything"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "articles": [{ "title": null, "source": { "name": null }, "url": "https://example.com/x", "publishedAt": null }]
            })))
            .mount(&server)
            .await;

        let articles = source(&server.uri()).search(&Topic::new("x").unwrap()).await.unwrap();
        assert_eq!(articles[0].title, "");
        assert_eq!(articles[0].source, "");
        assert_eq!(articles[0].published, "");
    }

    #[tokio::test]
    async fn test_missing_articles_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "ok", "totalResults": 0 })))
            .mount(&server)
            .await;

        let articles = source(&server.uri()).search(&Topic::new("Atlantis").unwrap()).await.unwrap();
        assert!(articles.is_empty());
    }

    #[tokio::test]
    async fn test_error_status_is_retrieval_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "status": "error",
                "code": "apiKeyInvalid",
                "message": "Your API key is invalid."
            })))
            .mount(&server)
            .await;

        let err = source(&server.uri()).search(&Topic::new("Sudan").unwrap()).await.unwrap_err();
        match err {
            Error::Retrieval(msg) => {
                assert!(msg.contains("401"));
                assert!(msg.contains("Your API key is invalid. (apiKeyInvalid)"));
                assert!(!msg.contains("test-news-key"));
            }
            other => panic!("expected retrieval error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_retrieval_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = source(&server.uri()).search(&Topic::new("Sudan").unwrap()).await.unwrap_err();
        assert!(matches!(err, Error::Retrieval(ref msg) if msg.starts_with("Malformed news response")));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_hides_encoded_key() {
        let settings = NewsSettings {
            base_url: "http://127.0.0.1:9".to_string(),
            api_key: "ab+cd/ef==".to_string(),
        };
        let source = NewsApiSource::new(&settings, Duration::from_secs(5)).unwrap();
        let err = source.search(&Topic::new("Sudan").unwrap()).await.unwrap_err();
        match err {
            Error::Retrieval(msg) => {
                assert!(msg.starts_with("News endpoint unreachable"));
                assert!(!msg.contains("ab+cd/ef=="));
                assert!(!msg.contains("ab%2Bcd%2Fef%3D%3D"));
                assert!(!msg.contains("apiKey"));
            }
            other => panic!("expected retrieval error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_hides_key() {
        // Nothing listens on port 9 locally.
        let err = source("http://127.0.0.1:9").search(&Topic::new("Sudan").unwrap()).await.unwrap_err();
        match err {
            Error::Retrieval(msg) => assert!(!msg.contains("test-news-key")),
            other => panic!("expected retrieval error, got {:?}", other),
        }
    }
}
