use std::sync::Arc;
use std::time::Duration;
use ct_core::logging::Logger;
use ct_core::{Error, NewsReport, NewsSource, Result, Settings, Topic};
use crate::sources::newsapi::NewsApiSource;

/// Turns a topic into a [`NewsReport`] using a single search against a [`NewsSource`].
pub struct NewsLookup {
    source: Arc<dyn NewsSource>,
    timeout: Duration,
    logger: Logger,
}

impl NewsLookup {
    pub fn new(source: Arc<dyn NewsSource>, timeout: Duration) -> Self {
        Self {
            source,
            timeout,
            logger: Logger::new().with_prefix("🔎"),
        }
    }

    /// Builds a lookup backed by NewsAPI.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let source = NewsApiSource::new(&settings.news, settings.request_timeout)?;
        Ok(Self::new(Arc::new(source), settings.request_timeout))
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    pub async fn fetch(&self, topic: &str) -> Result<NewsReport> {
        let topic = Topic::new(topic)?;
        self.fetch_topic(&topic).await
    }

    pub async fn fetch_topic(&self, topic: &Topic) -> Result<NewsReport> {
        self.logger.info(&format!("Fetching news for '{}' from {}", topic, self.source.name()));

        let articles = tokio::time::timeout(self.timeout, self.source.search(topic))
            .await
            .map_err(|_| {
                Error::Retrieval(format!(
                    "{} did not answer within {}s",
                    self.source.name(),
                    self.timeout.as_secs_f32()
                ))
            })??;

        let report = NewsReport::from_articles(topic.clone(), articles);
        match &report {
            NewsReport::Digest(digest) => {
                self.logger.info(&format!("Built digest with {} articles", digest.len()))
            }
            NewsReport::NoResults => self.logger.info(&format!("No results for '{}'", topic)),
        }
        Ok(report)
    }
}
