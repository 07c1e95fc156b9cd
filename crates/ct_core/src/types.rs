use std::fmt;
use serde::{Deserialize, Serialize};
use crate::{Error, Result};

/// Most articles a digest will ever carry.
pub const MAX_DIGEST_ARTICLES: usize = 5;

/// Shown instead of a digest when the endpoint has nothing for a topic.
pub const NO_RESULTS_MESSAGE: &str = "🚫 No recent news found for this topic.";

/// Free-text subject supplied by the user. Kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Topic(String);

impl Topic {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(Error::InvalidInput("Topic must not be empty".to_string()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Topic {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Topic::new(value)
    }
}

impl From<Topic> for String {
    fn from(topic: Topic) -> Self {
        topic.0
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub source: String,
    pub url: String,
    /// `YYYY-MM-DD`, the first 10 characters of the endpoint's timestamp.
    pub published: String,
}

impl Article {
    pub fn new(
        title: impl Into<String>,
        source: impl Into<String>,
        url: impl Into<String>,
        published_at: &str,
    ) -> Self {
        Self {
            title: title.into(),
            source: source.into(),
            url: url.into(),
            published: published_at.chars().take(10).collect(),
        }
    }
}

impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- **{}**\n  ({}, {})\n  [Read more]({})\n\n",
            self.title, self.source, self.published, self.url
        )
    }
}

/// Up to [`MAX_DIGEST_ARTICLES`] articles in the order the endpoint returned them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Digest {
    pub topic: Topic,
    articles: Vec<Article>,
}

impl Digest {
    pub fn new(topic: Topic, mut articles: Vec<Article>) -> Self {
        articles.truncate(MAX_DIGEST_ARTICLES);
        Self { topic, articles }
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "🔍 **{} Conflict Report**\n\n", self.topic.as_str().to_uppercase())?;
        for article in &self.articles {
            write!(f, "{}", article)?;
        }
        Ok(())
    }
}

/// Outcome of a news lookup. `NoResults` is not a failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NewsReport {
    Digest(Digest),
    NoResults,
}

impl NewsReport {
    pub fn from_articles(topic: Topic, articles: Vec<Article>) -> Self {
        if articles.is_empty() {
            NewsReport::NoResults
        } else {
            NewsReport::Digest(Digest::new(topic, articles))
        }
    }

    pub fn is_no_results(&self) -> bool {
        matches!(self, NewsReport::NoResults)
    }
}

impl fmt::Display for NewsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NewsReport::Digest(digest) => fmt::Display::fmt(digest, f),
            NewsReport::NoResults => f.write_str(NO_RESULTS_MESSAGE),
        }
    }
}
