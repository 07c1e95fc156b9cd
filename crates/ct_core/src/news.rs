use async_trait::async_trait;
use crate::types::{Article, Topic};
use crate::Result;

#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Returns the name of the news endpoint
    fn name(&self) -> &str;

    /// Most recent English-language articles matching `topic`, newest first
    async fn search(&self, topic: &Topic) -> Result<Vec<Article>>;
}
