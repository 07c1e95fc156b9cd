use ct_core::{Result, Settings};
use ct_inference::ConflictAgent;
use ct_news::NewsLookup;

/// Shared, read-only handles for every request.
pub struct AppState {
    pub news: NewsLookup,
    pub agent: ConflictAgent,
}

impl AppState {
    pub fn new(news: NewsLookup, agent: ConflictAgent) -> Self {
        Self { news, agent }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Ok(Self {
            news: NewsLookup::from_settings(settings)?,
            agent: ConflictAgent::from_settings(settings)?,
        })
    }
}
