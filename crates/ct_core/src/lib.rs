pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod news;
pub mod types;

pub use config::{ModelSettings, NewsSettings, Settings};
pub use error::{Error, Result};
pub use models::ChatModel;
pub use news::NewsSource;
pub use types::{Article, Digest, NewsReport, Topic, MAX_DIGEST_ARTICLES, NO_RESULTS_MESSAGE};
