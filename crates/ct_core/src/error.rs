use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Retrieval error: {0}")]
    Retrieval(String),

    #[error("Generation error: {0}")]
    Generation(String),
}

impl Error {
    /// Message safe to show to an end user.
    pub fn user_message(&self) -> String {
        match self {
            Error::Retrieval(msg) => format!("⚠️ Could not fetch news: {}", msg),
            Error::Generation(msg) => format!("⚠️ Could not generate a response: {}", msg),
            Error::InvalidInput(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
