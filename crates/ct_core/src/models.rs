use std::fmt;
use async_trait::async_trait;
use crate::Result;

/// A hosted chat-completion model.
#[async_trait]
pub trait ChatModel: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    /// Send `instructions` as the system message and `prompt` as the user message,
    /// returning the model's reply text.
    async fn complete(&self, instructions: &str, prompt: &str) -> Result<String>;
}
