use std::fmt;
use async_trait::async_trait;
use ct_core::{ChatModel, Result};

/// Offline stand-in that echoes the first words of the prompt.
pub struct DummyModel;

impl fmt::Debug for DummyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DummyModel").finish()
    }
}

impl DummyModel {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DummyModel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatModel for DummyModel {
    fn name(&self) -> &str {
        "Dummy"
    }

    async fn complete(&self, _instructions: &str, prompt: &str) -> Result<String> {
        // Take first 20 words and join them
        let words: Vec<&str> = prompt.split_whitespace().take(20).collect();
        Ok(words.join(" "))
    }
}
