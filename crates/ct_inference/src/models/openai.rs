use std::fmt;
use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use ct_core::config::ModelSettings;
use ct_core::{ChatModel, Error, Result};

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Deserialize)]
struct Message {
    content: Option<String>,
}

/// Any endpoint speaking the OpenAI chat-completions protocol (Gemini's
/// `/v1beta/openai/` compatibility layer by default).
pub struct OpenAiCompatModel {
    client: Client,
    api_key: String,
    base_url: String,
    model_name: String,
}

impl OpenAiCompatModel {
    pub fn new(settings: &ModelSettings, timeout: Duration) -> Result<Self> {
        if settings.api_key.trim().is_empty() {
            return Err(Error::Config("Model API key is required".to_string()));
        }
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: settings.api_key.clone(),
            base_url: settings.base_url.clone(),
            model_name: settings.model_name.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

impl fmt::Debug for OpenAiCompatModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiCompatModel")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model_name", &self.model_name)
            .finish()
    }
}

/// Pulls `error.message` out of an error body. Some compatibility layers wrap
/// the object in a one-element array.
fn error_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let value = match value {
        Value::Array(mut items) if !items.is_empty() => items.swap_remove(0),
        other => other,
    };
    value
        .get("error")
        .and_then(|e| e.get("message"))
        .and_then(|m| m.as_str())
        .map(str::to_string)
}

#[async_trait]
impl ChatModel for OpenAiCompatModel {
    fn name(&self) -> &str {
        &self.model_name
    }

    async fn complete(&self, instructions: &str, prompt: &str) -> Result<String> {
        let request = ChatRequest {
            model: &self.model_name,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: instructions,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
        };

        let response = self.client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::Generation("Model request timed out".to_string())
                } else {
                    Error::Generation(format!("Model endpoint unreachable: {}", e))
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Generation(format!("Failed to read model response: {}", e)))?;

        if !status.is_success() {
            let detail = error_detail(&body).unwrap_or_else(|| "no details".to_string());
            return Err(Error::Generation(format!("Model endpoint returned {}: {}", status, detail)));
        }

        let response: ChatResponse = serde_json::from_str(&body)
            .map_err(|e| Error::Generation(format!("Malformed model response: {}", e)))?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| Error::Generation("Model returned no output".to_string()))
    }
}
