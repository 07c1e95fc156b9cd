use std::sync::Arc;
use tracing::{info, warn};
use ct_core::{ChatModel, Result, Settings, Topic};
use crate::models::create_model;
use crate::prompts::{topic_report_prompt, CONFLICT_TRACKER_INSTRUCTIONS, CONFLICT_TRACKER_NAME};
use crate::runner::{RunConfig, Runner};

/// A persona bound to a model.
#[derive(Debug, Clone)]
pub struct Agent {
    pub name: String,
    pub instructions: String,
    pub model: Arc<dyn ChatModel>,
}

impl Agent {
    pub fn new(name: impl Into<String>, instructions: impl Into<String>, model: Arc<dyn ChatModel>) -> Self {
        Self {
            name: name.into(),
            instructions: instructions.into(),
            model,
        }
    }
}

/// The conflict-analysis agent. Cheap to share behind an `Arc`; holds no
/// per-request state.
#[derive(Debug, Clone)]
pub struct ConflictAgent {
    agent: Agent,
    run_config: RunConfig,
}

impl ConflictAgent {
    pub fn new(model: Arc<dyn ChatModel>, run_config: RunConfig) -> Self {
        Self {
            agent: Agent::new(CONFLICT_TRACKER_NAME, CONFLICT_TRACKER_INSTRUCTIONS, model),
            run_config,
        }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let model = create_model(&settings.model, settings.request_timeout)?;
        Ok(Self::new(model, RunConfig::from_settings(settings)))
    }

    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    /// Sends `prompt` to the model and returns its output untouched.
    pub async fn respond(&self, prompt: &str) -> Result<String> {
        info!("🤖 {} analysing ({} chars)", self.agent.name, prompt.len());
        match Runner::run(&self.agent, prompt, &self.run_config).await {
            Ok(result) => {
                info!("✨ {} answered in {:.1}s", result.agent_name, result.elapsed.as_secs_f32());
                Ok(result.final_output)
            }
            Err(e) => {
                warn!("⚠️ {} failed: {}", self.agent.name, e);
                Err(e)
            }
        }
    }

    /// Full situation report for a topic.
    pub async fn report(&self, topic: &Topic) -> Result<String> {
        self.respond(&topic_report_prompt(topic.as_str())).await
    }
}
