use std::time::{Duration, Instant};
use tracing::debug;
use ct_core::config::DEFAULT_REQUEST_TIMEOUT;
use ct_core::{Error, Result, Settings};
use crate::agent::Agent;

/// Per-run options.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub timeout: Duration,
    /// When false, prompts and outputs are logged at debug level.
    pub tracing_disabled: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_REQUEST_TIMEOUT,
            tracing_disabled: true,
        }
    }
}

impl RunConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            timeout: settings.request_timeout,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunResult {
    pub agent_name: String,
    pub final_output: String,
    pub elapsed: Duration,
}

/// Executes one agent turn: instructions plus input go to the agent's model,
/// the reply comes back as `final_output`.
pub struct Runner;

impl Runner {
    pub async fn run(agent: &Agent, input: &str, config: &RunConfig) -> Result<RunResult> {
        if input.trim().is_empty() {
            return Err(Error::InvalidInput("Prompt must not be empty".to_string()));
        }
        if !config.tracing_disabled {
            debug!(agent = %agent.name, model = agent.model.name(), "run started: {}", input);
        }

        let started = Instant::now();
        let final_output = tokio::time::timeout(
            config.timeout,
            agent.model.complete(&agent.instructions, input),
        )
        .await
        .map_err(|_| {
            Error::Generation(format!(
                "{} did not answer within {}s",
                agent.name,
                config.timeout.as_secs_f32()
            ))
        })??;
        let elapsed = started.elapsed();

        if !config.tracing_disabled {
            debug!(agent = %agent.name, "run finished in {:?} ({} chars)", elapsed, final_output.len());
        }

        Ok(RunResult {
            agent_name: agent.name.clone(),
            final_output,
            elapsed,
        })
    }
}
