use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use ct_core::config::ModelSettings;
use ct_core::{ChatModel, Error, Result};

pub mod dummy;
pub mod openai;

pub use dummy::DummyModel;
pub use openai::OpenAiCompatModel;

/// Provider names accepted by [`create_model`].
pub const PROVIDERS: &[&str] = &["openai", "dummy"];

pub fn create_model(settings: &ModelSettings, timeout: Duration) -> Result<Arc<dyn ChatModel>> {
    let model: Arc<dyn ChatModel> = match settings.provider.to_lowercase().as_str() {
        "openai" | "gemini" => Arc::new(OpenAiCompatModel::new(settings, timeout)?),
        "dummy" => Arc::new(DummyModel::new()),
        other => {
            return Err(Error::Config(format!(
                "Unknown model provider '{}'. Available providers: {}",
                other,
                PROVIDERS.join(", ")
            )))
        }
    };
    info!("🧠 Inference model ready (provider {}, model {})", settings.provider, model.name());
    Ok(model)
}
