pub mod agent;
pub mod models;
pub mod prompts;
pub mod runner;

pub use agent::{Agent, ConflictAgent};
pub use models::create_model;
pub use runner::{RunConfig, RunResult, Runner};

pub mod prelude {
    pub use super::agent::{Agent, ConflictAgent};
    pub use super::models::create_model;
    pub use super::runner::{RunConfig, Runner};
    pub use ct_core::{ChatModel, Error, Result, Topic};
}
