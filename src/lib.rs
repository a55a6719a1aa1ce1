pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod gateway;
pub mod utils;

pub use crate::adapters::GeminiClient;
pub use config::{toml_config::RelayConfig, CliConfig};
pub use crate::core::refactor::RefactorService;
pub use domain::model::{RefactorRequest, RefactorResult, ServiceMode};
pub use domain::ports::GenerationClient;
pub use gateway::build_router;
pub use utils::error::{GenerationError, RelayError, Result};
