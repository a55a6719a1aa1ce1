pub mod prompt;
pub mod refactor;

pub use crate::domain::model::{RefactorRequest, RefactorResult, ServiceMode};
pub use crate::domain::ports::GenerationClient;
pub use crate::utils::error::Result;
