use crate::utils::error::GenerationError;
use async_trait::async_trait;

/// Text-generation provider seam. One call per request, no retries.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Model identifier fixed at construction.
    fn model(&self) -> &str;

    async fn generate(
        &self,
        system_instruction: &str,
        user_prompt: &str,
    ) -> std::result::Result<String, GenerationError>;
}
