use crate::adapters::GeminiClient;
use crate::config::toml_config::RelayConfig;
use crate::core::prompt::{
    build_mock_response, build_user_prompt, truncate_chars, LOG_PREVIEW_CHARS, SYSTEM_INSTRUCTION,
};
use crate::core::{GenerationClient, RefactorRequest, RefactorResult, Result, ServiceMode};
use crate::utils::error::RelayError;
use std::sync::Arc;
use std::time::Duration;

enum Backend {
    Mock,
    Live(Arc<dyn GenerationClient>),
}

/// 重構服務：啟動時決定模式，之後只讀
pub struct RefactorService {
    backend: Backend,
    mock_delay: Duration,
}

impl RefactorService {
    pub fn mock(mock_delay: Duration) -> Self {
        Self {
            backend: Backend::Mock,
            mock_delay,
        }
    }

    pub fn live(client: Arc<dyn GenerationClient>) -> Self {
        Self {
            backend: Backend::Live(client),
            mock_delay: Duration::ZERO,
        }
    }

    /// 依配置建立服務。沒有 API key 或建立客戶端失敗時退回模擬模式，不會中止啟動
    pub fn from_config(config: &RelayConfig) -> Self {
        let Some(api_key) = config.resolve_api_key() else {
            tracing::warn!(
                "⚠️ {} not found. RUNNING IN MOCK MODE.",
                config.provider.api_key_env
            );
            return Self::mock(config.mock_delay());
        };

        match GeminiClient::new(
            api_key,
            config.provider.model.clone(),
            config.provider.base_url.clone(),
            config.request_timeout(),
        ) {
            Ok(client) => {
                tracing::info!(
                    "✅ Gemini client initialized successfully ({}). Real AI calls will be made.",
                    config.provider.model
                );
                Self::live(Arc::new(client))
            }
            Err(e) => {
                tracing::warn!(
                    "⚠️ Failed to initialize Gemini client. Running in MOCK MODE. Error: {}",
                    e
                );
                Self::mock(config.mock_delay())
            }
        }
    }

    pub fn mode(&self) -> ServiceMode {
        match self.backend {
            Backend::Mock => ServiceMode::Mock,
            Backend::Live(_) => ServiceMode::Live,
        }
    }

    pub async fn refactor(&self, request: &RefactorRequest) -> Result<RefactorResult> {
        match &self.backend {
            Backend::Mock => Ok(self.mock_refactor(request).await),
            Backend::Live(client) => self.live_refactor(client.as_ref(), request).await,
        }
    }

    async fn mock_refactor(&self, request: &RefactorRequest) -> RefactorResult {
        let text = build_mock_response(&request.refactor_request, &request.user_code);

        // 模擬網路延遲，方便前端測試
        if !self.mock_delay.is_zero() {
            tokio::time::sleep(self.mock_delay).await;
        }

        tracing::info!("Returning mock response.");
        RefactorResult::succeeded(text)
    }

    async fn live_refactor(
        &self,
        client: &dyn GenerationClient,
        request: &RefactorRequest,
    ) -> Result<RefactorResult> {
        let user_prompt = build_user_prompt(&request.refactor_request, &request.user_code);

        tracing::info!(
            "Calling {} with request: '{}...'",
            client.model(),
            truncate_chars(&request.refactor_request, LOG_PREVIEW_CHARS)
        );

        match client.generate(SYSTEM_INSTRUCTION, &user_prompt).await {
            Ok(text) => Ok(RefactorResult::succeeded(text.trim().to_string())),
            Err(e) if e.is_provider() => {
                tracing::error!("❌ Gemini API Error: {}", e);
                Err(RelayError::from(e))
            }
            Err(e) => {
                tracing::error!("❌ Unexpected Error: {}", e);
                Err(RelayError::from(e))
            }
        }
    }
}
