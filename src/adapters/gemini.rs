use crate::domain::ports::GenerationClient;
use crate::utils::error::{GenerationError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Gemini `generateContent` REST client. Holds the credential and one pooled HTTP client.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
    #[serde(default)]
    thought: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    code: Option<u16>,
    #[serde(default)]
    message: String,
    status: Option<String>,
}

impl GeminiClient {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    /// 非 2xx 回應一律視為服務端錯誤，盡量取出服務回報的代碼與訊息
    fn provider_error(status: reqwest::StatusCode, body: &str) -> GenerationError {
        match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(envelope) => GenerationError::Provider {
                code: envelope.error.code.unwrap_or(status.as_u16()),
                status: envelope
                    .error
                    .status
                    .unwrap_or_else(|| status.canonical_reason().unwrap_or("UNKNOWN").to_string()),
                message: envelope.error.message,
            },
            Err(_) => GenerationError::Provider {
                code: status.as_u16(),
                status: status.canonical_reason().unwrap_or("UNKNOWN").to_string(),
                message: body.trim().to_string(),
            },
        }
    }

    /// 串接第一個候選結果中所有非 thought 的文字片段
    fn extract_text(response: GenerateContentResponse) -> std::result::Result<String, GenerationError> {
        if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(GenerationError::InvalidResponse {
                reason: format!("prompt was blocked ({})", reason),
            });
        }

        let candidate = response
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| GenerationError::InvalidResponse {
                reason: "response contained no candidates".to_string(),
            })?;

        let texts: Vec<String> = candidate
            .content
            .map(|content| content.parts)
            .unwrap_or_default()
            .into_iter()
            .filter(|part| !part.thought)
            .filter_map(|part| part.text)
            .collect();

        if texts.is_empty() {
            return Err(GenerationError::InvalidResponse {
                reason: format!(
                    "candidate contained no text (finish reason: {})",
                    candidate.finish_reason.as_deref().unwrap_or("unknown")
                ),
            });
        }

        Ok(texts.concat())
    }
}

#[async_trait]
impl GenerationClient for GeminiClient {
    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(
        &self,
        system_instruction: &str,
        user_prompt: &str,
    ) -> std::result::Result<String, GenerationError> {
        let body = GenerateContentRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: system_instruction,
                }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part { text: user_prompt }],
            }],
        };

        tracing::debug!("Making generation request to: {}", self.endpoint());
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Generation response status: {}", status);

        let text = response.text().await?;
        if !status.is_success() {
            return Err(Self::provider_error(status, &text));
        }

        let parsed: GenerateContentResponse =
            serde_json::from_str(&text).map_err(|e| GenerationError::Unexpected {
                message: format!("invalid JSON body from generation service: {}", e),
            })?;

        Self::extract_text(parsed)
    }
}
