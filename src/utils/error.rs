use thiserror::Error;

/// 表單欄位驗證失敗的單一項目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub kind: &'static str,
    pub field: String,
    pub message: String,
}

impl FieldIssue {
    pub fn missing(field: &str) -> Self {
        Self {
            kind: "missing",
            field: field.to_string(),
            message: "Field required".to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("HTTP client error: {0}")]
    HttpClientError(#[from] reqwest::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {}", format_issues(.issues))]
    ValidationError { issues: Vec<FieldIssue> },

    /// 表單本體無法讀取或解析，保留原始拒絕狀態碼 (例如超過大小上限為 413)
    #[error("Malformed form body: {message}")]
    MalformedBodyError { status: u16, message: String },

    #[error("AI Service Error: Failed to process request due to API error. Details: {detail}")]
    ProviderError { detail: String },

    #[error("An unexpected server error occurred: {detail}")]
    UnexpectedError { detail: String },
}

/// 生成服務 (adapter) 回報的錯誤
#[derive(Error, Debug)]
pub enum GenerationError {
    /// 服務端明確回報的失敗：驗證、額度、請求格式、服務中斷
    #[error("{code} {status}. {message}")]
    Provider {
        code: u16,
        status: String,
        message: String,
    },

    #[error("request to generation service failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("generation service returned an unreadable response: {reason}")]
    InvalidResponse { reason: String },

    /// 其他失敗，例如成功狀態下回傳無法解碼的內容
    #[error("{message}")]
    Unexpected { message: String },
}

impl GenerationError {
    pub fn is_provider(&self) -> bool {
        matches!(self, GenerationError::Provider { .. })
    }
}

impl From<GenerationError> for RelayError {
    fn from(err: GenerationError) -> Self {
        match err {
            GenerationError::Provider { .. } => RelayError::ProviderError {
                detail: err.to_string(),
            },
            other => RelayError::UnexpectedError {
                detail: other.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Validation,
    Provider,
    Internal,
}

impl RelayError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RelayError::ConfigError { .. }
            | RelayError::ConfigValidationError { .. }
            | RelayError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            RelayError::ValidationError { .. } | RelayError::MalformedBodyError { .. } => {
                ErrorCategory::Validation
            }
            RelayError::ProviderError { .. } => ErrorCategory::Provider,
            RelayError::IoError(_)
            | RelayError::HttpClientError(_)
            | RelayError::UnexpectedError { .. } => ErrorCategory::Internal,
        }
    }

    pub fn status_code(&self) -> u16 {
        if let RelayError::MalformedBodyError { status, .. } = self {
            return *status;
        }
        match self.category() {
            ErrorCategory::Validation => 422,
            _ => 500,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RelayError::IoError(_) => "Check that the host/port is free and the config file is readable",
            RelayError::HttpClientError(_) => "Check the TLS setup and the provider base URL",
            RelayError::ConfigError { .. } | RelayError::ConfigValidationError { .. } => {
                "Check the TOML syntax and section names in the config file"
            }
            RelayError::InvalidConfigValueError { .. } => {
                "Fix the reported value in the config file or on the command line"
            }
            RelayError::ValidationError { .. } | RelayError::MalformedBodyError { .. } => {
                "Send both user_code and refactor_request as non-empty form fields"
            }
            RelayError::ProviderError { .. } => "Check the API key, quota and model name",
            RelayError::UnexpectedError { .. } => "Retry the request; see server logs for details",
        }
    }
}

fn format_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("{} ({})", issue.field, issue.message))
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, RelayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_keeps_detail() {
        let err: RelayError = GenerationError::Provider {
            code: 429,
            status: "RESOURCE_EXHAUSTED".to_string(),
            message: "Quota exceeded".to_string(),
        }
        .into();

        assert_eq!(err.category(), ErrorCategory::Provider);
        assert_eq!(err.status_code(), 500);
        assert_eq!(
            err.to_string(),
            "AI Service Error: Failed to process request due to API error. Details: 429 RESOURCE_EXHAUSTED. Quota exceeded"
        );
    }

    #[test]
    fn test_other_generation_errors_are_unexpected() {
        let err: RelayError = GenerationError::InvalidResponse {
            reason: "no candidates".to_string(),
        }
        .into();

        assert_eq!(err.category(), ErrorCategory::Internal);
        assert!(err
            .to_string()
            .starts_with("An unexpected server error occurred: "));
        assert!(err.to_string().contains("no candidates"));
    }

    #[test]
    fn test_validation_error_maps_to_422() {
        let err = RelayError::ValidationError {
            issues: vec![FieldIssue::missing("user_code")],
        };
        assert_eq!(err.status_code(), 422);
        assert!(err.to_string().contains("user_code"));
    }

    #[test]
    fn test_malformed_body_keeps_rejection_status() {
        let err = RelayError::MalformedBodyError {
            status: 413,
            message: "length limit exceeded".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(err.status_code(), 413);
    }
}
