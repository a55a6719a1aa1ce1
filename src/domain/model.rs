use serde::{Deserialize, Serialize};
use std::fmt;

/// 單次重構請求，兩個欄位都必須是非空字串
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefactorRequest {
    pub user_code: String,
    pub refactor_request: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefactorResult {
    pub success: bool,
    pub refactored_code: String,
}

impl RefactorResult {
    pub fn succeeded(refactored_code: String) -> Self {
        Self {
            success: true,
            refactored_code,
        }
    }
}

/// 啟動時依憑證是否存在決定，之後不再變動
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceMode {
    Mock,
    Live,
}

impl fmt::Display for ServiceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceMode::Mock => write!(f, "mock"),
            ServiceMode::Live => write!(f, "live"),
        }
    }
}
