use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 日誌輸出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// 單行精簡格式，適合終端機
    Compact,
    /// 結構化 JSON，供容器或集中式日誌收集使用
    Json,
}

impl LogFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            LogFormat::Json
        } else {
            LogFormat::Compact
        }
    }
}

/// RUST_LOG 未設定時使用的過濾規則；verbose 時一併顯示 tower_http 的請求追蹤
pub fn filter_directive(verbose: bool) -> &'static str {
    if verbose {
        "refactor_relay=debug,tower_http=debug,info"
    } else {
        "refactor_relay=info,tower_http=warn"
    }
}

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_directive(verbose)))
}

/// 安裝全域 subscriber，程式啟動時呼叫一次
pub fn init_logger(format: LogFormat, verbose: bool) {
    let registry = tracing_subscriber::registry().with(env_filter(verbose));

    match format {
        LogFormat::Compact => registry
            .with(fmt::layer().with_target(false).compact())
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().with_target(true).json())
            .init(),
    }
}
