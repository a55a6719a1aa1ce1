pub mod toml_config;

use crate::utils::error::Result;
use clap::Parser;
use toml_config::RelayConfig;

#[derive(Debug, Clone, Parser)]
#[command(name = "refactor-relay")]
#[command(about = "HTTP relay that forwards code refactoring requests to a hosted LLM")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override server.host
    #[arg(long)]
    pub host: Option<String>,

    /// Override server.port
    #[arg(long)]
    pub port: Option<u16>,

    /// Override provider.model
    #[arg(long)]
    pub model: Option<String>,

    /// Override provider.base_url
    #[arg(long)]
    pub api_base_url: Option<String>,

    /// Override provider.api_key_env
    #[arg(long)]
    pub api_key_env: Option<String>,

    /// Override provider.timeout_seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Override mock.delay_ms
    #[arg(long)]
    pub mock_delay_ms: Option<u64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl CliConfig {
    /// 載入設定檔 (若有指定)，再套用命令列覆蓋設定
    pub fn load(&self) -> Result<RelayConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                RelayConfig::from_file(path)?
            }
            None => RelayConfig::default(),
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut RelayConfig) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(model) = &self.model {
            config.provider.model = model.clone();
        }
        if let Some(base_url) = &self.api_base_url {
            config.provider.base_url = base_url.clone();
        }
        if let Some(api_key_env) = &self.api_key_env {
            config.provider.api_key_env = api_key_env.clone();
        }
        if let Some(timeout) = self.timeout_secs {
            config.provider.timeout_seconds = timeout;
        }
        if let Some(delay) = self.mock_delay_ms {
            config.mock.delay_ms = delay;
        }
    }
}
