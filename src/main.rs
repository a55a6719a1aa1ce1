use clap::Parser;
use refactor_relay::utils::{logger, validation::Validate};
use refactor_relay::{gateway, CliConfig, RefactorService};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(logger::LogFormat::from_json_flag(cli.json_logs), cli.verbose);

    tracing::info!("Starting refactor-relay");

    let config = match cli.load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Failed to load configuration: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };
    if cli.verbose {
        tracing::debug!("Relay config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    // 模式只在啟動時決定一次
    let service = Arc::new(RefactorService::from_config(&config));

    if let Err(e) = gateway::serve(&config, service).await {
        tracing::error!(
            "❌ Server failed: {} (Category: {:?})",
            e,
            e.category()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        return Err(e.into());
    }

    Ok(())
}
