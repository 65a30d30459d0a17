use anyhow::Context;
use auto_readme::config::{GITHUB_TOKEN_VAR, OPENROUTER_KEY_VAR};
use auto_readme::utils::{logger, validation::Validate};
use auto_readme::{build_router, AppConfig, AppState, CliArgs};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // 初始化日誌
    if args.log_json {
        logger::init_json_logger();
    } else {
        logger::init_server_logger(args.verbose);
    }

    tracing::info!("Starting auto-readme server");
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    let config = AppConfig::resolve(&args).context("failed to load configuration")?;

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    // 缺少憑證不阻止啟動，對應端點會回報配置錯誤
    if config.openrouter.api_key.is_none() {
        tracing::warn!(
            "🔶 {} not set - README generation will answer with a configuration error",
            OPENROUTER_KEY_VAR
        );
    }
    if config.github.token.is_none() {
        tracing::warn!(
            "🔶 {} not set - repository search will answer with a configuration error",
            GITHUB_TOKEN_VAR
        );
    }

    let state = AppState::from_config(&config);
    let app = build_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!("🚀 Listening on http://{}", addr);
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
