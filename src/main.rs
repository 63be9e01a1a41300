use std::process::ExitCode;

use anyhow::Context;

use poolsite::config::AppConfig;
use poolsite::ingestion::run_injection;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "Pool data injection failed");
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("load configuration")?;
    tracing::debug!(?config, "Configuration loaded");

    let snapshot = run_injection(&config).await?;

    tracing::info!(
        html = %config.html_path().display(),
        json = %config.json_path().display(),
        at = %snapshot.updated_at.to_rfc3339(),
        "Injected pool data"
    );

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let log_json = std::env::var("LOG_JSON")
        .map(|v| matches!(v.to_lowercase().as_str(), "true" | "t" | "1"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);
    if log_json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}
