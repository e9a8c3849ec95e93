//! Headless host bridge binary for stdin/stdout JSON communication.
//!
//! Reads `{"query": "..."}` requests as newline-delimited JSON from stdin
//! and writes one nutrition outcome per request to stdout.
//!
//! All tracing/diagnostic output goes to stderr so that stdout remains a
//! clean JSON protocol channel.

use std::path::PathBuf;

use nutrition_profile::host::run_stdio_bridge;
use nutrition_profile::{AppConfig, NutritionTool};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("nutrition_profile=info,fdc_search=info")
            }),
        )
        .init();

    // Optional single argument: path to a TOML config file.
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = AppConfig::load(config_path.as_deref())?;
    let tool = NutritionTool::from_config(config.fdc)?;

    tracing::info!("nutrition-host starting");

    run_stdio_bridge(&tool).await.map_err(|e| {
        tracing::error!(error = %e, "nutrition-host exited with error");
        anyhow::anyhow!("nutrition-host failed: {e}")
    })?;

    tracing::info!("nutrition-host shut down cleanly");
    Ok(())
}
