//! Headless host bridge binary for stdin/stdout JSON communication.
//!
//! Reads `CommandEnvelope` messages as newline-delimited JSON from stdin and
//! writes one `ResponseEnvelope` per command to stdout.
//!
//! All tracing/diagnostic output goes to stderr so that stdout remains a
//! clean JSON protocol channel.

use solace::{EmpathyEngine, SolaceConfig};
use solace::host::stdio::run_stdio_bridge;

/// Environment variable naming an explicit config file.
const CONFIG_ENV: &str = "SOLACE_CONFIG";

fn load_config() -> anyhow::Result<SolaceConfig> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        let path = std::path::PathBuf::from(path);
        tracing::info!(path = %path.display(), env = CONFIG_ENV, "loading config from environment override");
        return SolaceConfig::from_file(&path)
            .map_err(|e| anyhow::anyhow!("failed to load {}: {e}", path.display()));
    }
    Ok(SolaceConfig::load_or_default()?)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Stdout is reserved for the JSON protocol.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("solace-host starting");

    let config = load_config()?;
    run_stdio_bridge(EmpathyEngine::new(config))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "solace-host exited with error");
            anyhow::anyhow!("solace-host failed: {e}")
        })?;

    tracing::info!("solace-host shut down cleanly");
    Ok(())
}
