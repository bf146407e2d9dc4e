//! # Load-Balancer Feature Charm
//!
//! Entry point invoked by the framework for every hook.

use anyhow::{Context, Result};
use tracing_subscriber::FmtSubscriber;

use charm_runtime::config::RuntimeConfig;
use charm_runtime::CharmRuntime;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration
    let config = RuntimeConfig::from_env().context("Failed to load hook environment")?;

    // Initialize logging; stdout is left to the hook tools
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(config.env_filter()?)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let runtime = CharmRuntime::new(config)?;
    runtime.run().await?;

    Ok(())
}
