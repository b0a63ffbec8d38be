//! Mold - a single AppKit window driven by a polling run-loop.

use anyhow::Context;
use mold_kernel::AppConfig;
use tracing_subscriber::EnvFilter;

/// Names a JSON config file. Defaults apply when unset.
const CONFIG_ENV: &str = "MOLD_CONFIG";

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the diagnostic lines.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting mold");

    let config = load_config()?;
    if let Err(err) = run(&config) {
        tracing::error!("{err:#}");
        return Err(err);
    }
    Ok(())
}

fn load_config() -> anyhow::Result<AppConfig> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) => {
            let config = AppConfig::load(&path)
                .with_context(|| format!("loading config from {}", path.to_string_lossy()))?;
            tracing::debug!(?config, "Loaded config");
            Ok(config)
        }
        None => Ok(AppConfig::default()),
    }
}

#[cfg(target_os = "macos")]
fn run(config: &AppConfig) -> anyhow::Result<()> {
    use mold_kernel::{EventLoop, StdoutSink};

    let (host, lifecycle) = mold_cocoa::launch(config).context("starting the application")?;
    EventLoop::new(host, lifecycle, StdoutSink, &config.event_loop).run();
    Ok(())
}

#[cfg(not(target_os = "macos"))]
fn run(_config: &AppConfig) -> anyhow::Result<()> {
    anyhow::bail!("mold drives an AppKit window and only runs on macOS")
}
