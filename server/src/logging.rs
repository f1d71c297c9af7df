// Logging module — powered by tracing-subscriber
//
// Uses tracing-subscriber for structured events. A compatibility bridge
// (`tracing_log::LogTracer`) captures all existing `log::*` macro calls
// from this crate and its dependencies and routes them through the
// tracing subscriber.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

/// Build the `EnvFilter` from the base level plus hardcoded
/// noisy-crate overrides.
fn build_env_filter(level: &str) -> anyhow::Result<EnvFilter> {
    let mut directives = vec![level.to_string()];

    // Suppress noisy third-party crates
    let noisy: &[(&str, &str)] = &[
        ("actix_server", "warn"),
        ("actix_web", "warn"),
        ("h2", "warn"),
        ("hyper", "warn"),
        ("hyper_util", "warn"),
        ("reqwest", "warn"),
        ("rustls", "warn"),
        ("tracing", "warn"),
    ];
    for (target, lvl) in noisy {
        directives.push(format!("{}={}", target, lvl));
    }

    let filter = EnvFilter::try_new(directives.join(","))?;
    Ok(filter)
}

/// Initialize logging with the configured level, console output, and
/// optional log file.
pub fn init_logging(
    level: &str,
    log_to_console: bool,
    log_file: Option<&str>,
) -> anyhow::Result<()> {
    let filter = build_env_filter(level)?;

    let console_layer = log_to_console.then(|| tracing_subscriber::fmt::layer().with_target(true));

    let file_layer = match log_file {
        Some(path) => {
            if let Some(parent) = Path::new(path).parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_target(true)
                    .with_writer(Arc::new(file)),
            )
        }
        None => None,
    };

    tracing_log::LogTracer::init()
        .map_err(|e| anyhow::anyhow!("failed to install log bridge: {}", e))?;

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer);
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {}", e))?;

    Ok(())
}
