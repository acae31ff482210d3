use anyhow::{Context, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs the global tracing subscriber for hosts that do not bring their
/// own. Diagnostic events go to stdout; the embedding framework owns routing
/// them to an operator-facing channel.
pub fn setup_logging() -> Result<()> {
    let filter = EnvFilter::from("info");

    let fmt_layer = fmt::layer().with_target(true).with_level(true);

    let subscriber = tracing_subscriber::registry().with(filter).with(fmt_layer);

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    Ok(())
}
