//! Logging and tracing initialization.
//!
//! Log output goes to stderr. Stdout carries only what the commands print
//! themselves (port listings, replayed moves, JSON).

use tracing::Subscriber;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::{SerialpointError, SerialpointResult};

/// Install the global subscriber. `RUST_LOG` takes precedence over `config.level`.
pub fn init_logging(config: &LoggingConfig) -> SerialpointResult<()> {
    build_subscriber(config, std::io::stderr)
        .try_init()
        .map_err(|e| {
            SerialpointError::Other(anyhow::Error::new(e).context("Failed to install logger"))
        })
}

fn build_subscriber<W>(
    config: &LoggingConfig,
    writer: W,
) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Clone + Send + Sync + 'static,
{
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let json = config.json.then(|| fmt::layer().json().with_writer(writer.clone()));
    let text = (!config.json).then(|| fmt::layer().with_target(false).with_writer(writer));

    tracing_subscriber::registry().with(filter).with(json).with(text)
}
