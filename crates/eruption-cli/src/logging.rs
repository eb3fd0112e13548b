//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Logs go to stderr so stdout stays clean for the recap and JSON output.
//! The core never logs patient names, identifiers or comments.
//!
//! Without `-v`, the filter comes from `RUST_LOG` (default `warn`).

use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::LogFormatArg;

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Explicit level from `-v` flags; `None` defers to `RUST_LOG`.
    pub level: Option<Level>,
    pub format: LogFormatArg,
}

impl LogConfig {
    /// Map a `-v` count to a level.
    pub fn from_verbosity(verbosity: u8, format: LogFormatArg) -> Self {
        let level = match verbosity {
            0 => None,
            1 => Some(Level::INFO),
            2 => Some(Level::DEBUG),
            _ => Some(Level::TRACE),
        };
        Self { level, format }
    }

    fn env_filter(&self) -> EnvFilter {
        match self.level {
            Some(level) => EnvFilter::new(level.to_string().to_ascii_lowercase()),
            None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        }
    }
}

/// Install the global subscriber.
pub fn init_logging(config: &LogConfig) -> Result<(), tracing_subscriber::util::TryInitError> {
    let registry = tracing_subscriber::registry().with(config.env_filter());

    match config.format {
        LogFormatArg::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        LogFormatArg::Pretty => registry
            .with(fmt::layer().pretty().with_writer(std::io::stderr))
            .try_init(),
        LogFormatArg::Compact => registry
            .with(fmt::layer().compact().with_target(false).with_writer(std::io::stderr))
            .try_init(),
    }
}
