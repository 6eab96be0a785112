//! # Logging & Tracing Infrastructure
//!
//! Configures the `tracing-subscriber` stack for the core crates:
//! - pretty, compact, or JSON-ish output formats
//! - module-level filtering via `EnvFilter` (`RUST_LOG` or an explicit
//!   filter string such as `"core_playback=debug,core_auth=trace"`)
//!
//! ## Usage
//!
//! ```no_run
//! use core_runtime::logging::{init_logging, LogFormat, LoggingConfig};
//!
//! let config = LoggingConfig::default()
//!     .with_format(LogFormat::Pretty)
//!     .with_filter("core_playback=debug");
//!
//! init_logging(config).expect("failed to initialize logging");
//! tracing::info!("application started");
//! ```
//!
//! `init_logging` installs a process-global subscriber and therefore may only
//! succeed once; a second call returns
//! [`Error::LoggingAlreadyInitialized`](crate::error::Error).

use crate::error::{Error, Result};
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable format with ANSI colors.
    Pretty,
    /// Compact single-line format for production.
    Compact,
}

impl Default for LogFormat {
    fn default() -> Self {
        #[cfg(debug_assertions)]
        return Self::Pretty;

        #[cfg(not(debug_assertions))]
        return Self::Compact;
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    /// Output format.
    pub format: LogFormat,
    /// Explicit filter directives; falls back to `RUST_LOG`, then `"info"`.
    pub filter: Option<String>,
    /// Display the emitting module target in each line.
    pub display_target: bool,
}

impl LoggingConfig {
    /// Set the output format.
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Set an explicit filter string.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Toggle module targets in the output.
    pub fn with_display_target(mut self, display: bool) -> Self {
        self.display_target = display;
        self
    }
}

/// Install the global `tracing` subscriber.
///
/// # Errors
///
/// Returns [`Error::Config`] when the filter string is invalid and
/// [`Error::LoggingAlreadyInitialized`] when a subscriber is already set.
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let filter = match &config.filter {
        Some(directives) => EnvFilter::try_new(directives)
            .map_err(|e| Error::Config(format!("invalid log filter: {e}")))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    let registry = tracing_subscriber::registry().with(filter);

    let install = match config.format {
        LogFormat::Pretty => registry
            .with(fmt::layer().pretty().with_target(config.display_target))
            .try_init(),
        LogFormat::Compact => registry
            .with(fmt::layer().compact().with_target(config.display_target))
            .try_init(),
    };

    install.map_err(|_| Error::LoggingAlreadyInitialized)
}
