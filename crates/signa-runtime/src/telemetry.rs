//! Logging setup
//!
//! Logs go to stderr so that JSON payloads on stdout stay clean. `RUST_LOG`
//! takes precedence over the verbosity flags when it is set.

use signa_core::{SignaError, SignaResult};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Default log level when `RUST_LOG` is absent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

impl Verbosity {
    /// `quiet` wins over `verbose`
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        match (verbose, quiet) {
            (_, true) => Verbosity::Quiet,
            (true, false) => Verbosity::Verbose,
            (false, false) => Verbosity::Normal,
        }
    }

    pub fn directive(self) -> &'static str {
        match self {
            Verbosity::Quiet => "warn",
            Verbosity::Normal => "info",
            Verbosity::Verbose => "debug",
        }
    }
}

/// Logging options
#[derive(Debug, Clone, Copy, Default)]
pub struct LogOptions {
    pub verbosity: Verbosity,
    /// One JSON object per event instead of human-readable lines
    pub json: bool,
}

/// Filter from `RUST_LOG`, falling back to the verbosity level
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.directive()))
}

/// Install the global subscriber; fails if one is already installed
pub fn init(options: LogOptions) -> SignaResult<()> {
    let layer = if options.json {
        fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(layer)
        .with(env_filter(options.verbosity))
        .try_init()
        .map_err(|e| SignaError::InvalidConfig(format!("logging: {e}")))
}
