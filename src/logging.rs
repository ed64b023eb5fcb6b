use tracing_subscriber::{
    EnvFilter, fmt,
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
};

/// Filter applied when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info";

/// Builds the level filter from `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// # Logging Setup
///
/// Installs the process-wide `tracing` subscriber: timestamped, levelled
/// lines on standard output. Records from the `log` facade (actix-web's
/// access logger) are forwarded into the same subscriber.
///
/// ## Errors
/// Returns [`TryInitError`] when a global subscriber is already installed.
/// The existing subscriber stays in place.
pub fn init() -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stdout).with_target(true))
        .with(env_filter())
        .try_init()
}
