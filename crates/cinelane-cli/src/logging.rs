use tracing_subscriber::EnvFilter;

use crate::types::LogLevel;

/// Install the stderr subscriber. `RUST_LOG` takes precedence over `level`.
///
/// Safe to call more than once; later calls keep the first subscriber.
pub fn init(level: LogLevel) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
