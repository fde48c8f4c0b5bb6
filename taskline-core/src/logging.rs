use crate::conf::LoggingConfig;
use std::io;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the logging system.
///
/// Log records always go to stderr so they never interleave with the
/// narrative on stdout:
/// - `RUST_LOG` takes precedence over the configured level
/// - `json = true` switches to flattened JSON records
pub fn init_logging(cfg: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.level));

    let builder = fmt().with_env_filter(filter).with_writer(io::stderr);

    if cfg.json {
        builder.json().flatten_event(true).init();
    } else {
        builder.with_target(false).init();
    }
}
