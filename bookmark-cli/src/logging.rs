use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

/// Install the stderr subscriber. Flags win over `RUST_LOG`.
pub fn configure_logging(verbose: bool, debug: bool, quiet: bool) {
    let level = if quiet {
        Some(Level::ERROR)
    } else if debug {
        Some(Level::DEBUG)
    } else if verbose {
        Some(Level::TRACE)
    } else {
        None
    };

    let filter = match level {
        Some(level) => EnvFilter::new(level.to_string()),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
