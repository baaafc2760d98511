use tracing_subscriber::{EnvFilter, fmt};

/// Install the stderr subscriber used by the CLI.
///
/// `RUST_LOG` sets the filter (default `warn`), e.g. `RUST_LOG=forecast_tool=debug`
/// to trace every computed month.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .init();
}

