//! Tracing setup.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Variables read for a filter, in order.
const FILTER_VARS: [&str; 2] = ["MLISP_LOG", "RUST_LOG"];

/// Install a stderr subscriber when a filter is configured; `verbose`
/// forces `debug`. Without either, nothing is installed.
pub fn init(verbose: bool) {
    let directives = if verbose {
        Some("debug".to_string())
    } else {
        FILTER_VARS.iter().find_map(|var| std::env::var(var).ok())
    };

    if let Some(directives) = directives {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(std::io::stderr),
            )
            .with(EnvFilter::new(directives))
            .init();
    }
}
