use tracing_subscriber::EnvFilter;

/// Initializes tracing for the given verbosity level.
///
/// Mapping:
/// - 0        -> warn
/// - 1 (-v)   -> info
/// - 2 (-vv)  -> debug
/// - 3+ (-vvv)-> trace
///
/// The `RUST_LOG` environment variable overrides the level if set.
/// Logs are written to stderr, so they never mix with records written to stdout.
/// Does nothing if a subscriber is already installed.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
