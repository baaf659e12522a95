use tracing_subscriber::EnvFilter;

/// Initialize tracing from the number of `-v` flags given on the command
/// line:
///
/// - 0 -> warn
/// - 1 -> info
/// - 2 -> debug
/// - 3+ -> trace
///
/// `RUST_LOG`, if set, takes precedence.
pub(crate) fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tekufah={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
