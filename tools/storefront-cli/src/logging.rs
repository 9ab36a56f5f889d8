//! Log subscriber setup.

use tracing_subscriber::EnvFilter;

/// Install the stderr fmt subscriber.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` means debug and the
/// configured level applies.
pub fn init(verbose: bool, level: &str) {
    let fallback = if verbose { "debug" } else { level };
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // Ignore the error if a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
