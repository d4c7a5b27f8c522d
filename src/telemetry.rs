use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber. Call once from the host before
/// touching the store; honors `RUST_LOG` when set.
pub fn init(json_logs: bool) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fittracker=debug"));

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }
}
