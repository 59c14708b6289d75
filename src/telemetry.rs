use tracing::subscriber::set_global_default;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, Registry};

/// Default filter directive for a `-v` count: warn, info, debug, trace.
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Compose the stderr subscriber. `RUST_LOG` wins over `default_filter`
/// when set, so stdout only ever carries the report.
pub fn get_subscriber(default_filter: &'static str) -> impl tracing::Subscriber + Send + Sync {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    Registry::default().with(env_filter).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false),
    )
}

/// Register a subscriber as global default. Call once, at startup.
pub fn init_subscriber(
    subscriber: impl tracing::Subscriber + Send + Sync + 'static,
) -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    set_global_default(subscriber)
}
