use tracing::subscriber::set_global_default;
use tracing::subscriber::SetGlobalDefaultError;
use tracing::Subscriber;
use tracing_bunyan_formatter::BunyanFormattingLayer;
use tracing_bunyan_formatter::JsonStorageLayer;
use tracing_log::log_tracer::SetLoggerError;
use tracing_log::LogTracer;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Registry;

#[derive(thiserror::Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to redirect `log` records to tracing")]
    Logger(#[from] SetLoggerError),
    #[error("A global tracing subscriber was already set")]
    Subscriber(#[from] SetGlobalDefaultError),
}

/// Compose a Bunyan-formatted JSON subscriber. `RUST_LOG` overrides
/// `filter_level`.
///
/// `sink` must be a closure (e.g. `std::io::stdout`), not a return value.
pub fn get_subscriber<Sink>(
    name: &str,
    filter_level: &str,
    sink: Sink,
) -> impl Subscriber + Send + Sync
where
    // higher-ranked trait bound: `sink` must implement `MakeWriter` for every
    // choice of the lifetime `'a`
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_level));
    let fmt_layer = BunyanFormattingLayer::new(name.to_string(), sink);
    Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(fmt_layer)
}

/// Install `subscriber` globally. Must run once, before the app starts; a
/// second call fails.
pub fn init_subscriber(subscriber: impl Subscriber + Send + Sync) -> Result<(), TelemetryError> {
    // actix-web (and reqwest) log through `log`, not `tracing`
    LogTracer::init()?;
    set_global_default(subscriber)?;
    Ok(())
}
