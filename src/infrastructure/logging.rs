use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};

/// Initialises the global tracing subscriber.
///
/// An explicit `RUST_LOG` wins over the configured level.
pub fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::CLOSE);

    match config.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.pretty().with_target(true).init(),
    }

    tracing::info!("Logging initialized with level: {}", config.level);
}
