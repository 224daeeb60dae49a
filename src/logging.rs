use crate::config::LoggingConfig;
use crate::errors::ConfigError;

use std::path::Path;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
///
/// With `timespent_path` set, `timespent` records are also appended to that
/// file; the returned guard flushes it and must live as long as the process.
pub fn init(config: &LoggingConfig) -> Result<Option<WorkerGuard>, ConfigError> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|err| ConfigError::Invalid(format!("log level {}: {err}", config.level)))?;
    let registry = tracing_subscriber::registry().with(fmt::layer().with_filter(env_filter));

    let Some(path) = &config.timespent_path else {
        registry.init();
        return Ok(None);
    };

    let file_name = path.file_name().ok_or_else(|| {
        ConfigError::Invalid(format!("timespent_path {} is not a file", path.display()))
    })?;
    let directory = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(directory, file_name));

    registry
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false)
                .with_filter(Targets::new().with_target("timespent", Level::INFO)),
        )
        .init();

    Ok(Some(guard))
}
