//! Logging initialization.
//!
//! Sets up a `tracing` subscriber with an `EnvFilter` and a `fmt` layer.
//! `RUST_LOG` takes precedence over the configured level.

use serde::{Deserialize, Serialize};

#[cfg(feature = "telemetry")]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Output format for log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable output.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Builds the default filter directive for a base level.
#[must_use]
pub fn default_directive(level: &str) -> String {
    format!("{level},movies=debug,tower_http=debug,sqlx=warn")
}

/// Initializes the global tracing subscriber.
///
/// Returns an error if a global subscriber is already installed.
#[cfg(feature = "telemetry")]
pub fn init_logging(level: &str, format: LogFormat) -> crate::MoviesResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(level)));

    let registry = tracing_subscriber::registry().with(filter);

    let result = match format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_current_span(false))
            .try_init(),
    };

    result.map_err(|e| crate::MoviesError::Internal(format!("Failed to initialize logging: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_deserializes_lowercase() {
        let format: LogFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(format, LogFormat::Json);
        assert_eq!(LogFormat::default(), LogFormat::Pretty);
    }

    #[test]
    fn test_default_directive() {
        assert_eq!(
            default_directive("info"),
            "info,movies=debug,tower_http=debug,sqlx=warn"
        );
    }
}
