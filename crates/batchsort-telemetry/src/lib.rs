//! # Batchsort Telemetry
//!
//! Structured logging for the batchsort service: a small configuration
//! type and a `tracing-subscriber` initializer with optional JSON output.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod logging;

pub use logging::init_logging;

/// Configuration for telemetry.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Service name for startup logs.
    pub service_name: String,
    /// Log level.
    pub log_level: String,
    /// Enable JSON logging.
    pub json_logs: bool,
}

impl TelemetryConfig {
    /// Creates a new telemetry configuration.
    #[must_use]
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            log_level: "info".to_string(),
            json_logs: false,
        }
    }

    /// Sets the log level.
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Enables JSON logging.
    #[must_use]
    pub fn with_json_logs(mut self) -> Self {
        self.json_logs = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_telemetry_config_builder() {
        let config = TelemetryConfig::new("batchsort")
            .with_log_level("debug")
            .with_json_logs();

        assert_eq!(config.service_name, "batchsort");
        assert_eq!(config.log_level, "debug");
        assert!(config.json_logs);
    }

    #[test]
    fn test_telemetry_config_defaults() {
        let config = TelemetryConfig::new("batchsort");

        assert_eq!(config.log_level, "info");
        assert!(!config.json_logs);
    }
}
