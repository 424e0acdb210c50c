//! # Ledger Telemetry
//!
//! Logging setup for the ledger graph auditor.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ledger_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() {
//!     let config = TelemetryConfig::from_env();
//!     init_telemetry(&config).expect("Failed to init telemetry");
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `LEDGER_SERVICE_NAME` | `ledger-audit` | Service name in the startup log |
//! | `RUST_LOG` | unset | Log level filter; wins over `LEDGER_LOG_LEVEL` |
//! | `LEDGER_LOG_LEVEL` | `info` | Log level filter, used when `RUST_LOG` is unset |
//! | `LEDGER_CONSOLE_OUTPUT` | `true` | Emit logs to stderr |
//! | `LEDGER_JSON_LOGS` | `false` | JSON formatted logs |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::env_filter;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to install tracing subscriber: {0}")]
    SubscriberInit(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Install the global tracing subscriber described by `config`.
///
/// Fails if a global subscriber is already installed.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    logging::init_logging(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TelemetryError::SubscriberInit("already set".to_string());
        assert_eq!(
            err.to_string(),
            "Failed to install tracing subscriber: already set"
        );
    }
}
