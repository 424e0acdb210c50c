//! Configuration for a ledger audit session

use crate::algorithms::{DEFAULT_FRAUD_THRESHOLD, DEFAULT_TOP_N};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Invalid audit configuration
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Fraud threshold must be a finite, non-negative amount: {0}")]
    InvalidThreshold(f64),

    #[error("Input path is empty")]
    EmptyInputPath,
}

/// Audit configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Transfer log to load
    pub input_path: PathBuf,
    /// Transfers strictly above this amount are flagged
    pub fraud_threshold: f64,
    /// Number of participants in the centrality ranking
    pub top_n: usize,
    /// Write a Graphviz rendering here, if set
    pub dot_output: Option<PathBuf>,
    /// Print the report as JSON instead of text
    pub json_report: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("transactions.csv"),
            fraud_threshold: DEFAULT_FRAUD_THRESHOLD,
            top_n: DEFAULT_TOP_N,
            dot_output: None,
            json_report: false,
        }
    }
}

impl AuditConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `LEDGER_INPUT`: Transfer log path (default: transactions.csv)
    /// - `LEDGER_FRAUD_THRESHOLD`: Fraud threshold (default: 500.00)
    /// - `LEDGER_TOP_N`: Participants to rank (default: 5)
    /// - `LEDGER_DOT_OUTPUT`: Graphviz output path (default: unset)
    /// - `LEDGER_JSON_REPORT`: Emit JSON report (default: false)
    ///
    /// Unparseable values are logged and the default is kept.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key/value source, e.g. a map in tests.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup("LEDGER_INPUT") {
            config.input_path = PathBuf::from(path);
        }

        if let Some(raw) = lookup("LEDGER_FRAUD_THRESHOLD") {
            match raw.parse() {
                Ok(threshold) => config.fraud_threshold = threshold,
                Err(_) => warn!(value = %raw, "Ignoring invalid LEDGER_FRAUD_THRESHOLD"),
            }
        }

        if let Some(raw) = lookup("LEDGER_TOP_N") {
            match raw.parse() {
                Ok(n) => config.top_n = n,
                Err(_) => warn!(value = %raw, "Ignoring invalid LEDGER_TOP_N"),
            }
        }

        if let Some(path) = lookup("LEDGER_DOT_OUTPUT") {
            if !path.is_empty() {
                config.dot_output = Some(PathBuf::from(path));
            }
        }

        config.json_report = lookup("LEDGER_JSON_REPORT")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        config
    }

    /// Check values that cannot be expressed in the field types
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.fraud_threshold.is_finite() || self.fraud_threshold < 0.0 {
            return Err(ConfigError::InvalidThreshold(self.fraud_threshold));
        }
        if self.input_path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyInputPath);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = AuditConfig::default();
        assert_eq!(config.input_path, PathBuf::from("transactions.csv"));
        assert_eq!(config.fraud_threshold, 500.0);
        assert_eq!(config.top_n, 5);
        assert!(config.dot_output.is_none());
        assert!(!config.json_report);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_negative_threshold() {
        let config = AuditConfig {
            fraud_threshold: -1.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidThreshold(-1.0)));
    }

    #[test]
    fn test_rejects_nan_threshold() {
        let config = AuditConfig {
            fraud_threshold: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidThreshold(_))
        ));
    }

    #[test]
    fn test_rejects_empty_input_path() {
        let config = AuditConfig {
            input_path: PathBuf::new(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyInputPath));
    }

    #[test]
    fn test_config_json_roundtrip_fields() {
        let json = r#"{
            "input_path": "ledger.csv",
            "fraud_threshold": 250.0,
            "top_n": 3,
            "dot_output": null,
            "json_report": true
        }"#;

        let config: AuditConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.input_path, PathBuf::from("ledger.csv"));
        assert_eq!(config.fraud_threshold, 250.0);
        assert_eq!(config.top_n, 3);
        assert!(config.json_report);
    }

    #[test]
    fn test_lookup_without_variables_keeps_defaults() {
        let config = AuditConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, AuditConfig::default());
    }

    #[test]
    fn test_lookup_applies_overrides() {
        let config = AuditConfig::from_lookup(lookup_from(&[
            ("LEDGER_INPUT", "ledger.csv"),
            ("LEDGER_FRAUD_THRESHOLD", "250.5"),
            ("LEDGER_TOP_N", "3"),
            ("LEDGER_DOT_OUTPUT", "graph.dot"),
            ("LEDGER_JSON_REPORT", "1"),
        ]));

        assert_eq!(config.input_path, PathBuf::from("ledger.csv"));
        assert_eq!(config.fraud_threshold, 250.5);
        assert_eq!(config.top_n, 3);
        assert_eq!(config.dot_output, Some(PathBuf::from("graph.dot")));
        assert!(config.json_report);
    }

    #[test]
    fn test_lookup_invalid_numbers_keep_defaults() {
        let config = AuditConfig::from_lookup(lookup_from(&[
            ("LEDGER_FRAUD_THRESHOLD", "lots"),
            ("LEDGER_TOP_N", "-2"),
        ]));

        assert_eq!(config.fraud_threshold, DEFAULT_FRAUD_THRESHOLD);
        assert_eq!(config.top_n, DEFAULT_TOP_N);
    }

    #[test]
    fn test_lookup_empty_dot_path_and_unknown_flag() {
        let config = AuditConfig::from_lookup(lookup_from(&[
            ("LEDGER_DOT_OUTPUT", ""),
            ("LEDGER_JSON_REPORT", "yes"),
        ]));

        assert!(config.dot_output.is_none());
        assert!(!config.json_report);
    }
}
