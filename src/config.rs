//! Chaincode configuration
//!
//! Loaded from a JSON file. Every field is optional; an empty object yields
//! the defaults. The scan window, key prefix and record type marker are part
//! of the ledger contract and have no setting here.

use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::api::DEFAULT_CHAINCODE_NAME;
use crate::observability::{DiscardSink, LogSink, Logger, Severity, StderrSink, StdoutSink};

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

impl ConfigError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "CONFIG_IO",
            Self::Parse(_) => "CONFIG_PARSE",
            Self::Invalid(_) => "CONFIG_INVALID",
        }
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Where structured log lines are written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogTarget {
    #[default]
    Stdout,
    Stderr,
    Discard,
}

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChaincodeConfig {
    /// Chaincode name reported in logs (default "rollbook")
    #[serde(default = "default_name")]
    pub name: String,

    /// Minimum severity emitted (default info)
    #[serde(default = "default_log_level")]
    pub log_level: Severity,

    /// Log destination (default stdout)
    #[serde(default)]
    pub log_target: LogTarget,

    /// Include invocation arguments in the INVOKE_RECEIVED line (default true)
    #[serde(default = "default_trace_arguments")]
    pub trace_arguments: bool,
}

fn default_name() -> String {
    DEFAULT_CHAINCODE_NAME.to_string()
}
fn default_log_level() -> Severity {
    Severity::Info
}
fn default_trace_arguments() -> bool {
    true
}

impl Default for ChaincodeConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            log_level: default_log_level(),
            log_target: LogTarget::default(),
            trace_arguments: default_trace_arguments(),
        }
    }
}

impl ChaincodeConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Parse and validate configuration text
    pub fn from_json(content: &str) -> ConfigResult<Self> {
        let config: ChaincodeConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.name.is_empty() {
            return Err(ConfigError::Invalid("name must not be empty".into()));
        }
        if self.name.chars().any(char::is_whitespace) {
            return Err(ConfigError::Invalid(format!(
                "name must not contain whitespace: '{}'",
                self.name
            )));
        }
        Ok(())
    }

    /// Build the logger described by `log_target` and `log_level`
    pub fn logger(&self) -> Logger {
        let sink: Arc<dyn LogSink> = match self.log_target {
            LogTarget::Stdout => Arc::new(StdoutSink),
            LogTarget::Stderr => Arc::new(StderrSink),
            LogTarget::Discard => Arc::new(DiscardSink),
        };
        Logger::new(sink, self.log_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_object_yields_defaults() {
        let config = ChaincodeConfig::from_json("{}").unwrap();
        assert_eq!(config, ChaincodeConfig::default());
        assert_eq!(config.name, "rollbook");
        assert_eq!(config.log_level, Severity::Info);
        assert_eq!(config.log_target, LogTarget::Stdout);
        assert!(config.trace_arguments);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"name":"grades","log_level":"warn","log_target":"discard","trace_arguments":false}}"#
        )
        .unwrap();

        let config = ChaincodeConfig::load(file.path()).unwrap();
        assert_eq!(config.name, "grades");
        assert_eq!(config.log_level, Severity::Warn);
        assert_eq!(config.log_target, LogTarget::Discard);
        assert!(!config.trace_arguments);

        let logger = config.logger();
        assert_eq!(logger.min_severity(), Severity::Warn);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ChaincodeConfig::load(&dir.path().join("absent.json")).unwrap_err();
        assert_eq!(err.code(), "CONFIG_IO");
    }

    #[test]
    fn test_malformed_json() {
        let err = ChaincodeConfig::from_json("{name:").unwrap_err();
        assert_eq!(err.code(), "CONFIG_PARSE");
    }

    #[test]
    fn test_unknown_log_level_rejected() {
        let err = ChaincodeConfig::from_json(r#"{"log_level":"verbose"}"#).unwrap_err();
        assert_eq!(err.code(), "CONFIG_PARSE");
    }

    #[test]
    fn test_invalid_names() {
        let err = ChaincodeConfig::from_json(r#"{"name":""}"#).unwrap_err();
        assert_eq!(err.code(), "CONFIG_INVALID");

        let err = ChaincodeConfig::from_json(r#"{"name":"student records"}"#).unwrap_err();
        assert_eq!(err.code(), "CONFIG_INVALID");
    }
}
