// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Network configuration via `vizflow.yaml`.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::error::{NetworkError, Result};
use crate::core::logging::init_logging;
use crate::core::processors::Tags;

/// Evaluation behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationSettings {
    /// Recover from panics inside `process()` as processing failures.
    #[serde(default = "default_catch_panics")]
    pub catch_panics: bool,
}

fn default_catch_panics() -> bool {
    true
}

impl Default for EvaluationSettings {
    fn default() -> Self {
        Self {
            catch_panics: default_catch_panics(),
        }
    }
}

/// Logging defaults, overridden by `RUST_LOG`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

impl LoggingSettings {
    /// Install the global subscriber with this filter. See [`init_logging`].
    pub fn init(&self) -> bool {
        init_logging(&self.filter)
    }
}

/// Network configuration from `vizflow.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Tags processors may carry, e.g. `[CPU, GL]`. `None` accepts all.
    #[serde(default)]
    pub supported_tags: Option<Vec<String>>,

    #[serde(default)]
    pub evaluation: EvaluationSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

impl NetworkConfig {
    /// Configuration file name.
    pub const FILE_NAME: &'static str = "vizflow.yaml";

    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| NetworkError::Configuration(e.to_string()))
    }

    /// Load configuration from a directory. Returns error if file is missing
    /// or cannot be parsed.
    pub fn load(project_path: &Path) -> Result<Self> {
        let config_path = project_path.join(Self::FILE_NAME);

        let content = std::fs::read_to_string(&config_path).map_err(|e| {
            NetworkError::Configuration(format!(
                "Failed to read {}: {}",
                config_path.display(),
                e
            ))
        })?;

        let config: Self = serde_yaml::from_str(&content).map_err(|e| {
            NetworkError::Configuration(format!(
                "Failed to parse {}: {}",
                config_path.display(),
                e
            ))
        })?;

        tracing::info!("Loaded network config from {}", config_path.display());
        Ok(config)
    }

    /// Load configuration from a directory, returning defaults if the file is
    /// missing or unparseable.
    pub fn load_or_default(project_path: &Path) -> Self {
        let config_path = project_path.join(Self::FILE_NAME);

        if !config_path.exists() {
            tracing::debug!(
                "No {} found in {}, using defaults",
                Self::FILE_NAME,
                project_path.display()
            );
            return Self::default();
        }

        match Self::load(project_path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Tags in `tags` this configuration does not support.
    pub fn unsupported_tags<'a>(&self, tags: &'a Tags) -> Vec<&'a str> {
        match &self.supported_tags {
            Some(supported) => tags.unsupported(supported),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = NetworkConfig::default();
        assert!(config.supported_tags.is_none());
        assert!(config.evaluation.catch_panics);
        assert_eq!(config.logging.filter, "info");
        assert!(config.unsupported_tags(&Tags::gl()).is_empty());
    }

    #[test]
    fn test_partial_yaml() {
        let config = NetworkConfig::from_yaml("supported_tags: [CPU]\n").unwrap();
        assert!(config.unsupported_tags(&Tags::new().with("cpu")).is_empty());
        assert_eq!(config.unsupported_tags(&Tags::cpu().with("GL")), vec!["GL"]);
        assert!(config.evaluation.catch_panics);
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(matches!(
            NetworkConfig::from_yaml("evaluation: [not, a, map]"),
            Err(NetworkError::Configuration(_))
        ));
    }
}
