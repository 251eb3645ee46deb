//! Client configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";
pub const DEFAULT_STATE_FILE: &str = ".press/state.json";

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend API root.
    pub api_base: String,
    /// Where the session entries are persisted.
    pub state_file: PathBuf,
    /// Emit JSON log lines instead of pretty ones.
    pub json_logs: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            state_file: PathBuf::from(DEFAULT_STATE_FILE),
            json_logs: false,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            api_base: lookup("PRESS_API_BASE")
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.api_base),
            state_file: lookup("PRESS_STATE_FILE")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.state_file),
            json_logs: lookup("LOG_FORMAT")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(defaults.json_logs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> ClientConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ClientConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]);
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.state_file, PathBuf::from(DEFAULT_STATE_FILE));
        assert!(!config.json_logs);
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("PRESS_API_BASE", "https://press.example.com/api"),
            ("PRESS_STATE_FILE", "/tmp/press.json"),
            ("LOG_FORMAT", "JSON"),
        ]);
        assert_eq!(config.api_base, "https://press.example.com/api");
        assert_eq!(config.state_file, PathBuf::from("/tmp/press.json"));
        assert!(config.json_logs);
    }

    #[test]
    fn test_empty_values_fall_back() {
        let config = config(&[("PRESS_API_BASE", ""), ("PRESS_STATE_FILE", "")]);
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.state_file, PathBuf::from(DEFAULT_STATE_FILE));
    }
}
