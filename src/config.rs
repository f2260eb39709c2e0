//! Runtime configuration from the environment.
//!
//! Environment variables:
//! - `LYSK_CP_BIND` - server bind address (default: `127.0.0.1:3000`)
//! - `LYSK_CP_WORKERS` - batch worker threads, 0 for all cores (default: 0)
//! - `LYSK_CP_LOG_JSON` - emit JSON log lines when truthy (default: off)

use std::env;

pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: String,
    pub workers: usize,
    pub log_json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND.to_string(),
            workers: 0,
            log_json: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. Unparseable values keep
    /// their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(bind) = lookup("LYSK_CP_BIND").filter(|bind| !bind.trim().is_empty()) {
            config.bind_addr = bind.trim().to_string();
        }
        if let Some(workers) = lookup("LYSK_CP_WORKERS").and_then(|raw| raw.trim().parse().ok()) {
            config.workers = workers;
        }
        if let Some(raw) = lookup("LYSK_CP_LOG_JSON") {
            config.log_json = is_truthy(&raw);
        }
        config
    }
}

fn is_truthy(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        assert_eq!(config(&[]), AppConfig::default());
        assert_eq!(AppConfig::default().bind_addr, "127.0.0.1:3000");
    }

    #[test]
    fn reads_overrides() {
        let config = config(&[
            ("LYSK_CP_BIND", "0.0.0.0:8080"),
            ("LYSK_CP_WORKERS", "4"),
            ("LYSK_CP_LOG_JSON", "TRUE"),
        ]);
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.workers, 4);
        assert!(config.log_json);
    }

    #[test]
    fn bad_values_keep_defaults() {
        let config = config(&[("LYSK_CP_WORKERS", "many"), ("LYSK_CP_LOG_JSON", "nope")]);
        assert_eq!(config.workers, 0);
        assert!(!config.log_json);
    }
}
