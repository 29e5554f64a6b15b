//! Configuration for the report endpoints
//!
//! Loads configuration from config.yml file; environment variables take
//! precedence over file values, compiled-in defaults fill the rest.

use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Default constants (fallback if config.yml not found)
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/reports";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Fixed document names published by the offline generators.
pub const CALL_REPORT_FILE: &str = "report.json";
pub const QUEUE_REPORT_FILE: &str = "queue_report.json";

pub const USER_AGENT: &str = "call_intel/0.1.0";

/// YAML config structures
#[derive(Debug, Deserialize)]
struct YamlConfig {
    dashboard: Option<DashboardSection>,
}

#[derive(Debug, Deserialize)]
struct DashboardSection {
    base_url: Option<String>,
    timeout_secs: Option<u64>,
    call_report_file: Option<String>,
    queue_report_file: Option<String>,
}

/// Main configuration struct
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub timeout_secs: u64,
    pub call_report_file: String,
    pub queue_report_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Load configuration from config.yml or use defaults.
    /// Environment variables take precedence over config.yml values.
    pub fn new() -> Self {
        Self::load_from_file("config.yml")
            .or_else(|_| Self::load_from_file("../config.yml"))
            .unwrap_or_else(|_| Self::defaults())
            .apply_env()
    }

    fn defaults() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            call_report_file: CALL_REPORT_FILE.to_string(),
            queue_report_file: QUEUE_REPORT_FILE.to_string(),
        }
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    fn from_yaml_str(content: &str) -> Result<Self> {
        let yaml: YamlConfig = serde_yaml::from_str(content)?;
        let defaults = Self::defaults();

        let Some(section) = yaml.dashboard else {
            return Ok(defaults);
        };

        Ok(Self {
            base_url: section.base_url.unwrap_or(defaults.base_url),
            timeout_secs: section.timeout_secs.unwrap_or(defaults.timeout_secs),
            call_report_file: section.call_report_file.unwrap_or(defaults.call_report_file),
            queue_report_file: section
                .queue_report_file
                .unwrap_or(defaults.queue_report_file),
        })
    }

    fn apply_env(mut self) -> Self {
        if let Ok(url) = env::var("REPORT_BASE_URL") {
            self.base_url = url;
        }
        if let Some(secs) = env::var("REPORT_TIMEOUT")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            self.timeout_secs = secs;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{LazyLock, Mutex};

    static ENV_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

    struct EnvGuard {
        key: String,
        original: Option<String>,
    }

    impl EnvGuard {
        fn set(key: &str, value: &str) -> Self {
            let original = std::env::var(key).ok();
            std::env::set_var(key, value);
            Self {
                key: key.to_string(),
                original,
            }
        }

        fn unset(key: &str) -> Self {
            let original = std::env::var(key).ok();
            std::env::remove_var(key);
            Self {
                key: key.to_string(),
                original,
            }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            match &self.original {
                Some(v) => std::env::set_var(&self.key, v),
                None => std::env::remove_var(&self.key),
            }
        }
    }

    #[test]
    fn defaults_cover_both_documents() {
        let cfg = Config::defaults();
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
        assert_eq!(cfg.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(cfg.call_report_file, "report.json");
        assert_eq!(cfg.queue_report_file, "queue_report.json");
    }

    #[test]
    fn from_yaml_str_reads_dashboard_section() {
        let cfg = Config::from_yaml_str(
            r#"
dashboard:
  base_url: "https://reports.example.com/intel"
  timeout_secs: 30
"#,
        )
        .unwrap();
        assert_eq!(cfg.base_url, "https://reports.example.com/intel");
        assert_eq!(cfg.timeout_secs, 30);
        // Unset keys fall back to defaults
        assert_eq!(cfg.call_report_file, CALL_REPORT_FILE);
    }

    #[test]
    fn from_yaml_str_without_section_uses_defaults() {
        let cfg = Config::from_yaml_str("other: 1\n").unwrap();
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn from_yaml_str_rejects_invalid_yaml() {
        assert!(Config::from_yaml_str("dashboard: [broken").is_err());
    }

    #[test]
    fn env_overrides_take_precedence() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _guards = [
            EnvGuard::set("REPORT_BASE_URL", "http://10.0.0.5:9000"),
            EnvGuard::set("REPORT_TIMEOUT", "3"),
        ];

        let cfg = Config::defaults().apply_env();
        assert_eq!(cfg.base_url, "http://10.0.0.5:9000");
        assert_eq!(cfg.timeout_secs, 3);
    }

    #[test]
    fn unparseable_timeout_env_is_ignored() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _guards = [
            EnvGuard::unset("REPORT_BASE_URL"),
            EnvGuard::set("REPORT_TIMEOUT", "soon"),
        ];

        let cfg = Config::defaults().apply_env();
        assert_eq!(cfg.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }
}
