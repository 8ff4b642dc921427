use std::path::PathBuf;

use crate::pipeline::openai::DEFAULT_BASE_URL;

pub const APP_NAME: &str = "minuteplan";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Completion model used for both extraction calls.
pub const DEFAULT_MODEL: &str = "gpt-4o-2024-08-06";

/// Output file naming.
pub const FILENAME_PREFIX: &str = "Project_Items";
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Request timeout for completion calls.
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

pub fn default_log_filter() -> &'static str {
    "minuteplan=info"
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub output_dir: PathBuf,
    pub timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            output_dir: PathBuf::from("."),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl AppConfig {
    /// Build configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_key: std::env::var("OPENAI_API_KEY").unwrap_or(defaults.api_key),
            base_url: std::env::var("OPENAI_BASE_URL").unwrap_or(defaults.base_url),
            model: std::env::var("OPENAI_MODEL").unwrap_or(defaults.model),
            output_dir: std::env::var("MINUTES_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
            timeout_secs: std::env::var("OPENAI_TIMEOUT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.timeout_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_openai() {
        let config = AppConfig::default();
        assert_eq!(config.base_url, "https://api.openai.com/v1");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert!(config.api_key.is_empty());
        assert_eq!(config.output_dir, PathBuf::from("."));
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.3.0");
    }

    #[test]
    fn timestamp_format_is_filename_safe() {
        assert!(!TIMESTAMP_FORMAT.contains(' '));
        assert!(!TIMESTAMP_FORMAT.contains(':'));
    }
}
