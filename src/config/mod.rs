use crate::constants::{self, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub mod paths;

use paths::{get_config_path, get_log_dir_path};

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Base URL of the statistics site. Should include the https:// prefix.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path to the log file. If not specified, logs go to the default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// Directory holding the game cache file. If not specified, the
    /// platform data directory is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_dir: Option<String>,
    /// HTTP timeout in seconds for page requests. Defaults to 30 seconds.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
}

fn default_base_url() -> String {
    constants::DEFAULT_BASE_URL.to_string()
}

/// Default HTTP timeout in seconds
fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: default_base_url(),
            log_file_path: None,
            cache_dir: None,
            http_timeout_seconds: default_http_timeout(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// A missing config file is not an error: the site URL has a sensible
    /// default, so defaults are used instead. Environment variables override
    /// config file values.
    ///
    /// # Environment Variables
    /// - `NBA_GAMES_BASE_URL` - Override base URL
    /// - `NBA_GAMES_LOG_FILE` - Override log file path
    /// - `NBA_GAMES_CACHE_DIR` - Override cache directory
    /// - `NBA_GAMES_HTTP_TIMEOUT` - Override HTTP timeout in seconds
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded or defaulted configuration
    /// * `Err(AppError)` - Config file exists but could not be read or parsed
    pub fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            let content = fs::read_to_string(&config_path)?;
            toml::from_str(&content)?
        } else {
            Config::default()
        };

        // Override with environment variables if present
        if let Ok(base_url) = std::env::var(env_vars::BASE_URL) {
            config.base_url = base_url;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            config.log_file_path = Some(log_file_path);
        }

        if let Ok(cache_dir) = std::env::var(env_vars::CACHE_DIR) {
            config.cache_dir = Some(cache_dir);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            config.http_timeout_seconds = timeout;
        }

        config.validate()?;

        Ok(config)
    }

    /// Validates the configuration settings
    ///
    /// # Returns
    /// * `Ok(())` - Configuration is valid
    /// * `Err(AppError)` - Configuration validation failed
    pub fn validate(&self) -> Result<(), AppError> {
        if self.base_url.is_empty() {
            return Err(AppError::config_error("base_url must not be empty"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(AppError::config_error(format!(
                "base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }
        if let Some(path) = &self.log_file_path
            && path.is_empty()
        {
            return Err(AppError::config_error("log_file_path must not be empty"));
        }
        if let Some(dir) = &self.cache_dir
            && dir.is_empty()
        {
            return Err(AppError::config_error("cache_dir must not be empty"));
        }
        Ok(())
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// # Notes
    /// - Shows config file location and current settings
    /// - Handles the case when no config file exists (defaults shown)
    pub fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        let config = Config::load()?;
        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        if Path::new(&config_path).exists() {
            println!("{config_path}");
        } else {
            println!("{config_path} (not present, defaults in use)");
        }
        println!("────────────────────────────────────");
        println!("Base URL:");
        println!("{}", config.base_url);
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        println!("{} seconds", config.http_timeout_seconds);
        println!("────────────────────────────────────");
        println!("Cache File:");
        println!("{}", config.cache_path().display());
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/nba-games.log");
            println!("(Default location)");
        }

        Ok(())
    }

    /// Resolved path of the game cache file: either inside the configured
    /// cache directory or at the platform default.
    pub fn cache_path(&self) -> std::path::PathBuf {
        match &self.cache_dir {
            Some(dir) => Path::new(dir).join(crate::constants::cache::CACHE_FILE_NAME),
            None => paths::get_default_cache_path(),
        }
    }

    /// Saves configuration to a custom file path, creating parent
    /// directories as needed.
    ///
    /// # Returns
    /// * `Ok(())` - Successfully saved configuration
    /// * `Err(AppError)` - Error occurred while saving
    pub fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Loads configuration from a custom file path (for testing).
    #[allow(dead_code)] // Used in tests
    pub fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.base_url, constants::DEFAULT_BASE_URL);
        assert_eq!(
            config.http_timeout_seconds,
            constants::DEFAULT_HTTP_TIMEOUT_SECONDS
        );
        assert!(config.log_file_path.is_none());
        assert!(config.cache_dir.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_load_existing_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let config_content = r#"
base_url = "https://mirror.example.com"
log_file_path = "/custom/log/path"
"#;
        fs::write(&config_path, config_content).unwrap();

        let config = Config::load_from_path(&config_path_str).unwrap();

        assert_eq!(config.base_url, "https://mirror.example.com");
        assert_eq!(config.log_file_path, Some("/custom/log/path".to_string()));
        // Fields absent from the file fall back to defaults
        assert_eq!(
            config.http_timeout_seconds,
            constants::DEFAULT_HTTP_TIMEOUT_SECONDS
        );
    }

    #[test]
    fn test_config_save_and_load_roundtrip() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let original = Config {
            base_url: "https://mirror.example.com".to_string(),
            log_file_path: Some("/custom/log/path".to_string()),
            cache_dir: Some("/var/cache/nba".to_string()),
            http_timeout_seconds: 10,
        };
        original.save_to_path(&config_path_str).unwrap();
        assert!(config_path.exists());

        let loaded = Config::load_from_path(&config_path_str).unwrap();
        assert_eq!(loaded.base_url, original.base_url);
        assert_eq!(loaded.log_file_path, original.log_file_path);
        assert_eq!(loaded.cache_dir, original.cache_dir);
        assert_eq!(loaded.http_timeout_seconds, 10);
    }

    #[test]
    fn test_config_serialization_skips_absent_options() {
        let config = Config::default();
        let toml_string = toml::to_string_pretty(&config).unwrap();
        assert!(!toml_string.contains("log_file_path"));
        assert!(!toml_string.contains("cache_dir"));
    }

    #[test]
    fn test_config_validation_rejects_bad_base_url() {
        let mut config = Config::default();
        config.base_url = String::new();
        assert!(config.validate().is_err());

        config.base_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());

        config.base_url = "https://example.com".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_rejects_empty_paths() {
        let mut config = Config::default();
        config.log_file_path = Some(String::new());
        assert!(config.validate().is_err());

        config.log_file_path = None;
        config.cache_dir = Some(String::new());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_cache_path_uses_configured_dir() {
        let mut config = Config::default();
        config.cache_dir = Some("/var/cache/nba".to_string());
        assert_eq!(
            config.cache_path(),
            Path::new("/var/cache/nba").join("games.json")
        );
    }

    #[test]
    fn test_config_malformed_toml_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("malformed_config.toml");
        let config_path_str = config_path.to_string_lossy();

        let malformed_content = r#"
base_url = "https://example.com"
[invalid_section
malformed = "data
"#;
        fs::write(&config_path, malformed_content).unwrap();

        let result = Config::load_from_path(&config_path_str);
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), AppError::TomlDeserialize(_)));
    }

    #[test]
    #[serial]
    fn test_environment_variable_override() {
        unsafe {
            std::env::set_var(env_vars::BASE_URL, "https://env.example.com");
            std::env::set_var(env_vars::HTTP_TIMEOUT, "7");
        }

        let config = Config::load().unwrap();
        assert_eq!(config.base_url, "https://env.example.com");
        assert_eq!(config.http_timeout_seconds, 7);

        unsafe {
            std::env::remove_var(env_vars::BASE_URL);
            std::env::remove_var(env_vars::HTTP_TIMEOUT);
        }
    }
}
