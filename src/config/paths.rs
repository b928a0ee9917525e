use std::path::{Path, PathBuf};

use crate::constants::cache::{CACHE_DIR_NAME, CACHE_FILE_NAME};

/// Returns the platform-specific path for the config file.
///
/// # Returns
/// String containing the absolute path to the config file
///
/// # Notes
/// - Uses platform-specific config directory (e.g., ~/.config on Linux)
/// - Falls back to current directory if config directory is unavailable
pub fn get_config_path() -> String {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join("nba-games")
        .join("config.toml")
        .to_string_lossy()
        .to_string()
}

/// Returns the platform-specific path for the log directory.
///
/// # Returns
/// String containing the absolute path to the log directory
///
/// # Notes
/// - Uses platform-specific config directory (e.g., ~/.config on Linux)
/// - Falls back to current directory if config directory is unavailable
pub fn get_log_dir_path() -> String {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join("nba-games")
        .join("logs")
        .to_string_lossy()
        .to_string()
}

/// Returns the default path of the game cache file.
///
/// # Notes
/// - Uses the platform-specific data directory (e.g., ~/.local/share on
///   Linux), falling back to the current directory if unavailable
pub fn get_default_cache_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join(CACHE_DIR_NAME)
        .join(CACHE_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_structure() {
        let config_path = get_config_path();
        assert!(config_path.contains("nba-games"));
        assert!(config_path.ends_with("config.toml"));
    }

    #[test]
    fn test_log_dir_path_structure() {
        let log_dir_path = get_log_dir_path();
        assert!(log_dir_path.contains("nba-games"));
        assert!(log_dir_path.ends_with("logs"));
    }

    #[test]
    fn test_default_cache_path_structure() {
        let cache_path = get_default_cache_path();
        assert!(cache_path.ends_with("nba/games.json"));
    }
}
