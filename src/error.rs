use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to fetch page: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Malformed page structure: {message} (URL: {url})")]
    PageStructure { message: String, url: String },

    #[error("No games found for seasons {season_min}-{season_max}")]
    NoGames { season_min: i32, season_max: i32 },

    #[error("Unparseable date cell: {value:?}")]
    DateParse { value: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cache (de)serialization error: {0}")]
    CacheFormat(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create a malformed-page error with context
    pub fn page_structure(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::PageStructure {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a date parse error for the offending cell value
    pub fn date_parse(value: impl Into<String>) -> Self {
        Self::DateParse {
            value: value.into(),
        }
    }

    /// Create an empty-result error for a season range
    pub fn no_games(season_min: i32, season_max: i32) -> Self {
        Self::NoGames {
            season_min,
            season_max,
        }
    }
}
