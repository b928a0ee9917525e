//! Application-wide constants and configuration values
//!
//! This module centralizes the scrape target description and other magic
//! values so the rest of the codebase stays free of inline literals.

/// Default base URL of the statistics site the schedules are pulled from
pub const DEFAULT_BASE_URL: &str = "https://www.basketball-reference.com";

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Scrape pacing and page-structure constants
pub mod scrape {
    /// Fixed delay after every page request in seconds. This is a hard,
    /// self-imposed rate limit, not a tuning knob.
    pub const REQUEST_DELAY_SECONDS: u64 = 1;

    /// Element id of the schedule table on every month page
    pub const SCHEDULE_TABLE_ID: &str = "schedule";

    /// Months of an NBA season, in the order they occur. Season pages only
    /// exist for these months.
    pub const NBA_SEASON_MONTHS: [&str; 9] = [
        "october",
        "november",
        "december",
        "january",
        "february",
        "march",
        "april",
        "may",
        "june",
    ];

    /// Positional indexes of the schedule columns that carry no
    /// normalizable data (box-score link, OT flag, attendance, notes)
    pub const DROPPED_COLUMNS: [usize; 4] = [6, 7, 8, 9];

    /// Date format used on the month pages, e.g. "Tue, Oct 16, 2018"
    pub const PAGE_DATE_FORMAT: &str = "%a, %b %d, %Y";
}

/// Cache file layout
pub mod cache {
    /// Directory under the per-user data dir that holds the cache
    pub const CACHE_DIR_NAME: &str = "nba";

    /// File name of the serialized game cache
    pub const CACHE_FILE_NAME: &str = "games.json";
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for base URL override
    pub const BASE_URL: &str = "NBA_GAMES_BASE_URL";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "NBA_GAMES_LOG_FILE";

    /// Environment variable for HTTP timeout in seconds
    pub const HTTP_TIMEOUT: &str = "NBA_GAMES_HTTP_TIMEOUT";

    /// Environment variable for cache directory override
    pub const CACHE_DIR: &str = "NBA_GAMES_CACHE_DIR";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_list_covers_a_season_in_order() {
        let months = scrape::NBA_SEASON_MONTHS;
        assert_eq!(months.len(), 9);
        assert_eq!(months[0], "october");
        assert_eq!(months[8], "june");
        // Page URLs are built from these verbatim, so they must be lowercase
        for month in months {
            assert_eq!(month, month.to_lowercase());
        }
    }

    #[test]
    fn test_dropped_columns_leave_six() {
        // The schedule table has 10 columns; dropping 4 must leave the 6
        // that get canonical names
        assert_eq!(scrape::DROPPED_COLUMNS.len(), 4);
        assert!(scrape::DROPPED_COLUMNS.iter().all(|&i| i < 10));
    }

    #[test]
    fn test_env_var_names_are_not_empty() {
        assert!(!env_vars::BASE_URL.is_empty());
        assert!(!env_vars::LOG_FILE.is_empty());
        assert!(!env_vars::HTTP_TIMEOUT.is_empty());
        assert!(!env_vars::CACHE_DIR.is_empty());
    }
}
