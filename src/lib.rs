//! NBA game schedule and score scraper
//!
//! This library pulls historical NBA game schedules and final scores from
//! basketball-reference.com, normalizes the HTML schedule tables into typed
//! game records, and maintains a deduplicated, chronologically sorted cache
//! of every game seen across runs.
//!
//! The cache is never loaded implicitly. Code that wants the current
//! snapshot opens the store and loads it explicitly:
//!
//! ```rust,no_run
//! use nba_games::error::AppError;
//! use nba_games::store::GameStore;
//!
//! fn main() -> Result<(), AppError> {
//!     let store = GameStore::open_default();
//!     let games = store.load()?;
//!     println!("{} cached games", games.len());
//!     Ok(())
//! }
//! ```
//!
//! Pulling fresh data is one call:
//!
//! ```rust,no_run
//! use nba_games::config::Config;
//! use nba_games::error::AppError;
//! use nba_games::scrape::create_http_client;
//! use nba_games::store::GameStore;
//! use nba_games::update::update_games;
//!
//! fn main() -> Result<(), AppError> {
//!     let config = Config::load()?;
//!     let client = create_http_client(config.http_timeout_seconds)?;
//!     let store = GameStore::new(config.cache_path());
//!     update_games(&client, &config, &store, 2018, 2018, false)?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod models;
pub mod scrape;
pub mod store;
pub mod table;
pub mod update;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::AppError;
pub use models::{GameRecord, GameRow};
pub use scrape::{build_game_table, parse_table, pull_games};
pub use store::GameStore;
pub use table::RawTable;
pub use update::update_games;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
