//! Fetching and normalizing schedule tables from the statistics site
//!
//! The pipeline is a chain of explicit stages: [`html::fetch_table`] pulls
//! one month page into a [`crate::table::RawTable`], [`seasons::SeasonGames`]
//! lazily walks a season range one month at a time, and
//! [`builder::build_game_table`] consolidates the yielded tables into typed
//! game rows.

pub mod builder;
pub mod html;
pub mod http_client;
pub mod seasons;
pub mod urls;

pub use builder::{build_game_table, pull_games, split_team};
pub use html::{fetch_table, parse_table};
pub use http_client::create_http_client;
pub use seasons::SeasonGames;
pub use urls::build_month_url;
