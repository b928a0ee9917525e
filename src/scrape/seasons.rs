//! Lazy iteration over the month pages of a season range

use std::thread;
use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, info};

use crate::constants::scrape::{NBA_SEASON_MONTHS, REQUEST_DELAY_SECONDS, SCHEDULE_TABLE_ID};
use crate::error::AppError;
use crate::scrape::html::fetch_table;
use crate::scrape::urls::build_month_url;
use crate::table::RawTable;

/// Lazy, single-pass iterator over the schedule tables of an inclusive
/// season range.
///
/// For every season in `[season_min, season_max]` and every month of the
/// fixed season month list, one page is fetched. Months without a schedule
/// table are skipped silently; transport and structure errors are yielded
/// and end the iteration for the caller. Tables come out in chronological
/// order: season ascending, months in season order.
///
/// A fixed delay follows every page request regardless of outcome, to stay
/// within the site's acceptable usage pattern.
pub struct SeasonGames<'a> {
    client: &'a Client,
    base_url: String,
    season: i32,
    season_max: i32,
    month_index: usize,
}

impl<'a> SeasonGames<'a> {
    /// Iterate the schedule tables of `[season_min, season_max]`.
    /// An inverted range yields nothing.
    pub fn new(client: &'a Client, base_url: &str, season_min: i32, season_max: i32) -> Self {
        SeasonGames {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            season: season_min,
            season_max,
            month_index: 0,
        }
    }
}

impl Iterator for SeasonGames<'_> {
    type Item = Result<RawTable, AppError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.season > self.season_max {
                return None;
            }
            if self.month_index == 0 {
                info!("updating {} season", self.season);
            }

            let month = NBA_SEASON_MONTHS[self.month_index];
            let url = build_month_url(&self.base_url, self.season, month);

            self.month_index += 1;
            if self.month_index == NBA_SEASON_MONTHS.len() {
                self.month_index = 0;
                self.season += 1;
            }

            let fetched = fetch_table(self.client, &url, SCHEDULE_TABLE_ID, true);
            thread::sleep(Duration::from_secs(REQUEST_DELAY_SECONDS));

            match fetched {
                Ok(Some(table)) => return Some(Ok(table)),
                Ok(None) => {
                    debug!("no schedule table at {url}, skipping");
                    continue;
                }
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrape::http_client::create_http_client;

    #[test]
    fn test_inverted_range_yields_nothing() {
        let client = create_http_client(1).unwrap();
        // next() bails out before any fetch, so no network is touched
        let mut games = SeasonGames::new(&client, "https://example.invalid", 2019, 2018);
        assert!(games.next().is_none());
    }

    #[test]
    fn test_base_url_trailing_slash_is_tolerated() {
        let client = create_http_client(1).unwrap();
        let games = SeasonGames::new(&client, "https://example.invalid/", 2019, 2018);
        assert_eq!(games.base_url, "https://example.invalid");
    }
}
