//! Cache merging: union the fresh pull with the cached games and persist
//!
//! The cache write happens once, at the very end, on the full merged table.
//! An interrupted run therefore persists nothing; the cache only ever moves
//! from one complete state to the next.

use std::collections::HashSet;

use reqwest::blocking::Client;
use tracing::info;

use crate::config::Config;
use crate::error::AppError;
use crate::models::{GameRecord, GameRow};
use crate::scrape::builder::pull_games;
use crate::store::GameStore;

/// Pulls the requested season range, merges it with the cached games and
/// persists the result.
///
/// With `rebuild` set, or when no cache exists yet, the fresh pull alone
/// becomes the new cache. Otherwise the cached games are loaded and the
/// fresh ones appended before deduplication.
///
/// The merged table is printed to stdout for operator visibility and then
/// written back through the store, replacing any prior content.
pub fn update_games(
    client: &Client,
    config: &Config,
    store: &GameStore,
    start: i32,
    stop: i32,
    rebuild: bool,
) -> Result<Vec<GameRecord>, AppError> {
    let rows = pull_games(client, config, start, stop)?;
    let fresh = coerce_records(rows)?;

    let cached = if !rebuild && store.exists() {
        Some(store.load()?)
    } else {
        None
    };

    let games = merge_records(cached, fresh);

    print_games(&games);
    store.save(&games)?;
    info!(
        "cache now holds {} games at {}",
        games.len(),
        store.path().display()
    );

    Ok(games)
}

/// Coerces built rows into cache records by parsing the page's date text.
pub fn coerce_records(rows: Vec<GameRow>) -> Result<Vec<GameRecord>, AppError> {
    rows.into_iter().map(GameRow::into_record).collect()
}

/// Merges cached and fresh records into the final table: duplicates out,
/// sorted by date, duplicates out again.
///
/// Both passes remove exact full-row duplicates only and keep the first
/// occurrence; the sort is stable, so ties keep their input order.
pub fn merge_records(
    cached: Option<Vec<GameRecord>>,
    fresh: Vec<GameRecord>,
) -> Vec<GameRecord> {
    let mut games = match cached {
        Some(mut cached) => {
            cached.extend(fresh);
            cached
        }
        None => fresh,
    };

    dedup_full_rows(&mut games);
    games.sort_by_key(|game| game.date);
    dedup_full_rows(&mut games);
    games
}

/// Removes exact full-row duplicates, keeping the first occurrence.
/// Identity covers every field; there is deliberately no natural-key
/// (date + teams) deduplication.
fn dedup_full_rows(games: &mut Vec<GameRecord>) {
    let mut seen = HashSet::with_capacity(games.len());
    games.retain(|game| seen.insert(game.clone()));
}

/// Prints the merged table in aligned columns.
fn print_games(games: &[GameRecord]) {
    let away_width = column_width(games, |g| g.away_city.len() + 1 + g.away_team.len());
    let home_width = column_width(games, |g| g.home_city.len() + 1 + g.home_team.len());
    let time_width = column_width(games, |g| g.time.len());

    for game in games {
        let away = format!("{} {}", game.away_city, game.away_team);
        let home = format!("{} {}", game.home_city, game.home_team);
        println!(
            "{}  {:>time_width$}  {:<away_width$} {:>3}  @  {:<home_width$} {:>3}",
            game.date, game.time, away, game.away_points, home, game.home_points
        );
    }
    println!("{} games", games.len());
}

fn column_width<F>(games: &[GameRecord], measure: F) -> usize
where
    F: Fn(&GameRecord) -> usize,
{
    games.iter().map(measure).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(day: u32, time: &str) -> GameRecord {
        GameRecord {
            date: NaiveDate::from_ymd_opt(2018, 10, day).unwrap(),
            time: time.to_string(),
            away_team: "76ers".to_string(),
            away_points: 87,
            home_team: "Celtics".to_string(),
            home_points: 105,
            away_city: "Philadelphia".to_string(),
            home_city: "Boston".to_string(),
        }
    }

    #[test]
    fn test_merge_unions_and_dedups_exactly() {
        // Cache of 3, pull reproducing 2 of them plus 2 new: 3 + 2 rows
        let cached = vec![record(16, "8:00p"), record(17, "8:00p"), record(18, "8:00p")];
        let fresh = vec![
            record(16, "8:00p"),
            record(17, "8:00p"),
            record(19, "8:00p"),
            record(20, "8:00p"),
        ];

        let merged = merge_records(Some(cached), fresh);
        assert_eq!(merged.len(), 5);
    }

    #[test]
    fn test_merge_is_idempotent() {
        let cached = vec![record(16, "8:00p"), record(17, "8:00p")];
        let fresh = cached.clone();

        let once = merge_records(Some(cached.clone()), fresh.clone());
        let twice = merge_records(Some(once.clone()), fresh);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_merge_sorts_by_date_ascending() {
        let fresh = vec![record(20, "8:00p"), record(16, "8:00p"), record(18, "8:00p")];
        let merged = merge_records(None, fresh);

        for pair in merged.windows(2) {
            assert!(pair[0].date <= pair[1].date);
        }
    }

    #[test]
    fn test_merge_sort_is_stable_for_equal_dates() {
        // Same date, different times: not duplicates, and their relative
        // input order must survive the sort
        let a = record(16, "7:00p");
        let b = record(16, "9:30p");
        let merged = merge_records(None, vec![a.clone(), b.clone()]);
        assert_eq!(merged, vec![a, b]);
    }

    #[test]
    fn test_merge_keeps_time_only_variants() {
        // Full-row identity only: two rows differing only in the time
        // field both survive
        let merged = merge_records(
            Some(vec![record(16, "7:00p")]),
            vec![record(16, "8:00p")],
        );
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_coerce_records_parses_page_dates() {
        let rows = vec![GameRow {
            date: "Wed, Oct 17, 2018".to_string(),
            time: "7:30p".to_string(),
            away_team: "Bulls".to_string(),
            away_points: 104,
            home_team: "Pistons".to_string(),
            home_points: 118,
            away_city: "Chicago".to_string(),
            home_city: "Detroit".to_string(),
        }];
        let records = coerce_records(rows).unwrap();
        assert_eq!(
            records[0].date,
            NaiveDate::from_ymd_opt(2018, 10, 17).unwrap()
        );
    }

    #[test]
    fn test_coerce_records_propagates_bad_dates() {
        let rows = vec![GameRow {
            date: "not a date".to_string(),
            time: "7:30p".to_string(),
            away_team: "Bulls".to_string(),
            away_points: 104,
            home_team: "Pistons".to_string(),
            home_points: 118,
            away_city: "Chicago".to_string(),
            home_city: "Detroit".to_string(),
        }];
        assert!(matches!(
            coerce_records(rows),
            Err(AppError::DateParse { .. })
        ));
    }
}
