//! Consolidation of monthly schedule tables into typed game rows

use reqwest::blocking::Client;

use crate::config::Config;
use crate::constants::scrape::DROPPED_COLUMNS;
use crate::error::AppError;
use crate::models::GameRow;
use crate::scrape::seasons::SeasonGames;
use crate::table::RawTable;

/// Canonical names of the six columns that survive the positional drop,
/// in page order.
pub const GAME_COLUMNS: [&str; 6] = [
    "date",
    "time",
    "away_team",
    "away_points",
    "home_team",
    "home_points",
];

/// Pulls and consolidates all games of an inclusive season range.
///
/// Drains the season iterator for `[season_min, season_max]` and feeds every
/// yielded table to [`build_game_table`]. The first fetch error aborts.
pub fn pull_games(
    client: &Client,
    config: &Config,
    season_min: i32,
    season_max: i32,
) -> Result<Vec<GameRow>, AppError> {
    let mut tables = Vec::new();
    for table in SeasonGames::new(client, &config.base_url, season_min, season_max) {
        tables.push(table?);
    }
    build_game_table(tables, season_min, season_max)
}

/// Consolidates monthly schedule tables into one list of game rows.
///
/// Stacks all tables, drops the four columns that carry no normalizable
/// data, assigns canonical column names, splits each team into city and
/// team name, and discards every row with a missing value. An empty input
/// is an error: there is nothing to concatenate.
pub fn build_game_table(
    tables: Vec<RawTable>,
    season_min: i32,
    season_max: i32,
) -> Result<Vec<GameRow>, AppError> {
    let mut table =
        RawTable::concat(tables).ok_or_else(|| AppError::no_games(season_min, season_max))?;

    table.drop_columns(&DROPPED_COLUMNS);
    table.set_columns(GAME_COLUMNS.iter().map(|c| c.to_string()).collect());

    let games = table
        .rows()
        .iter()
        .filter_map(|row| game_from_row(row))
        .collect();

    Ok(games)
}

/// Builds one game row from the six canonical cells, or `None` if any cell
/// is missing. An empty cell, a point cell that is not an integer, and a
/// team cell with nothing to split all count as missing.
fn game_from_row(row: &[String]) -> Option<GameRow> {
    let cell = |i: usize| row.get(i).map(String::as_str).unwrap_or("");

    let date = cell(0);
    let time = cell(1);
    if date.is_empty() || time.is_empty() {
        return None;
    }

    let away_points: u32 = cell(3).parse().ok()?;
    let home_points: u32 = cell(5).parse().ok()?;
    let (away_city, away_team) = split_team(cell(2))?;
    let (home_city, home_team) = split_team(cell(4))?;

    Some(GameRow {
        date: date.to_string(),
        time: time.to_string(),
        away_team,
        away_points,
        home_team,
        home_points,
        away_city,
        home_city,
    })
}

/// Splits a full team name into (city, team name) at the last whitespace
/// boundary. Names with no whitespace cannot be split and yield `None`.
///
/// Every franchise name follows the pattern `<city> <team-name>` with a
/// single-word team name, except the Portland Trail Blazers.
pub fn split_team(full: &str) -> Option<(String, String)> {
    if full == "Portland Trail Blazers" {
        return Some(("Portland".to_string(), "Trail Blazers".to_string()));
    }
    let (city, team) = full.rsplit_once(' ')?;
    Some((city.to_string(), team.to_string()))
}
