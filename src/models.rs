//! Typed game rows produced by the pipeline
//!
//! `GameRow` is what the table builder emits: the site's date text is kept
//! verbatim so the merger owns the coercion to a calendar date. `GameRecord`
//! is the cached form with the typed date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::scrape::PAGE_DATE_FORMAT;
use crate::error::AppError;

/// One row of the built game table, before date coercion.
///
/// Invariant: no field is an empty string; rows that would violate this are
/// discarded by the builder's completeness filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRow {
    /// Date text as it appears on the page, e.g. "Tue, Oct 16, 2018"
    pub date: String,
    /// Tip-off time, free-form text, e.g. "8:00p"
    pub time: String,
    pub away_team: String,
    pub away_points: u32,
    pub home_team: String,
    pub home_points: u32,
    pub away_city: String,
    pub home_city: String,
}

/// One row of the merged, persisted game cache.
///
/// Equality and hashing cover every field: deduplication is strictly
/// full-row identity, never a natural key. Two records differing only in
/// `time` are both kept.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameRecord {
    pub date: NaiveDate,
    pub time: String,
    pub away_team: String,
    pub away_points: u32,
    pub home_team: String,
    pub home_points: u32,
    pub away_city: String,
    pub home_city: String,
}

impl GameRow {
    /// Coerce the date text into a calendar date, producing the cached form.
    pub fn into_record(self) -> Result<GameRecord, AppError> {
        let date = NaiveDate::parse_from_str(&self.date, PAGE_DATE_FORMAT)
            .map_err(|_| AppError::date_parse(&self.date))?;
        Ok(GameRecord {
            date,
            time: self.time,
            away_team: self.away_team,
            away_points: self.away_points,
            home_team: self.home_team,
            home_points: self.home_points,
            away_city: self.away_city,
            home_city: self.home_city,
        })
    }
}
