//! URL building utilities for the statistics site

/// Builds the URL of one season-month schedule page.
///
/// # Arguments
/// * `base_url` - The site's base URL, without a trailing slash
/// * `season` - The season, identified by its ending calendar year
/// * `month` - Lowercase month name from the fixed season month list
///
/// # Returns
/// * `String` - The complete page URL
///
/// # Example
/// ```
/// use nba_games::scrape::build_month_url;
///
/// let url = build_month_url("https://www.basketball-reference.com", 2018, "october");
/// assert_eq!(
///     url,
///     "https://www.basketball-reference.com/leagues/NBA_2018_games-october.html"
/// );
/// ```
pub fn build_month_url(base_url: &str, season: i32, month: &str) -> String {
    format!("{base_url}/leagues/NBA_{season}_games-{month}.html")
}
