//! Extraction of one named table from a fetched HTML page
//!
//! The source site wraps some of its tables in HTML comments so they are
//! invisible to naive parsers. Stripping only the comment delimiters (never
//! the contents) before parsing makes those tables visible without touching
//! anything else on the page.

use regex::Regex;
use reqwest::blocking::Client;
use scraper::{ElementRef, Html, Selector};

use crate::error::AppError;
use crate::table::RawTable;

/// Fetches `url` and extracts the table whose `id` attribute is `table_id`.
///
/// Transport failures are fatal and propagate; an absent table is the
/// expected outcome for months with no data and comes back as `Ok(None)`.
/// HTTP error statuses are not special-cased: an error page simply contains
/// no matching table.
pub fn fetch_table(
    client: &Client,
    url: &str,
    table_id: &str,
    header: bool,
) -> Result<Option<RawTable>, AppError> {
    let body = client.get(url).send()?.text()?;
    parse_table(&body, table_id, header, url)
}

/// Extracts the first `<table>` with the given id from an HTML document.
///
/// All `<tr>` elements of the table are collected in document order, each
/// row being the text of its `<th>`/`<td>` cells in column order. With
/// `header` enabled, the `<thead>`'s first row names the columns and every
/// data row whose first cell repeats the first column name is dropped (the
/// site re-emits the header row at regular intervals mid-table).
///
/// `url` is only used to give structure errors a location.
///
/// # Returns
/// * `Ok(Some(table))` - The table was found and extracted
/// * `Ok(None)` - No table with this id exists on the page
/// * `Err(AppError::PageStructure)` - The table exists but its header
///   section is missing or shorter than the grid
pub fn parse_table(
    html: &str,
    table_id: &str,
    header: bool,
    url: &str,
) -> Result<Option<RawTable>, AppError> {
    // Comment delimiters only; the commented-out markup itself must survive
    let comment_delimiters = Regex::new(r"<!--|-->").unwrap();
    let visible = comment_delimiters.replace_all(html, "");

    let document = Html::parse_document(&visible);
    let table_selector = Selector::parse("table").unwrap();
    let Some(table_element) = document
        .select(&table_selector)
        .find(|el| el.value().id() == Some(table_id))
    else {
        return Ok(None);
    };

    let row_selector = Selector::parse("tr").unwrap();
    let cell_selector = Selector::parse("th, td").unwrap();

    let rows: Vec<Vec<String>> = table_element
        .select(&row_selector)
        .map(|row| {
            row.select(&cell_selector)
                .map(|cell| cell_text(&cell))
                .collect()
        })
        .collect();

    let mut table = RawTable::from_rows(rows);

    if header {
        let head_selector = Selector::parse("thead").unwrap();
        let name_selector = Selector::parse("th").unwrap();
        let head_row = table_element
            .select(&head_selector)
            .next()
            .and_then(|thead| thead.select(&row_selector).next())
            .ok_or_else(|| AppError::page_structure("table has no header row", url))?;

        let names: Vec<String> = head_row
            .select(&name_selector)
            .map(|cell| cell_text(&cell))
            .collect();

        let width = table.width();
        if names.is_empty() || names.len() < width {
            return Err(AppError::page_structure(
                format!(
                    "header row has {} cells, table has {} columns",
                    names.len(),
                    width
                ),
                url,
            ));
        }
        let names: Vec<String> = names.into_iter().take(width).collect();

        // The repeated header rows (and the header row itself, which is
        // part of the grid) carry the first column's name in their first
        // cell; real data rows never do
        let first_name = names[0].clone();
        table.retain_rows(|row| row.first().map(String::as_str) != Some(first_name.as_str()));
        table.set_columns(names);
    }

    Ok(Some(table))
}

fn cell_text(cell: &ElementRef) -> String {
    cell.text().collect::<String>().trim().to_string()
}
