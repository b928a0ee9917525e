//! Lightweight row/column grid for scraped HTML tables
//!
//! The pipeline needs exactly four things from its tabular container:
//! row-stacking concatenation, positional column drop, column (re)naming,
//! and row filtering. `RawTable` provides those over a plain `Vec` grid;
//! anything fancier lives in the typed game records downstream.

/// An untyped grid of text cells with an optional header of column names.
///
/// Rows may have uneven lengths (the source site occasionally emits short
/// rows); reads past the end of a row yield the empty string, which the
/// completeness filter downstream treats as a missing value.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    columns: Option<Vec<String>>,
    rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Build a table from raw rows, without column names.
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        RawTable {
            columns: None,
            rows,
        }
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns: the width of the widest row, or the number of
    /// assigned column names if that is larger.
    pub fn width(&self) -> usize {
        let row_width = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        match &self.columns {
            Some(names) => row_width.max(names.len()),
            None => row_width,
        }
    }

    /// Assigned column names, if any.
    pub fn columns(&self) -> Option<&[String]> {
        self.columns.as_deref()
    }

    /// Assign column names. Replaces any previous assignment.
    pub fn set_columns(&mut self, names: Vec<String>) {
        self.columns = Some(names);
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Text of the cell at (row, col). Short rows read as empty cells.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Keep only the rows for which `keep` returns true. Indexing stays
    /// contiguous afterwards.
    pub fn retain_rows<F>(&mut self, mut keep: F)
    where
        F: FnMut(&[String]) -> bool,
    {
        self.rows.retain(|row| keep(row));
    }

    /// Remove the columns at the given positional indexes from every row
    /// and from the column names.
    pub fn drop_columns(&mut self, indexes: &[usize]) {
        let mut sorted: Vec<usize> = indexes.to_vec();
        sorted.sort_unstable();
        sorted.dedup();

        for row in &mut self.rows {
            for &idx in sorted.iter().rev() {
                if idx < row.len() {
                    row.remove(idx);
                }
            }
        }
        if let Some(names) = &mut self.columns {
            for &idx in sorted.iter().rev() {
                if idx < names.len() {
                    names.remove(idx);
                }
            }
        }
    }

    /// Stack the rows of all given tables into one. Column names come from
    /// the first table; the callers only ever concatenate tables of the
    /// same shape.
    pub fn concat(tables: Vec<RawTable>) -> Option<RawTable> {
        let mut iter = tables.into_iter();
        let mut merged = iter.next()?;
        for table in iter {
            merged.rows.extend(table.rows);
        }
        Some(merged)
    }
}
