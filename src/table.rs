//! Loader for the tab-separated season stat sheet.
//!
//! The sheet has one header line followed by one data row per player. Column
//! positions are fixed by the upstream export; see [`columns`] for the
//! indices this crate cares about. Cells are kept as strings here and only
//! parsed to numbers by the metric calculators that need them.

use csv::{ReaderBuilder, Trim};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 0-based column indices of the stat sheet.
///
/// These mirror the upstream export format exactly. Columns not listed are
/// present in the file but unused.
pub mod columns {
    pub const PLAYER_NAME: usize = 3;
    pub const GAMES_PLAYED: usize = 5;
    pub const MINUTES: usize = 6;
    pub const FG_MADE: usize = 7;
    pub const FG_ATTEMPTED: usize = 8;
    pub const THREE_MADE: usize = 9;
    pub const THREE_ATTEMPTED: usize = 10;
    pub const FT_MADE: usize = 11;
    pub const FT_ATTEMPTED: usize = 12;
    pub const STEALS: usize = 19;
    pub const BLOCKS: usize = 20;
    pub const POINTS: usize = 21;
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("failed to open stat sheet {path}: {source}")]
    Open { path: PathBuf, source: csv::Error },
    #[error("failed to read data row {row} of {path}: {source}")]
    Row {
        path: PathBuf,
        row: usize,
        source: csv::Error,
    },
}

/// An in-memory stat sheet: one row of string cells per player, header
/// discarded. Immutable once loaded.
#[derive(Debug, Clone)]
pub struct StatTable {
    rows: Vec<Vec<String>>,
}

impl StatTable {
    /// Load a tab-separated stat sheet from disk.
    ///
    /// The first line is treated as a header and discarded. Every remaining
    /// non-empty line becomes one row; cells are split on tabs and trimmed.
    /// Rows are not validated for column count, so short rows surface later
    /// as errors from whichever calculator needs the missing column.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let mut reader = ReaderBuilder::new()
            .delimiter(b'\t')
            .quoting(false)
            .flexible(true)
            .trim(Trim::All)
            .has_headers(true)
            .from_path(path)
            .map_err(|source| LoadError::Open {
                path: path.to_path_buf(),
                source,
            })?;

        let mut rows = Vec::new();
        for (row, result) in reader.records().enumerate() {
            let record = result.map_err(|source| LoadError::Row {
                path: path.to_path_buf(),
                row,
                source,
            })?;
            rows.push(record.iter().map(|cell| cell.to_string()).collect());
        }

        Ok(StatTable { rows })
    }

    /// Build a table directly from rows. Used by tests and by callers that
    /// already hold parsed data.
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        StatTable { rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Cell at (row, col), or `None` if the row is too short.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(col)).map(String::as_str)
    }
}
