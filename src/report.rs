//! Record assembly, ranking, and CSV report output.
//!
//! A report is a sequence of (player name, metric value) records. The full
//! report keeps input row order; the ranked report sorts descending by value
//! and truncates. Both serialize to a two-column `Player,Value` CSV with the
//! player name quoted and the value in Rust's default float notation.

use crate::stats::Metric;
use crate::table::{columns, StatTable};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReportError {
    #[error("record count mismatch: {rows} table rows but {values} metric values")]
    RecordCountMismatch { rows: usize, values: usize },
    #[error("data row {row} has no player name column")]
    MissingName { row: usize },
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// Raised when a report mode selection is neither `100` nor `FULL`.
#[derive(Debug, Error)]
#[error("invalid calculation type requested: {0:?}")]
pub struct UnknownMode(pub String);

/// One player's entry in a report.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRecord {
    pub name: String,
    pub value: f64,
}

/// Which report to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    /// Ranked report of the highest-value players.
    Top100,
    /// One record per input row, in input order.
    Full,
}

impl FromStr for ReportMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "100" => Ok(ReportMode::Top100),
            "FULL" => Ok(ReportMode::Full),
            other => Err(UnknownMode(other.to_string())),
        }
    }
}

/// Pair each row's player name with its metric value, in row order.
///
/// The length check is defensive: every calculator produces one value per
/// row, so a mismatch here means a bug upstream, not bad input.
pub fn assemble(table: &StatTable, values: &[f64]) -> Result<Vec<PlayerRecord>, ReportError> {
    if table.row_count() != values.len() {
        return Err(ReportError::RecordCountMismatch {
            rows: table.row_count(),
            values: values.len(),
        });
    }

    let mut records = Vec::with_capacity(values.len());
    for (row, value) in values.iter().enumerate() {
        let name = table
            .cell(row, columns::PLAYER_NAME)
            .ok_or(ReportError::MissingName { row })?;
        records.push(PlayerRecord {
            name: name.to_string(),
            value: *value,
        });
    }
    Ok(records)
}

/// The `top_n` highest-value records, descending by value.
///
/// The sort is stable, so records with equal values keep their original
/// relative order and repeated runs produce identical output. A `top_n`
/// larger than the record count returns everything, still sorted.
pub fn rank(mut records: Vec<PlayerRecord>, top_n: usize) -> Vec<PlayerRecord> {
    records.sort_by(|a, b| b.value.total_cmp(&a.value));
    records.truncate(top_n);
    records
}

/// Filename for a report: `TOP_100_<STAT>_REPORT.csv` or
/// `FULL_<STAT>_report.csv`.
pub fn report_filename(mode: ReportMode, metric: Metric) -> String {
    match mode {
        ReportMode::Top100 => format!("TOP_100_{}_REPORT.csv", metric.identifier()),
        ReportMode::Full => format!("FULL_{}_report.csv", metric.identifier()),
    }
}

/// Write records to `path` as a `Player,Value` CSV, overwriting any existing
/// file. Names are quoted; values use the default float rendering. The file
/// handle is closed on every exit path; on error a partial file may remain.
pub fn write_report(path: &Path, records: &[PlayerRecord]) -> Result<(), ReportError> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);

    writeln!(out, "Player,Value")?;
    for record in records {
        writeln!(out, "\"{}\",{}", record.name, record.value)?;
    }
    out.flush()?;
    Ok(())
}
