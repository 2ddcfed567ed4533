//! NBA Stat Reports
//!
//! Computes per-player efficiency statistics from a tab-separated season
//! stat sheet and writes them out as ranked or full CSV reports.
//!
//! This library provides:
//! - `table`: loader for the fixed-column stat sheet
//! - `stats`: the seven per-player metric calculators
//! - `report`: record assembly, ranking, and CSV report output
//!
//! Binaries:
//! - `stat-report`: interactive report generator

pub mod report;
pub mod stats;
pub mod table;

// Re-export commonly used types
pub use report::{PlayerRecord, ReportMode};
pub use stats::Metric;
pub use table::StatTable;
