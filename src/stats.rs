//! The seven per-player efficiency metrics.
//!
//! Every metric is a per-row ratio over fixed stat sheet columns, computed
//! with a shared zero-denominator policy: a denominator of exactly 0 yields
//! 0.0 for that row instead of a division error. This keeps players with no
//! attempts (or no minutes, or no games) in the output rather than dropping
//! or poisoning their rows.

use crate::table::{columns, StatTable};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StatError {
    #[error("non-numeric value {value:?} in column {column} of data row {row}")]
    NonNumeric {
        row: usize,
        column: usize,
        value: String,
    },
    #[error("data row {row} has only {width} columns but column {column} is required")]
    ShortRow {
        row: usize,
        column: usize,
        width: usize,
    },
}

/// Raised when a stat type selection does not name one of the seven metrics.
#[derive(Debug, Error)]
#[error("invalid stat type requested: {0:?}")]
pub struct UnknownMetric(pub String);

/// The closed set of derived per-player statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// Field-goal accuracy: FGM / FGA
    FieldGoalAccuracy,
    /// Three-point accuracy: 3PM / 3PA
    ThreePointAccuracy,
    /// Free-throw accuracy: FTM / FTA
    FreeThrowAccuracy,
    /// Average points per minute played
    PointsPerMinute,
    /// Overall shot accuracy: all makes / all attempts
    OverallShotAccuracy,
    /// Average blocks per game played
    BlocksPerGame,
    /// Average steals per game played
    StealsPerGame,
}

impl Metric {
    pub const ALL: [Metric; 7] = [
        Metric::FieldGoalAccuracy,
        Metric::ThreePointAccuracy,
        Metric::FreeThrowAccuracy,
        Metric::PointsPerMinute,
        Metric::OverallShotAccuracy,
        Metric::BlocksPerGame,
        Metric::StealsPerGame,
    ];

    /// The short identifier used in prompts and report filenames.
    pub fn identifier(self) -> &'static str {
        match self {
            Metric::FieldGoalAccuracy => "FGA",
            Metric::ThreePointAccuracy => "3PA",
            Metric::FreeThrowAccuracy => "FTA",
            Metric::PointsPerMinute => "APPM",
            Metric::OverallShotAccuracy => "OSA",
            Metric::BlocksPerGame => "ABPG",
            Metric::StealsPerGame => "ASPG",
        }
    }

    /// Compute this metric for every row of the table, in row order.
    pub fn compute(self, table: &StatTable) -> Result<Vec<f64>, StatError> {
        match self {
            Metric::FieldGoalAccuracy => field_goal_accuracy(table),
            Metric::ThreePointAccuracy => three_point_accuracy(table),
            Metric::FreeThrowAccuracy => free_throw_accuracy(table),
            Metric::PointsPerMinute => points_per_minute(table),
            Metric::OverallShotAccuracy => overall_shot_accuracy(table),
            Metric::BlocksPerGame => blocks_per_game(table),
            Metric::StealsPerGame => steals_per_game(table),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for Metric {
    type Err = UnknownMetric;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FGA" => Ok(Metric::FieldGoalAccuracy),
            "3PA" => Ok(Metric::ThreePointAccuracy),
            "FTA" => Ok(Metric::FreeThrowAccuracy),
            "APPM" => Ok(Metric::PointsPerMinute),
            "OSA" => Ok(Metric::OverallShotAccuracy),
            "ABPG" => Ok(Metric::BlocksPerGame),
            "ASPG" => Ok(Metric::StealsPerGame),
            other => Err(UnknownMetric(other.to_string())),
        }
    }
}

/// Division with the zero-denominator policy: a denominator of exactly 0
/// yields 0.0, never NaN or infinity.
pub fn safe_divide(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

pub fn field_goal_accuracy(table: &StatTable) -> Result<Vec<f64>, StatError> {
    column_ratio(table, columns::FG_MADE, columns::FG_ATTEMPTED)
}

pub fn three_point_accuracy(table: &StatTable) -> Result<Vec<f64>, StatError> {
    column_ratio(table, columns::THREE_MADE, columns::THREE_ATTEMPTED)
}

pub fn free_throw_accuracy(table: &StatTable) -> Result<Vec<f64>, StatError> {
    column_ratio(table, columns::FT_MADE, columns::FT_ATTEMPTED)
}

pub fn points_per_minute(table: &StatTable) -> Result<Vec<f64>, StatError> {
    column_ratio(table, columns::POINTS, columns::MINUTES)
}

/// Overall shot accuracy: every make over every attempt, across field goals,
/// three-pointers, and free throws.
pub fn overall_shot_accuracy(table: &StatTable) -> Result<Vec<f64>, StatError> {
    let fg_made = numeric_column(table, columns::FG_MADE)?;
    let fg_attempted = numeric_column(table, columns::FG_ATTEMPTED)?;
    let three_made = numeric_column(table, columns::THREE_MADE)?;
    let three_attempted = numeric_column(table, columns::THREE_ATTEMPTED)?;
    let ft_made = numeric_column(table, columns::FT_MADE)?;
    let ft_attempted = numeric_column(table, columns::FT_ATTEMPTED)?;

    Ok((0..table.row_count())
        .map(|i| {
            safe_divide(
                fg_made[i] + three_made[i] + ft_made[i],
                fg_attempted[i] + three_attempted[i] + ft_attempted[i],
            )
        })
        .collect())
}

pub fn blocks_per_game(table: &StatTable) -> Result<Vec<f64>, StatError> {
    column_ratio(table, columns::BLOCKS, columns::GAMES_PLAYED)
}

pub fn steals_per_game(table: &StatTable) -> Result<Vec<f64>, StatError> {
    column_ratio(table, columns::STEALS, columns::GAMES_PLAYED)
}

/// Per-row numerator/denominator ratio of two columns under the
/// zero-denominator policy.
fn column_ratio(
    table: &StatTable,
    numerator: usize,
    denominator: usize,
) -> Result<Vec<f64>, StatError> {
    let num = numeric_column(table, numerator)?;
    let den = numeric_column(table, denominator)?;
    Ok(num
        .iter()
        .zip(&den)
        .map(|(n, d)| safe_divide(*n, *d))
        .collect())
}

/// Parse one column of the table as floats, one value per row.
fn numeric_column(table: &StatTable, column: usize) -> Result<Vec<f64>, StatError> {
    let mut values = Vec::with_capacity(table.row_count());
    for (row, cells) in table.rows().iter().enumerate() {
        let cell = cells.get(column).ok_or(StatError::ShortRow {
            row,
            column,
            width: cells.len(),
        })?;
        let value = cell.parse::<f64>().map_err(|_| StatError::NonNumeric {
            row,
            column,
            value: cell.clone(),
        })?;
        values.push(value);
    }
    Ok(values)
}
