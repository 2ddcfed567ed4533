//! End-to-end test for the report pipeline against a small fixture sheet.
//!
//! The fixture is a three-player season stat sheet in the upstream TSV
//! layout. The test runs the same load/compute/assemble/rank/write path as
//! the `stat-report` binary and checks the report files byte for byte.

use nba_stat_reports::report::{self, ReportMode};
use nba_stat_reports::stats::Metric;
use nba_stat_reports::table::StatTable;
use std::fs;
use std::path::Path;

fn load_fixture() -> StatTable {
    StatTable::load(Path::new("tests/fixtures/input/mini_season.tsv"))
        .expect("Failed to load fixture stat sheet")
}

#[test]
fn test_full_report_keeps_input_order() {
    let table = load_fixture();
    assert_eq!(table.row_count(), 3);

    let values = Metric::FieldGoalAccuracy.compute(&table).unwrap();
    let records = report::assemble(&table, &values).unwrap();
    assert_eq!(records.len(), table.row_count());

    let dir = tempfile::tempdir().unwrap();
    let path = dir
        .path()
        .join(report::report_filename(ReportMode::Full, Metric::FieldGoalAccuracy));
    report::write_report(&path, &records).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    // Alice 10/20, Bob 0/0 (zero-attempt policy), Cara 30/40
    assert_eq!(
        content,
        "Player,Value\n\"Alice\",0.5\n\"Bob\",0\n\"Cara\",0.75\n"
    );
}

#[test]
fn test_top_report_ranks_descending_and_keeps_short_tables_whole() {
    let table = load_fixture();

    let values = Metric::FieldGoalAccuracy.compute(&table).unwrap();
    let records = report::assemble(&table, &values).unwrap();
    let ranked = report::rank(records, 100);

    // Only 3 players, so the top-100 request returns all of them, sorted.
    assert_eq!(ranked.len(), 3);

    let dir = tempfile::tempdir().unwrap();
    let path = dir
        .path()
        .join(report::report_filename(ReportMode::Top100, Metric::FieldGoalAccuracy));
    report::write_report(&path, &ranked).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(
        content,
        "Player,Value\n\"Cara\",0.75\n\"Alice\",0.5\n\"Bob\",0\n"
    );
}

#[test]
fn test_ranked_ties_keep_sheet_order() {
    let table = load_fixture();

    // Steals per game: Alice 20/10 = 2, Bob 2/4 = 0.5, Cara 4/8 = 0.5.
    let values = Metric::StealsPerGame.compute(&table).unwrap();
    let records = report::assemble(&table, &values).unwrap();
    let ranked = report::rank(records, 100);

    let names: Vec<&str> = ranked.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Alice", "Bob", "Cara"]);
    assert_eq!(ranked[1].value, ranked[2].value);
}

#[test]
fn test_zero_minutes_player_gets_zero_not_error() {
    let table = load_fixture();

    let values = Metric::PointsPerMinute.compute(&table).unwrap();
    // Bob has 10 points in 0 minutes.
    assert_eq!(values[1], 0.0);
    assert!(values.iter().all(|v| v.is_finite()));
}

#[test]
fn test_every_metric_covers_every_player() {
    let table = load_fixture();

    for metric in Metric::ALL {
        let values = metric.compute(&table).unwrap();
        let records = report::assemble(&table, &values).unwrap();
        assert_eq!(records.len(), 3, "metric {}", metric);
        assert!(records.iter().all(|r| r.value.is_finite()));
    }
}

#[test]
fn test_reports_are_reproducible() {
    let table = load_fixture();
    let values = Metric::OverallShotAccuracy.compute(&table).unwrap();
    let records = report::assemble(&table, &values).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let first_path = dir.path().join("first.csv");
    let second_path = dir.path().join("second.csv");
    report::write_report(&first_path, &records).unwrap();
    report::write_report(&second_path, &records).unwrap();

    assert_eq!(fs::read(&first_path).unwrap(), fs::read(&second_path).unwrap());
}
