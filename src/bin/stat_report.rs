//! Stat Report Tool - Generate per-player efficiency reports
//!
//! Loads the season stat sheet, asks which report and which stat to compute
//! (or takes both as flags), and writes a CSV report next to the executable.

use anyhow::{Context, Result};
use clap::Parser;
use nba_stat_reports::report::{self, ReportMode};
use nba_stat_reports::stats::Metric;
use nba_stat_reports::table::StatTable;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "stat-report")]
#[command(about = "Generate per-player efficiency reports from a season stat sheet")]
struct Cli {
    /// Input stat sheet (defaults to NBA_Player_Stats.tsv next to the executable)
    #[arg(short, long, env = "NBA_STATS_FILE")]
    input: Option<PathBuf>,

    /// Report mode: 100 or FULL. Prompted for when omitted.
    #[arg(short, long)]
    mode: Option<String>,

    /// Stat type: FGA, 3PA, FTA, APPM, OSA, ABPG, ASPG. Prompted for when omitted.
    #[arg(short, long)]
    stat: Option<String>,

    /// Directory for report files (defaults to the executable's directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Number of players in a ranked report
    #[arg(long, default_value = "100")]
    top_n: usize,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let program_dir = program_dir()?;
    let input = cli
        .input
        .unwrap_or_else(|| program_dir.join("NBA_Player_Stats.tsv"));
    let output_dir = cli.output_dir.unwrap_or(program_dir);

    let table = StatTable::load(&input)?;
    log::info!(
        "loaded {} player rows from {}",
        table.row_count(),
        input.display()
    );

    let mode: ReportMode = select(
        cli.mode,
        "Are we doing top 100, or full report (100, FULL): ",
    )?;
    let metric: Metric = select(
        cli.stat,
        "Please enter type (FGA, 3PA, FTA, APPM, OSA, ABPG, ASPG): ",
    )?;

    let values = metric.compute(&table)?;
    let records = report::assemble(&table, &values)?;

    let path = output_dir.join(report::report_filename(mode, metric));
    match mode {
        ReportMode::Top100 => {
            let ranked = report::rank(records, cli.top_n);
            report::write_report(&path, &ranked)?;
            println!(
                "Top {} report for {} saved to {}",
                cli.top_n,
                metric,
                path.display()
            );
        }
        ReportMode::Full => {
            report::write_report(&path, &records)?;
            println!("Full report for {} saved to {}", metric, path.display());
        }
    }

    Ok(())
}

/// Resolve a selection from a CLI flag, falling back to an interactive
/// prompt. An unrecognized value aborts the run before any file is written.
fn select<T>(arg: Option<String>, prompt: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw = match arg {
        Some(value) => value,
        None => prompt_line(prompt)?,
    };
    Ok(raw.parse::<T>()?)
}

fn prompt_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .context("failed to read selection from stdin")?;
    Ok(line.trim().to_string())
}

/// Directory containing the running executable. Input and output paths are
/// resolved against it, matching how the original tool located its files.
fn program_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("failed to locate the running executable")?;
    Ok(exe
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(".")))
}
