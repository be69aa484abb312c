mod cli;
mod config;
mod disjoint_set;
mod error;
mod geometry;
mod grid;
mod launcher;
mod solver;

use std::io::BufRead;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::HumanBytes;

use cli::{Cli, Command};
use config::{LauncherConfig, Selection, SolveConfig};
use grid::Grid;

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("bounding_box=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Command::Launcher { output, archive_name }) => {
            let config = LauncherConfig {
                archive_name,
                ..LauncherConfig::new(PathBuf::from(&output))
            };
            run_launcher(config)?;
            Ok(ExitCode::SUCCESS)
        }
        None => {
            let selection = if cli.all { Selection::All } else { Selection::Largest };
            run_solve(SolveConfig { selection })
        }
    }
}

fn run_launcher(config: LauncherConfig) -> Result<()> {
    let path = launcher::write_launcher(&config)
        .with_context(|| format!("creating launcher script {}", config.output.display()))?;

    let size = std::fs::metadata(&path)?.len();
    eprintln!("\n  Launcher: {}", path.display());
    eprintln!("  Runs:     {}", config.archive_name);
    eprintln!("  Size:     {}\n", HumanBytes(size));
    Ok(())
}

fn run_solve(config: SolveConfig) -> Result<ExitCode> {
    let lines = std::io::stdin()
        .lock()
        .lines()
        .collect::<std::io::Result<Vec<String>>>()
        .context("reading grid from stdin")?;

    let outcome = solve_lines(&lines, config.selection);
    println!("{}", outcome.output);
    Ok(if outcome.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

struct SolveOutcome {
    output: String,
    success: bool,
}

fn solve_lines(lines: &[String], selection: Selection) -> SolveOutcome {
    match Grid::parse(lines) {
        Ok(grid) => SolveOutcome {
            output: solver::render(&solver::solve(&grid, selection)),
            success: true,
        },
        Err(e) => {
            tracing::error!("invalid grid: {e}");
            SolveOutcome {
                output: "Error".to_string(),
                success: false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(rows: &[&str]) -> Vec<String> {
        rows.iter().map(|r| r.to_string()).collect()
    }

    #[test]
    fn bad_character_prints_error_and_fails() {
        let outcome = solve_lines(&lines(&["**-", "*x-"]), Selection::Largest);
        assert_eq!(outcome.output, "Error");
        assert!(!outcome.success);
    }

    #[test]
    fn ragged_rows_print_error_and_fail() {
        let outcome = solve_lines(&lines(&["***", "**"]), Selection::All);
        assert_eq!(outcome.output, "Error");
        assert!(!outcome.success);
    }

    #[test]
    fn valid_grid_prints_box_and_succeeds() {
        let outcome = solve_lines(&lines(&["  **- ", "", "**-"]), Selection::Largest);
        assert_eq!(outcome.output, "(1,1)(2,2)");
        assert!(outcome.success);
    }

    #[test]
    fn no_box_prints_empty_line_and_succeeds() {
        let outcome = solve_lines(&lines(&["---"]), Selection::Largest);
        assert_eq!(outcome.output, "");
        assert!(outcome.success);
    }
}
