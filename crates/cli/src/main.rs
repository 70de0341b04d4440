// prodsched - headless production schedule report runs

mod config;
mod discover;
mod exit_codes;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

use prodsched_core::{NoveltyFilter, ReportConfig, ReportInput, ScheduleError};
use prodsched_io::{export_grid, import_grid, report_file_name};

use config::RunConfig;
use exit_codes::{EXIT_FORMAT, EXIT_NO_CANDIDATE, EXIT_RUNTIME, EXIT_SELECTION, EXIT_SUCCESS};

/// Error carried to the process boundary: exit code, message, and an
/// optional hint printed below it.
#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl From<ScheduleError> for CliError {
    fn from(err: ScheduleError) -> Self {
        let (code, hint) = match &err {
            ScheduleError::NoCandidate { .. } => (
                EXIT_NO_CANDIDATE,
                Some("check import_dir and the report date".into()),
            ),
            ScheduleError::SelectionCancelled => (
                EXIT_SELECTION,
                Some("disambiguate with --pick <name> or --latest".into()),
            ),
            ScheduleError::UnsupportedFormat { .. } => (EXIT_FORMAT, None),
            ScheduleError::Io(_) => (EXIT_RUNTIME, None),
        };
        CliError {
            code,
            message: err.to_string(),
            hint,
        }
    }
}

#[derive(Parser)]
#[command(name = "prodsched")]
#[command(about = "Production schedule report builder (headless)")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the report for a target date
    #[command(after_help = "\
Examples:
  prodsched run prodsched.toml
  prodsched run prodsched.toml --date 2026-08-26 --new-only
  prodsched run prodsched.toml --latest --json")]
    Run {
        /// Path to the TOML run configuration
        config: PathBuf,

        /// Target report date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Only match ledger rows whose marker starts with $ / ＄
        #[arg(long)]
        new_only: bool,

        /// Select this candidate file when several match the date
        #[arg(long)]
        pick: Option<String>,

        /// Select the most recently modified candidate
        #[arg(long)]
        latest: bool,

        /// Machine-readable result on stdout
        #[arg(long)]
        json: bool,
    },

    /// Validate the configuration and directory access without running
    Check {
        /// Path to the TOML run configuration
        config: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            config,
            date,
            new_only,
            pick,
            latest,
            json,
        } => cmd_run(&config, date, new_only, pick.as_deref(), latest, json),
        Commands::Check { config } => cmd_check(&config),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("error: {}", e.message);
            if let Some(hint) = e.hint {
                eprintln!("hint: {hint}");
            }
            ExitCode::from(e.code)
        }
    }
}

fn cmd_run(
    config_path: &Path,
    date: Option<NaiveDate>,
    new_only: bool,
    pick: Option<&str>,
    latest: bool,
    json: bool,
) -> Result<(), CliError> {
    let config = RunConfig::load(config_path)?;
    let target_date = date.unwrap_or_else(|| Local::now().date_naive());

    let candidates = discover::find_candidates(&config.import_dir, target_date)?;
    let chosen = match discover::choose(&candidates, pick, latest) {
        Ok(candidate) => candidate,
        Err(err) => {
            eprintln!("{} candidates for {target_date}:", candidates.len());
            for c in &candidates {
                eprintln!("  {}  (modified {})", c.name, c.modified_display());
            }
            return Err(err.into());
        }
    };

    let schedule = import_grid(&chosen.path, config.schedule_sheet.as_deref())?;
    let ledger = import_grid(&config.ledger_file, Some(&config.ledger_sheet))?;
    let template = import_grid(&config.template_file, None)?;

    let report_config = ReportConfig {
        target_date,
        novelty_filter: if new_only {
            NoveltyFilter::NewOnly
        } else {
            NoveltyFilter::All
        },
    };
    let result = prodsched_core::run(
        &report_config,
        ReportInput {
            schedule,
            ledger,
            template,
        },
    );

    let file_name = report_file_name(target_date, &config.report_label, &config.report_ext);
    let out_path = config.output_dir.join(&file_name);
    export_grid(&out_path, &result.output)?;

    if json {
        let mut doc = serde_json::to_value(&result).map_err(|e| CliError {
            code: EXIT_RUNTIME,
            message: format!("JSON serialization error: {e}"),
            hint: None,
        })?;
        doc["saved"] = serde_json::Value::String(out_path.display().to_string());
        println!("{doc:#}");
    }

    // Human summary to stderr, like the totals dialog this replaces.
    let c = &result.counts;
    eprintln!("saved {}", out_path.display());
    eprintln!(
        "{} rows written from {}",
        result.rows_written, chosen.name
    );
    eprintln!(
        "region A new: {}, region B new: {}, region A old: {}, region B old: {} — total {}",
        c.region_a_new,
        c.region_b_new,
        c.region_a_old,
        c.region_b_old,
        c.total()
    );

    Ok(())
}

fn cmd_check(config_path: &Path) -> Result<(), CliError> {
    let config = RunConfig::load(config_path)?;

    let entries = std::fs::read_dir(&config.import_dir)
        .map_err(|e| {
            CliError::from(ScheduleError::Io(format!(
                "cannot read import_dir {}: {e}",
                config.import_dir.display()
            )))
        })?
        .count();
    eprintln!(
        "import_dir ok: {} ({entries} entries)",
        config.import_dir.display()
    );

    for (label, path) in [
        ("ledger_file", &config.ledger_file),
        ("template_file", &config.template_file),
    ] {
        if path.is_file() {
            eprintln!("{label} ok: {}", path.display());
        } else {
            return Err(CliError::from(ScheduleError::Io(format!(
                "{label} not found: {}",
                path.display()
            ))));
        }
    }

    if !config.output_dir.is_dir() {
        return Err(CliError::from(ScheduleError::Io(format!(
            "output_dir not found: {}",
            config.output_dir.display()
        ))));
    }
    eprintln!("output_dir ok: {}", config.output_dir.display());

    Ok(())
}
