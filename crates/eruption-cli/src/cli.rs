//! CLI argument definitions.

use std::path::PathBuf;
use std::str::FromStr;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use eruption_core::config::{DB_PATH_ENV, DEFAULT_DB_PATH, EXPORT_DIR_ENV, PERSIST_MODE_ENV};
use eruption_core::{PersistMode, ToothId, ToothStatus};

#[derive(Parser)]
#[command(
    name = "eruption",
    version,
    about = "Record dental eruption assessments",
    long_about = "Fill in a dental eruption assessment, store it in SQLite and export it as JSON.\n\n\
                  Teeth use quadrant notation: 11-17, 21-27, 31-37, 41-47."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// SQLite database file.
    #[arg(long, value_name = "PATH", env = DB_PATH_ENV, default_value = DEFAULT_DB_PATH, global = true)]
    pub db: PathBuf,

    /// What a submission stores: patient-only or full.
    #[arg(long = "persist-mode", value_name = "MODE", env = PERSIST_MODE_ENV, global = true)]
    pub persist_mode: Option<PersistMode>,

    /// Directory the JSON export is written to after a submission.
    #[arg(long = "export-dir", value_name = "DIR", env = EXPORT_DIR_ENV, global = true)]
    pub export_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log output format.
    #[arg(long = "log-format", value_enum, default_value = "compact", global = true)]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the quadrant groups and status options.
    Layout,

    /// Fill in and submit an assessment.
    Submit(SubmitArgs),

    /// List stored patient records.
    History(HistoryArgs),
}

#[derive(Args)]
pub struct SubmitArgs {
    /// Patient name.
    #[arg(long, default_value = "")]
    pub name: String,

    /// Patient identifier.
    #[arg(long = "patient-id", default_value = "")]
    pub patient_id: String,

    /// Exam date (YYYY-MM-DD); defaults to today.
    #[arg(long, value_name = "DATE")]
    pub date: Option<NaiveDate>,

    /// Tooth status as TOOTH=STATUS (e.g. 11=complete); repeatable.
    #[arg(long = "tooth", value_name = "TOOTH=STATUS")]
    pub teeth: Vec<ToothAssignment>,

    /// Free-text comment.
    #[arg(long, default_value = "")]
    pub comment: String,

    /// Print only the JSON export document to stdout.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct HistoryArgs {
    /// Only records for this patient identifier.
    #[arg(long = "patient-id")]
    pub patient_id: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

/// A `TOOTH=STATUS` pair from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToothAssignment {
    pub tooth: ToothId,
    pub status: ToothStatus,
}

impl FromStr for ToothAssignment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (tooth, status) = s
            .split_once('=')
            .ok_or_else(|| format!("expected TOOTH=STATUS, got {}", s))?;
        Ok(Self {
            tooth: tooth.trim().parse().map_err(|e| format!("{}", e))?,
            status: status.parse().map_err(|e| format!("{}", e))?,
        })
    }
}
