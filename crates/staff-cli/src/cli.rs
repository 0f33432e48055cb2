//! CLI argument definitions for the staffing planner.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use staff_cli::pipeline::PlanFormat;

#[derive(Parser)]
#[command(
    name = "staff-planner",
    version,
    about = "Call staffing planner - turn forecast call volume into hourly agent counts",
    long_about = "Turn a demand table of forecast call volume into a 24-hour staffing plan.\n\n\
                  Each hour lists the agents required in total and per customer.\n\
                  Rows that fail validation are reported and skipped."
)]
pub struct Cli {
    /// Demand table (CSV with a header row).
    #[arg(long = "input", value_name = "PATH")]
    pub input: PathBuf,

    /// Fraction of each hour an agent spends on calls (intended range 0-1; floored at 0.01).
    #[arg(long = "utilization", default_value_t = 1.0, allow_negative_numbers = true)]
    pub utilization: f64,

    /// Output format to generate.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormatArg,

    /// CSV output path (default: outputs/schedule_<timestamp>.csv). Only used with --format csv.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print a run summary table to stderr.
    #[arg(long = "summary")]
    pub summary: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormatArg {
    Text,
    Json,
    Csv,
}

impl From<OutputFormatArg> for PlanFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Text => PlanFormat::Text,
            OutputFormatArg::Json => PlanFormat::Json,
            OutputFormatArg::Csv => PlanFormat::Csv,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn arguments_are_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_match_plain_text_run() {
        let cli = Cli::try_parse_from(["staff-planner", "--input", "demand.csv"]).unwrap();
        assert_eq!(cli.utilization, 1.0);
        assert!(matches!(cli.format, OutputFormatArg::Text));
        assert!(cli.output.is_none());
        assert!(!cli.summary);
    }

    #[test]
    fn input_is_required() {
        assert!(Cli::try_parse_from(["staff-planner"]).is_err());
    }

    #[test]
    fn parses_csv_run() {
        let cli = Cli::try_parse_from([
            "staff-planner",
            "--input",
            "demand.csv",
            "--utilization",
            "0.8",
            "--format",
            "csv",
            "--output",
            "plan.csv",
        ])
        .unwrap();
        assert_eq!(cli.utilization, 0.8);
        assert_eq!(PlanFormat::from(cli.format), PlanFormat::Csv);
        assert_eq!(cli.output, Some(PathBuf::from("plan.csv")));
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(
            Cli::try_parse_from(["staff-planner", "--input", "x.csv", "--format", "xml"]).is_err()
        );
    }
}
