//! CLI argument definitions for the notification pipeline.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

/// Fixed subject line unless overridden with `--subject`.
pub const DEFAULT_SUBJECT: &str = "Assemble 2024 註冊信息 registration information";

#[derive(Parser)]
#[command(
    name = "rollcall",
    version,
    about = "Render and dispatch personalized registration notifications",
    long_about = "Parse a registration export, render one bilingual notification\n\
                  document per participant, and hand each (recipient, document)\n\
                  pair to the configured delivery channel with a full audit log."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse the export, render every document, write the audit log.
    Run(RunArgs),

    /// Parse the export and print roster statistics only.
    Stats(StatsArgs),
}

#[derive(Parser)]
pub struct RunArgs {
    /// Path to the registration export CSV.
    #[arg(value_name = "DATASET")]
    pub dataset: PathBuf,

    /// local: build the audit log only; send: also hand each document to
    /// the delivery channel.
    #[arg(long = "mode", value_enum, default_value = "local")]
    pub mode: ModeArg,

    /// Directory for the audit log and outbox (default: current directory).
    #[arg(long = "out-dir", value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Override the fixed subject line.
    #[arg(long = "subject", value_name = "TEXT")]
    pub subject: Option<String>,
}

#[derive(Parser)]
pub struct StatsArgs {
    /// Path to the registration export CSV.
    #[arg(value_name = "DATASET")]
    pub dataset: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Dry run: parse, render, audit; deliver nothing.
    Local,
    /// Hand every document to the delivery channel.
    Send,
}

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
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn run_defaults_to_local_mode() {
        let cli = Cli::try_parse_from(["rollcall", "run", "registrations.csv"]).unwrap();
        match cli.command {
            Command::Run(args) => {
                assert_eq!(args.mode, ModeArg::Local);
                assert!(args.out_dir.is_none());
            }
            Command::Stats(_) => panic!("expected run"),
        }
    }
}
