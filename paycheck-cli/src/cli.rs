use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use paycheck_core::FilingStatus;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::utils::parse_decimal;

/// Paycheck estimator: federal, state and payroll taxes withheld from
/// gross pay.
///
/// Defaults are read from `--config`, or `paycheck.toml` in the working
/// directory when present. Flags override the file.
#[derive(Debug, Parser)]
#[command(name = "paycheck", version, about)]
pub struct Cli {
    /// TOML file with default settings.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace). `RUST_LOG` wins.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format.
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Estimate taxes and take-home pay for one paycheck.
    Calc(CalcArgs),

    /// Convert an hourly rate to an annual salary.
    ToSalary(ConvertArgs),

    /// Convert an annual salary to an hourly rate.
    ToHourly(ConvertArgs),

    /// List the jurisdictions known for a tax year.
    States(TableArgs),
}

/// Where the tax tables come from.
#[derive(Debug, Clone, Default, Args)]
pub struct TableArgs {
    /// Tax year [default: current year if available, else the latest built-in year]
    #[arg(long)]
    pub year: Option<i32>,

    /// CSV of bracket rows to overlay on the built-in tables.
    #[arg(long)]
    pub brackets: Option<PathBuf>,

    /// CSV of standard deductions to overlay on the built-in tables.
    #[arg(long)]
    pub deductions: Option<PathBuf>,
}

#[derive(Debug, Clone, Args)]
pub struct CalcArgs {
    /// Gross pay for one period; the hourly rate with `--frequency hourly`.
    #[arg(value_parser = parse_decimal, allow_hyphen_values = true)]
    pub gross: Decimal,

    /// annual, monthly, semimonthly, biweekly, weekly or hourly [default: annual]
    #[arg(short, long)]
    pub frequency: Option<String>,

    /// Hours worked per week for hourly pay [default: 40]
    #[arg(long, value_parser = parse_decimal)]
    pub hours_per_week: Option<Decimal>,

    /// Filing status: S, MFJ, MFS, HOH or QSS [default: S]
    #[arg(short, long)]
    pub status: Option<FilingStatus>,

    /// Two-letter state code, e.g. CA.
    #[arg(long)]
    pub state: Option<String>,

    #[command(flatten)]
    pub tables: TableArgs,

    /// Print the sources the tables were compiled from.
    #[arg(long)]
    pub sources: bool,
}

#[derive(Debug, Clone, Args)]
pub struct ConvertArgs {
    #[arg(value_parser = parse_decimal, allow_hyphen_values = true)]
    pub amount: Decimal,

    /// Hours worked per week [default: 40]
    #[arg(long, value_parser = parse_decimal)]
    pub hours_per_week: Option<Decimal>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
