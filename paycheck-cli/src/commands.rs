//! Subcommand execution: merges flags with config defaults, loads tables
//! and renders the result.

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use chrono::{Datelike, Local};
use paycheck_core::calculations::{TaxEngine, hourly_to_salary, salary_to_hourly};
use paycheck_core::{FilingStatus, PayFrequency, PaycheckInput, TaxYearConstants};
use paycheck_data::{LATEST_TAX_YEAR, TableLoader, available_tax_years, builtin_tax_year};
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::cli::{CalcArgs, Cli, Command, ConvertArgs, OutputFormat, TableArgs};
use crate::config::PaycheckConfig;
use crate::report::{self, CalculationReport};

const DEFAULT_HOURS_PER_WEEK: Decimal = Decimal::from_parts(40, 0, 0, false, 0);

/// The current calendar year when tables exist for it, else the latest
/// built-in year.
pub fn default_tax_year() -> i32 {
    let current = Local::now().year();
    if available_tax_years().contains(&current) {
        current
    } else {
        LATEST_TAX_YEAR
    }
}

/// Table selection after merging flags over config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSettings {
    pub year: i32,
    pub brackets: Option<PathBuf>,
    pub deductions: Option<PathBuf>,
}

impl TableSettings {
    pub fn resolve(
        args: &TableArgs,
        config: &PaycheckConfig,
    ) -> Self {
        Self {
            year: args.year.or(config.year).unwrap_or_else(default_tax_year),
            brackets: args.brackets.clone().or_else(|| config.brackets.clone()),
            deductions: args.deductions.clone().or_else(|| config.deductions.clone()),
        }
    }

    /// Built-in tables for the year with any CSV overlays applied.
    pub fn load(&self) -> Result<TaxYearConstants> {
        let constants = builtin_tax_year(self.year)?;
        if self.brackets.is_none() && self.deductions.is_none() {
            return Ok(constants);
        }

        let brackets = match &self.brackets {
            Some(path) => TableLoader::read_brackets_file(path)
                .with_context(|| format!("Failed to read brackets: {}", path.display()))?,
            None => Vec::new(),
        };
        let deductions = match &self.deductions {
            Some(path) => TableLoader::read_deductions_file(path)
                .with_context(|| format!("Failed to read deductions: {}", path.display()))?,
            None => Vec::new(),
        };

        let loaded = TableLoader::apply(constants, &brackets, &deductions)
            .context("Failed to apply table overrides")?;
        info!(
            schedules = loaded.schedules_loaded,
            deductions = loaded.deductions_applied,
            "table overrides applied"
        );

        Ok(loaded.constants)
    }
}

/// Everything `calc` needs after merging flags over config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalcSettings {
    pub input: PaycheckInput,
    pub tables: TableSettings,
    pub sources: bool,
}

impl CalcSettings {
    pub fn resolve(
        args: &CalcArgs,
        config: &PaycheckConfig,
    ) -> Result<Self> {
        let hours_per_week = args
            .hours_per_week
            .or(config.hours_per_week)
            .unwrap_or(DEFAULT_HOURS_PER_WEEK);

        let frequency = match args.frequency.as_deref().or(config.frequency.as_deref()) {
            Some(name) => PayFrequency::parse(name, Some(hours_per_week))
                .ok_or_else(|| anyhow!("unknown pay frequency '{name}'"))?,
            None => PayFrequency::Annual,
        };

        let filing_status = match (args.status, config.status.as_deref()) {
            (Some(status), _) => status,
            (None, Some(code)) => code
                .parse::<FilingStatus>()
                .context("Invalid filing status in config")?,
            (None, None) => FilingStatus::Single,
        };

        let state_code = args
            .state
            .clone()
            .or_else(|| config.state.clone())
            .ok_or_else(|| anyhow!("no state given; pass --state or set `state` in the config file"))?;

        Ok(Self {
            input: PaycheckInput {
                gross_pay: args.gross,
                frequency,
                filing_status,
                state_code,
            },
            tables: TableSettings::resolve(&args.tables, config),
            sources: args.sources,
        })
    }
}

fn resolve_format(
    cli: &Cli,
    config: &PaycheckConfig,
) -> OutputFormat {
    cli.format.or(config.format).unwrap_or_default()
}

fn convert_hours(
    args: &ConvertArgs,
    config: &PaycheckConfig,
) -> Decimal {
    args.hours_per_week
        .or(config.hours_per_week)
        .unwrap_or(DEFAULT_HOURS_PER_WEEK)
}

/// Runs the parsed command and returns what should be printed.
pub fn run(
    cli: &Cli,
    config: &PaycheckConfig,
) -> Result<String> {
    let format = resolve_format(cli, config);

    match &cli.command {
        Command::Calc(args) => {
            let settings = CalcSettings::resolve(args, config)?;
            let constants = settings.tables.load()?;
            debug!(?settings.input, tax_year = constants.tax_year, "calculating");

            let result = TaxEngine::new(&constants).calculate(&settings.input)?;
            let report = CalculationReport {
                result: &result,
                sources: settings.sources.then_some(constants.sources.as_slice()),
            };
            report::render_calculation(&report, format)
        }
        Command::ToSalary(args) => {
            let hours = convert_hours(args, config);
            let salary = hourly_to_salary(args.amount, hours)?;
            report::render_conversion(args.amount, hours, salary, format)
        }
        Command::ToHourly(args) => {
            let hours = convert_hours(args, config);
            let rate = salary_to_hourly(args.amount, hours)?;
            report::render_conversion(args.amount, hours, rate, format)
        }
        Command::States(args) => {
            let constants = TableSettings::resolve(args, config).load()?;
            let states: Vec<_> = constants.states.values().collect();
            report::render_states(&states, format)
        }
    }
}
