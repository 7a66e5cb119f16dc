//! Text and JSON rendering for command results.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use paycheck_core::{
    BracketDetail, PaycheckBreakdown, SourceCitation, StateTaxMethod, StateTaxProfile,
    TaxCalculationResult,
};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::utils::{format_money, format_rate};

/// A calculation plus, on request, where its tables came from.
#[derive(Debug, Serialize)]
pub struct CalculationReport<'a> {
    #[serde(flatten)]
    pub result: &'a TaxCalculationResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<&'a [SourceCitation]>,
}

#[derive(Debug, Serialize)]
struct StateSummary<'a> {
    code: &'a str,
    name: &'a str,
    method: &'static str,
    top_rate: Option<Decimal>,
}

#[derive(Debug, Serialize)]
struct Conversion {
    input: Decimal,
    hours_per_week: Decimal,
    output: Decimal,
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize output")
}

pub fn render_calculation(
    report: &CalculationReport<'_>,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(report),
        OutputFormat::Text => Ok(calculation_text(report)),
    }
}

fn calculation_text(report: &CalculationReport<'_>) -> String {
    let result = report.result;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Tax year {} | {} | {} | {}",
        result.tax_year, result.filing_status, result.state_code, result.frequency
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "{:<22}{:>16}{:>16}", "", "Per period", "Annual");

    let rows: [(&str, fn(&PaycheckBreakdown) -> Decimal); 7] = [
        ("Gross pay", |b| b.gross_pay),
        ("Federal income tax", |b| b.federal_tax),
        ("State income tax", |b| b.state_tax),
        ("Social Security", |b| b.social_security),
        ("Medicare", |b| b.medicare),
        ("Additional Medicare", |b| b.additional_medicare),
        ("Net pay", |b| b.net_pay),
    ];
    for (label, field) in rows {
        let _ = writeln!(
            out,
            "{:<22}{:>16}{:>16}",
            label,
            format_money(field(&result.per_period)),
            format_money(field(&result.annual))
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{:<26}{:>16}", "Federal taxable income", format_money(result.taxable_income));
    let _ = writeln!(out, "{:<26}{:>16}", "State taxable income", format_money(result.state_taxable_income));
    let _ = writeln!(out, "{:<26}{:>16}", "Marginal federal rate", format_rate(result.marginal_rate));
    let _ = writeln!(out, "{:<26}{:>16}", "Effective rate", format_rate(result.effective_rate));

    write_brackets(&mut out, "Federal brackets", &result.federal_brackets);
    write_brackets(&mut out, "State brackets", &result.state_brackets);

    if let Some(sources) = report.sources {
        let _ = writeln!(out);
        let _ = writeln!(out, "Sources");
        for source in sources {
            match &source.url {
                Some(url) => {
                    let _ = writeln!(out, "  [{}] {} <{}>", source.jurisdiction, source.title, url);
                }
                None => {
                    let _ = writeln!(out, "  [{}] {}", source.jurisdiction, source.title);
                }
            }
        }
    }

    out
}

fn write_brackets(
    out: &mut String,
    title: &str,
    brackets: &[BracketDetail],
) {
    if brackets.is_empty() {
        return;
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{title}");
    for detail in brackets {
        let upper = detail
            .max_income
            .map_or_else(|| "and up".to_string(), format_money);
        let _ = writeln!(
            out,
            "  {:>14} to {:>14} @ {:>7}  {:>14}",
            format_money(detail.min_income),
            upper,
            format_rate(detail.rate),
            format_money(detail.tax)
        );
    }
}

pub fn render_states(
    states: &[&StateTaxProfile],
    format: OutputFormat,
) -> Result<String> {
    let summaries: Vec<StateSummary<'_>> = states
        .iter()
        .map(|profile| StateSummary {
            code: &profile.code,
            name: &profile.name,
            method: profile.method.name(),
            top_rate: top_rate(&profile.method),
        })
        .collect();

    match format {
        OutputFormat::Json => to_json(&summaries),
        OutputFormat::Text => {
            let mut out = String::new();
            for summary in &summaries {
                let rate = summary.top_rate.map_or_else(String::new, format_rate);
                let _ = writeln!(
                    out,
                    "{:<4}{:<18}{:<13}{:>8}",
                    summary.code, summary.name, summary.method, rate
                );
            }
            Ok(out)
        }
    }
}

/// Highest marginal rate across all filing statuses.
fn top_rate(method: &StateTaxMethod) -> Option<Decimal> {
    match method {
        StateTaxMethod::NoIncomeTax => None,
        StateTaxMethod::Flat { rate, .. } => Some(*rate),
        StateTaxMethod::Progressive { schedules } => schedules
            .values()
            .map(|schedule| schedule.brackets.top_rate())
            .max(),
    }
}

pub fn render_conversion(
    input: Decimal,
    hours_per_week: Decimal,
    output: Decimal,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(&Conversion {
            input,
            hours_per_week,
            output,
        }),
        OutputFormat::Text => Ok(format!("{}\n", format_money(output))),
    }
}
