//! Built-in reference tables.
//!
//! Only 2026 is modeled. Other years can be layered on top of these tables
//! with the CSV [`crate::TableLoader`].

mod federal;
mod states;

use paycheck_core::{BracketScheduleError, SourceCitation, TaxYearConstants};
use thiserror::Error;
use tracing::debug;

pub use federal::{
    FICA_2026, STANDARD_DEDUCTION_2026, federal_schedules_2026, federal_standard_deduction_2026,
};
pub use states::state_profiles_2026;

pub const LATEST_TAX_YEAR: i32 = 2026;

const AVAILABLE_TAX_YEARS: [i32; 1] = [LATEST_TAX_YEAR];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuiltinTableError {
    #[error("no built-in tables for tax year {requested}; available: {available:?}")]
    UnsupportedYear { requested: i32, available: Vec<i32> },

    #[error("built-in bracket table is invalid: {0}")]
    InvalidSchedule(#[from] BracketScheduleError),
}

/// Tax years with built-in tables, ascending.
pub fn available_tax_years() -> &'static [i32] {
    &AVAILABLE_TAX_YEARS
}

/// Built-in constants for `year`.
///
/// # Errors
///
/// * [`BuiltinTableError::UnsupportedYear`] when no tables exist for `year`.
/// * [`BuiltinTableError::InvalidSchedule`] if a built-in table fails
///   validation.
pub fn builtin_tax_year(year: i32) -> Result<TaxYearConstants, BuiltinTableError> {
    match year {
        2026 => Ok(tax_year_2026()?),
        requested => Err(BuiltinTableError::UnsupportedYear {
            requested,
            available: AVAILABLE_TAX_YEARS.to_vec(),
        }),
    }
}

/// Federal, FICA and state tables for 2026.
///
/// # Errors
///
/// Returns [`BracketScheduleError`] if any built-in bracket table is
/// malformed.
pub fn tax_year_2026() -> Result<TaxYearConstants, BracketScheduleError> {
    let mut constants = TaxYearConstants::new(2026, federal_schedules_2026()?, FICA_2026);

    for profile in state_profiles_2026()? {
        constants.insert_state(profile);
    }
    constants.sources = sources_2026();

    debug!(
        tax_year = constants.tax_year,
        states = constants.states.len(),
        "built-in tables assembled"
    );

    Ok(constants)
}

fn cite(
    jurisdiction: &str,
    title: &str,
    url: Option<&str>,
) -> SourceCitation {
    SourceCitation {
        jurisdiction: jurisdiction.to_string(),
        title: title.to_string(),
        url: url.map(str::to_string),
    }
}

fn sources_2026() -> Vec<SourceCitation> {
    vec![
        cite(
            "US",
            "IRS Rev. Proc. 2025-32: 2026 tax rate schedules and standard deductions",
            None,
        ),
        cite(
            "US",
            "SSA contribution and benefit base",
            Some("https://www.ssa.gov/oact/cola/cbb.html"),
        ),
        cite("US", "IRC §3101(b)(2): additional Medicare tax thresholds", None),
        cite("CA", "Franchise Tax Board rate schedules", None),
        cite("NY", "Department of Taxation and Finance IT-201 instructions", None),
        cite("NJ", "Division of Taxation NJ-1040 tax rate schedules", None),
        cite("OR", "Department of Revenue Form OR-40 instructions", None),
        cite("VA", "Department of Taxation Form 760 instructions", None),
        cite("MA", "Department of Revenue Form 1 instructions", None),
        cite("MS", "Department of Revenue individual income tax rates", None),
        cite("AL", "Department of Revenue Form 40 instructions", None),
        cite("AR", "Department of Finance and Administration AR1000F tax tables", None),
        cite("CT", "Department of Revenue Services Form CT-1040 tax tables", None),
        cite("DE", "Division of Revenue Form PIT-RES instructions", None),
        cite("DC", "Office of Tax and Revenue Form D-40 instructions", None),
        cite("HI", "Department of Taxation Form N-11 tax rate schedules", None),
        cite("KS", "Department of Revenue Form K-40 instructions", None),
        cite("LA", "Department of Revenue Act 11 (2024) flat rate and standard deduction", None),
        cite("ME", "Maine Revenue Services individual income tax rate schedules", None),
        cite("MD", "Comptroller of Maryland Form 502 instructions", None),
        cite("MN", "Department of Revenue individual income tax rates and brackets", None),
        cite("MO", "Department of Revenue Form MO-1040 tax chart", None),
        cite("MT", "Department of Revenue Form 2 instructions", None),
        cite("NE", "Department of Revenue Form 1040N tax rate schedules", None),
        cite("NM", "Taxation and Revenue Department PIT-1 rate tables", None),
        cite("ND", "Office of State Tax Commissioner Form ND-1 rate schedules", None),
        cite("OH", "Department of Taxation IT 1040 instructions", None),
        cite("OK", "Oklahoma Tax Commission Form 511 instructions", None),
        cite("RI", "Division of Taxation RI-1040 tax rate schedule", None),
        cite("SC", "Department of Revenue SC1040 tax tables", None),
        cite("VT", "Department of Taxes IN-111 rate schedules", None),
        cite("WV", "State Tax Department IT-140 rate schedules", None),
        cite("WI", "Department of Revenue Form 1 tax rate schedules", None),
    ]
}
