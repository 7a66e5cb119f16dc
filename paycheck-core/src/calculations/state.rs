//! State income tax dispatch.
//!
//! A state either levies no wage income tax, a flat rate on income above its
//! standard deduction, or a progressive schedule per filing status.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::common::{after_deduction, round_half_up};
use crate::calculations::progressive::ProgressiveTaxCalculator;
use crate::error::TaxEngineError;
use crate::models::{BracketDetail, FilingStatus, StateTaxMethod, StateTaxProfile, TaxYearConstants};

/// State tax owed on one year of income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateTaxOutcome {
    pub taxable_income: Decimal,
    pub tax: Decimal,
    pub brackets: Vec<BracketDetail>,
}

impl StateTaxOutcome {
    fn zero() -> Self {
        Self {
            taxable_income: Decimal::ZERO,
            tax: Decimal::ZERO,
            brackets: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StateTaxResolver<'a> {
    constants: &'a TaxYearConstants,
}

impl<'a> StateTaxResolver<'a> {
    pub fn new(constants: &'a TaxYearConstants) -> Self {
        Self { constants }
    }

    /// Finds the profile for `state_code`, ignoring case.
    ///
    /// # Errors
    ///
    /// [`TaxEngineError::UnknownJurisdiction`] if the code is not in the
    /// tables.
    pub fn profile(
        &self,
        state_code: &str,
    ) -> Result<&'a StateTaxProfile, TaxEngineError> {
        self.constants
            .state(state_code)
            .ok_or_else(|| TaxEngineError::UnknownJurisdiction(state_code.trim().to_string()))
    }

    /// Resolves the state and computes its tax on `annual_income`.
    ///
    /// # Errors
    ///
    /// * [`TaxEngineError::UnknownJurisdiction`] for an unknown state code.
    /// * [`TaxEngineError::InvalidInput`] for negative income or a filing
    ///   status the state does not list.
    pub fn calculate(
        &self,
        state_code: &str,
        status: FilingStatus,
        annual_income: Decimal,
    ) -> Result<StateTaxOutcome, TaxEngineError> {
        let profile = self.profile(state_code)?;
        calculate_for_profile(profile, status, annual_income)
    }
}

/// Computes tax for an already-resolved profile.
///
/// # Errors
///
/// [`TaxEngineError::InvalidInput`] for negative income or an unsupported
/// filing status.
pub fn calculate_for_profile(
    profile: &StateTaxProfile,
    status: FilingStatus,
    annual_income: Decimal,
) -> Result<StateTaxOutcome, TaxEngineError> {
    if annual_income < Decimal::ZERO {
        return Err(TaxEngineError::invalid(format!(
            "income must not be negative, got {annual_income}"
        )));
    }

    debug!(state = %profile.code, method = profile.method.name(), %status, "resolving state tax");

    match &profile.method {
        StateTaxMethod::NoIncomeTax => Ok(StateTaxOutcome::zero()),

        StateTaxMethod::Flat {
            rate,
            standard_deductions,
        } => {
            let deduction = standard_deductions
                .get(&status)
                .ok_or_else(|| unsupported_status(profile, status))?;
            let taxable_income = after_deduction(annual_income, *deduction);
            let tax = taxable_income * *rate;

            let brackets = if taxable_income > Decimal::ZERO {
                vec![BracketDetail {
                    min_income: Decimal::ZERO,
                    max_income: None,
                    rate: *rate,
                    amount_taxed: taxable_income,
                    tax,
                }]
            } else {
                Vec::new()
            };

            Ok(StateTaxOutcome {
                taxable_income,
                tax: round_half_up(tax),
                brackets,
            })
        }

        StateTaxMethod::Progressive { schedules } => {
            let schedule = schedules
                .get(&status)
                .ok_or_else(|| unsupported_status(profile, status))?;
            let taxable_income = after_deduction(annual_income, schedule.standard_deduction);
            let result = ProgressiveTaxCalculator::new(&schedule.brackets).calculate(taxable_income)?;

            Ok(StateTaxOutcome {
                taxable_income,
                tax: result.total_tax,
                brackets: result.brackets,
            })
        }
    }
}

fn unsupported_status(
    profile: &StateTaxProfile,
    status: FilingStatus,
) -> TaxEngineError {
    TaxEngineError::invalid(format!(
        "filing status {} ({}) is not supported by {}",
        status.label(),
        status.as_str(),
        profile.code
    ))
}
