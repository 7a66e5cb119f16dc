//! Gross-to-net paycheck calculation.
//!
//! The engine runs one pipeline per call:
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Annualize gross pay from the pay frequency |
//! | 2    | Federal taxable income (gross − standard deduction, min 0) and bracket tax |
//! | 3    | Social Security (capped at the wage base), Medicare, additional Medicare |
//! | 4    | State tax through the state's method |
//! | 5    | Net pay: gross − every tax above |
//! | 6    | Each amount divided back down to the pay frequency |
//!
//! All inputs are validated before step 1, so a call either returns a full
//! result or an error.
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeMap;
//!
//! use rust_decimal_macros::dec;
//! use paycheck_core::calculations::calculate_taxes;
//! use paycheck_core::{
//!     BracketSchedule, FicaConstants, FilingSchedule, FilingStatus, FilingStatusAmounts,
//!     PayFrequency, StateTaxMethod, StateTaxProfile, TaxYearConstants,
//! };
//!
//! let federal = BTreeMap::from([(
//!     FilingStatus::Single,
//!     FilingSchedule {
//!         standard_deduction: dec!(16100),
//!         brackets: BracketSchedule::from_thresholds(&[
//!             (dec!(0), dec!(0.10)),
//!             (dec!(12400), dec!(0.12)),
//!             (dec!(50400), dec!(0.22)),
//!         ])
//!         .unwrap(),
//!     },
//! )]);
//! let fica = FicaConstants {
//!     social_security_rate: dec!(0.062),
//!     social_security_wage_base: dec!(184500),
//!     medicare_rate: dec!(0.0145),
//!     additional_medicare_rate: dec!(0.009),
//!     additional_medicare_thresholds: FilingStatusAmounts::uniform(dec!(200000)),
//! };
//! let mut constants = TaxYearConstants::new(2026, federal, fica);
//! constants.insert_state(StateTaxProfile::new("TX", "Texas", StateTaxMethod::NoIncomeTax));
//!
//! let result = calculate_taxes(
//!     dec!(50000),
//!     PayFrequency::Annual,
//!     FilingStatus::Single,
//!     "TX",
//!     &constants,
//! )
//! .unwrap();
//!
//! assert_eq!(result.annual.federal_tax, dec!(3820.00));
//! assert_eq!(result.annual.social_security, dec!(3100.00));
//! assert_eq!(result.annual.medicare, dec!(725.00));
//! assert_eq!(result.annual.net_pay, dec!(42355.00));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::common::{after_deduction, floor_at_zero, round_half_up};
use crate::calculations::progressive::{ProgressiveTax, ProgressiveTaxCalculator};
use crate::calculations::state::{StateTaxOutcome, StateTaxResolver, calculate_for_profile};
use crate::error::TaxEngineError;
use crate::models::{
    FilingSchedule, FilingStatus, PayFrequency, PaycheckBreakdown, TaxCalculationResult,
    TaxYearConstants,
};

/// Everything a caller supplies for one paycheck estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaycheckInput {
    /// Gross pay for one period of `frequency`; the hourly rate for hourly pay.
    pub gross_pay: Decimal,
    pub frequency: PayFrequency,
    pub filing_status: FilingStatus,
    pub state_code: String,
}

/// Payroll taxes for one year of wages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FicaWithholding {
    social_security: Decimal,
    medicare: Decimal,
    additional_medicare: Decimal,
}

#[derive(Debug, Clone, Copy)]
pub struct TaxEngine<'a> {
    constants: &'a TaxYearConstants,
}

impl<'a> TaxEngine<'a> {
    pub fn new(constants: &'a TaxYearConstants) -> Self {
        Self { constants }
    }

    pub fn tax_year(&self) -> i32 {
        self.constants.tax_year
    }

    /// Runs the full pipeline for `input`.
    ///
    /// # Errors
    ///
    /// * [`TaxEngineError::InvalidInput`] for negative gross pay,
    ///   non-positive hours on hourly pay, amounts too large to annualize,
    ///   or a filing status unsupported federally or by the state.
    /// * [`TaxEngineError::UnknownJurisdiction`] for an unknown state code.
    pub fn calculate(
        &self,
        input: &PaycheckInput,
    ) -> Result<TaxCalculationResult, TaxEngineError> {
        self.validate_amounts(input)?;

        let state = StateTaxResolver::new(self.constants).profile(&input.state_code)?;
        let federal_schedule = self.federal_schedule(input.filing_status)?;
        if !state.method.supports(input.filing_status) {
            return Err(TaxEngineError::invalid(format!(
                "filing status {} ({}) is not supported by {}",
                input.filing_status.label(),
                input.filing_status.as_str(),
                state.code
            )));
        }

        let periods = input.frequency.periods_per_year().ok_or_else(|| {
            TaxEngineError::invalid(format!("{} is too large to annualize", input.frequency))
        })?;
        let annual_gross = self.annualize(input.gross_pay, periods)?;

        let taxable_income = after_deduction(annual_gross, federal_schedule.standard_deduction);
        let federal = self.federal_tax(federal_schedule, taxable_income)?;
        let fica = self.fica(annual_gross, input.filing_status);
        let state_tax: StateTaxOutcome =
            calculate_for_profile(state, input.filing_status, annual_gross)?;

        let total_tax = federal.total_tax
            + state_tax.tax
            + fica.social_security
            + fica.medicare
            + fica.additional_medicare;
        let net_pay = annual_gross - total_tax;

        let annual = PaycheckBreakdown {
            gross_pay: round_half_up(annual_gross),
            federal_tax: federal.total_tax,
            state_tax: state_tax.tax,
            social_security: fica.social_security,
            medicare: fica.medicare,
            additional_medicare: fica.additional_medicare,
            net_pay: round_half_up(net_pay),
        };
        let per_period = self.per_period(&annual, annual_gross, net_pay, periods)?;
        let effective_rate = self.effective_rate(total_tax, annual_gross);

        debug!(
            tax_year = self.constants.tax_year,
            state = %state.code,
            status = input.filing_status.as_str(),
            frequency = input.frequency.name(),
            %annual_gross,
            %net_pay,
            "paycheck calculated"
        );

        Ok(TaxCalculationResult {
            tax_year: self.constants.tax_year,
            filing_status: input.filing_status,
            state_code: state.code.clone(),
            frequency: input.frequency,
            annual,
            per_period,
            taxable_income,
            state_taxable_income: state_tax.taxable_income,
            federal_brackets: federal.brackets,
            state_brackets: state_tax.brackets,
            marginal_rate: federal.marginal_rate,
            effective_rate,
        })
    }

    /// Rejects amounts the pipeline cannot handle.
    fn validate_amounts(
        &self,
        input: &PaycheckInput,
    ) -> Result<(), TaxEngineError> {
        if input.gross_pay < Decimal::ZERO {
            return Err(TaxEngineError::invalid(format!(
                "gross pay must not be negative, got {}",
                input.gross_pay
            )));
        }

        if let PayFrequency::Hourly { hours_per_week } = input.frequency {
            if hours_per_week <= Decimal::ZERO {
                return Err(TaxEngineError::invalid(format!(
                    "hours per week must be positive for hourly pay, got {hours_per_week}"
                )));
            }
        }

        Ok(())
    }

    fn federal_schedule(
        &self,
        status: FilingStatus,
    ) -> Result<&'a FilingSchedule, TaxEngineError> {
        self.constants.federal_schedule(status).ok_or_else(|| {
            TaxEngineError::invalid(format!(
                "filing status {} ({}) has no federal schedule for {}",
                status.label(),
                status.as_str(),
                self.constants.tax_year
            ))
        })
    }

    /// Gross pay scaled to a full year, unrounded.
    fn annualize(
        &self,
        gross_pay: Decimal,
        periods: Decimal,
    ) -> Result<Decimal, TaxEngineError> {
        gross_pay.checked_mul(periods).ok_or_else(|| {
            TaxEngineError::invalid(format!(
                "gross pay {gross_pay} over {periods} periods is too large to annualize"
            ))
        })
    }

    /// Bracket tax on federal taxable income.
    fn federal_tax(
        &self,
        schedule: &FilingSchedule,
        taxable_income: Decimal,
    ) -> Result<ProgressiveTax, TaxEngineError> {
        ProgressiveTaxCalculator::new(&schedule.brackets).calculate(taxable_income)
    }

    /// Employee Social Security and Medicare on annual wages.
    fn fica(
        &self,
        annual_gross: Decimal,
        status: FilingStatus,
    ) -> FicaWithholding {
        let fica = &self.constants.fica;

        let ss_wages = annual_gross.min(fica.social_security_wage_base);
        let threshold = fica.additional_medicare_thresholds.get(status);
        let excess = floor_at_zero(annual_gross - threshold);

        FicaWithholding {
            social_security: round_half_up(ss_wages * fica.social_security_rate),
            medicare: round_half_up(annual_gross * fica.medicare_rate),
            additional_medicare: round_half_up(excess * fica.additional_medicare_rate),
        }
    }

    /// Divides each annual amount back to one pay period. Gross and net
    /// are split from their unrounded annual values.
    fn per_period(
        &self,
        annual: &PaycheckBreakdown,
        annual_gross: Decimal,
        annual_net: Decimal,
        periods: Decimal,
    ) -> Result<PaycheckBreakdown, TaxEngineError> {
        let split = |amount: Decimal| {
            amount.checked_div(periods).map(round_half_up).ok_or_else(|| {
                TaxEngineError::invalid(format!(
                    "{amount} cannot be split over {periods} periods"
                ))
            })
        };

        Ok(PaycheckBreakdown {
            gross_pay: split(annual_gross)?,
            federal_tax: split(annual.federal_tax)?,
            state_tax: split(annual.state_tax)?,
            social_security: split(annual.social_security)?,
            medicare: split(annual.medicare)?,
            additional_medicare: split(annual.additional_medicare)?,
            net_pay: split(annual_net)?,
        })
    }

    /// Share of gross pay that goes to tax, to four decimal places.
    fn effective_rate(
        &self,
        total_tax: Decimal,
        annual_gross: Decimal,
    ) -> Decimal {
        if annual_gross.is_zero() {
            return Decimal::ZERO;
        }
        (total_tax / annual_gross).round_dp(4)
    }
}

/// Convenience wrapper around [`TaxEngine::calculate`].
///
/// # Errors
///
/// See [`TaxEngine::calculate`].
pub fn calculate_taxes(
    gross_pay: Decimal,
    frequency: PayFrequency,
    filing_status: FilingStatus,
    state_code: &str,
    tax_year: &TaxYearConstants,
) -> Result<TaxCalculationResult, TaxEngineError> {
    TaxEngine::new(tax_year).calculate(&PaycheckInput {
        gross_pay,
        frequency,
        filing_status,
        state_code: state_code.to_string(),
    })
}
