//! Linear salary ⇄ hourly conversions over a 52-week year.
//!
//! Results are not rounded, so converting one way and back returns the
//! original amount.

use rust_decimal::Decimal;

use crate::error::TaxEngineError;

const WEEKS_PER_YEAR: i64 = 52;

/// Annual salary for an hourly rate.
///
/// # Errors
///
/// [`TaxEngineError::InvalidInput`] if either argument is zero or negative,
/// or the salary does not fit in a `Decimal`.
///
/// ```
/// use rust_decimal_macros::dec;
/// use paycheck_core::calculations::hourly_to_salary;
///
/// assert_eq!(hourly_to_salary(dec!(25), dec!(40)).unwrap(), dec!(52000));
/// ```
pub fn hourly_to_salary(
    hourly_rate: Decimal,
    hours_per_week: Decimal,
) -> Result<Decimal, TaxEngineError> {
    require_positive("hourly rate", hourly_rate)?;
    require_positive("hours per week", hours_per_week)?;

    hourly_rate
        .checked_mul(yearly_hours(hours_per_week)?)
        .ok_or_else(|| TaxEngineError::invalid(format!("hourly rate {hourly_rate} is too large")))
}

/// Hourly rate for an annual salary.
///
/// # Errors
///
/// [`TaxEngineError::InvalidInput`] if either argument is zero or negative,
/// or the rate does not fit in a `Decimal`.
///
/// ```
/// use rust_decimal_macros::dec;
/// use paycheck_core::calculations::salary_to_hourly;
///
/// assert_eq!(salary_to_hourly(dec!(52000), dec!(40)).unwrap(), dec!(25));
/// ```
pub fn salary_to_hourly(
    annual_salary: Decimal,
    hours_per_week: Decimal,
) -> Result<Decimal, TaxEngineError> {
    require_positive("annual salary", annual_salary)?;
    require_positive("hours per week", hours_per_week)?;

    annual_salary
        .checked_div(yearly_hours(hours_per_week)?)
        .ok_or_else(|| {
            TaxEngineError::invalid(format!(
                "annual salary {annual_salary} over {hours_per_week} hours a week is too large"
            ))
        })
}

fn yearly_hours(hours_per_week: Decimal) -> Result<Decimal, TaxEngineError> {
    hours_per_week
        .checked_mul(Decimal::from(WEEKS_PER_YEAR))
        .ok_or_else(|| TaxEngineError::invalid(format!("{hours_per_week} hours per week is too large")))
}

fn require_positive(
    name: &str,
    value: Decimal,
) -> Result<(), TaxEngineError> {
    if value <= Decimal::ZERO {
        return Err(TaxEngineError::invalid(format!("{name} must be positive, got {value}")));
    }
    Ok(())
}
