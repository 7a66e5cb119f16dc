//! Marginal bracket calculation.
//!
//! Each bracket taxes only the slice of income that falls inside it:
//!
//! | Income slice                           | Taxed at        |
//! |----------------------------------------|-----------------|
//! | `[0, b1.max)`                          | `b1.rate`       |
//! | `[b2.min, min(b2.max, income))`        | `b2.rate`       |
//! | ...                                    | ...             |
//!
//! Per-bracket taxes are kept at full precision and summed; the sum is
//! rounded to cents once.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use paycheck_core::BracketSchedule;
//! use paycheck_core::calculations::ProgressiveTaxCalculator;
//!
//! let schedule = BracketSchedule::from_thresholds(&[
//!     (dec!(0), dec!(0.10)),
//!     (dec!(12400), dec!(0.12)),
//!     (dec!(50400), dec!(0.22)),
//! ])
//! .unwrap();
//!
//! let result = ProgressiveTaxCalculator::new(&schedule)
//!     .calculate(dec!(33900))
//!     .unwrap();
//!
//! assert_eq!(result.total_tax, dec!(3820.00));
//! assert_eq!(result.brackets.len(), 2);
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::calculations::common::round_half_up;
use crate::error::TaxEngineError;
use crate::models::{BracketDetail, BracketSchedule};

/// Output of a progressive calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressiveTax {
    /// Sum of per-bracket taxes, rounded to cents.
    pub total_tax: Decimal,

    /// One entry per bracket that taxed a nonzero amount, ascending.
    pub brackets: Vec<BracketDetail>,

    /// Rate of the bracket holding the last dollar of income.
    pub marginal_rate: Decimal,
}

#[derive(Debug, Clone, Copy)]
pub struct ProgressiveTaxCalculator<'a> {
    schedule: &'a BracketSchedule,
}

impl<'a> ProgressiveTaxCalculator<'a> {
    pub fn new(schedule: &'a BracketSchedule) -> Self {
        Self { schedule }
    }

    /// Computes tax on `taxable_income`.
    ///
    /// # Errors
    ///
    /// Returns [`TaxEngineError::InvalidInput`] if `taxable_income` is
    /// negative.
    pub fn calculate(
        &self,
        taxable_income: Decimal,
    ) -> Result<ProgressiveTax, TaxEngineError> {
        if taxable_income < Decimal::ZERO {
            return Err(TaxEngineError::invalid(format!(
                "taxable income must not be negative, got {taxable_income}"
            )));
        }

        let mut details = Vec::new();
        let mut unrounded_total = Decimal::ZERO;

        for bracket in self.schedule.brackets() {
            if bracket.min_income >= taxable_income {
                break;
            }

            let upper = bracket
                .max_income
                .map_or(taxable_income, |max| max.min(taxable_income));
            let amount_taxed = upper - bracket.min_income;
            let tax = amount_taxed * bracket.rate;

            trace!(
                min = %bracket.min_income,
                rate = %bracket.rate,
                %amount_taxed,
                %tax,
                "bracket applied"
            );

            unrounded_total += tax;
            details.push(BracketDetail {
                min_income: bracket.min_income,
                max_income: bracket.max_income,
                rate: bracket.rate,
                amount_taxed,
                tax,
            });
        }

        let marginal_rate = self.marginal_rate(&details);

        Ok(ProgressiveTax {
            total_tax: round_half_up(unrounded_total),
            brackets: details,
            marginal_rate,
        })
    }

    fn marginal_rate(
        &self,
        details: &[BracketDetail],
    ) -> Decimal {
        details
            .last()
            .map(|d| d.rate)
            .or_else(|| self.schedule.brackets().first().map(|b| b.rate))
            .unwrap_or(Decimal::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::{prop_assert, prop_assert_eq, proptest};
    use rust_decimal_macros::dec;

    use super::*;

    /// 2026 federal schedule for single filers.
    fn single_schedule() -> BracketSchedule {
        BracketSchedule::from_thresholds(&[
            (dec!(0), dec!(0.10)),
            (dec!(12400), dec!(0.12)),
            (dec!(50400), dec!(0.22)),
            (dec!(105700), dec!(0.24)),
            (dec!(201775), dec!(0.32)),
            (dec!(256225), dec!(0.35)),
            (dec!(640600), dec!(0.37)),
        ])
        .expect("valid schedule")
    }

    #[test]
    fn calculate_returns_zero_for_zero_income() {
        let schedule = single_schedule();

        let result = ProgressiveTaxCalculator::new(&schedule).calculate(dec!(0)).unwrap();

        assert_eq!(result.total_tax, dec!(0));
        assert!(result.brackets.is_empty());
        assert_eq!(result.marginal_rate, dec!(0.10));
    }

    #[test]
    fn calculate_rejects_negative_income() {
        let schedule = single_schedule();

        let result = ProgressiveTaxCalculator::new(&schedule).calculate(dec!(-1));

        assert!(matches!(result, Err(TaxEngineError::InvalidInput(_))));
    }

    #[test]
    fn calculate_within_first_bracket() {
        let schedule = single_schedule();

        let result = ProgressiveTaxCalculator::new(&schedule).calculate(dec!(10000)).unwrap();

        assert_eq!(result.total_tax, dec!(1000.00));
        assert_eq!(result.brackets.len(), 1);
        assert_eq!(result.brackets[0].amount_taxed, dec!(10000));
    }

    #[test]
    fn calculate_exactly_at_bracket_boundary_stays_in_lower_bracket() {
        let schedule = single_schedule();

        let result = ProgressiveTaxCalculator::new(&schedule).calculate(dec!(12400)).unwrap();

        assert_eq!(result.total_tax, dec!(1240.00));
        assert_eq!(result.brackets.len(), 1);
        assert_eq!(result.marginal_rate, dec!(0.10));
    }

    #[test]
    fn calculate_spans_two_brackets() {
        let schedule = single_schedule();

        let result = ProgressiveTaxCalculator::new(&schedule).calculate(dec!(33900)).unwrap();

        // 12,400 × 10% + 21,500 × 12% = 1,240 + 2,580
        assert_eq!(result.total_tax, dec!(3820.00));
        assert_eq!(
            result.brackets,
            vec![
                BracketDetail {
                    min_income: dec!(0),
                    max_income: Some(dec!(12400)),
                    rate: dec!(0.10),
                    amount_taxed: dec!(12400),
                    tax: dec!(1240.00),
                },
                BracketDetail {
                    min_income: dec!(12400),
                    max_income: Some(dec!(50400)),
                    rate: dec!(0.12),
                    amount_taxed: dec!(21500),
                    tax: dec!(2580.00),
                },
            ]
        );
        assert_eq!(result.marginal_rate, dec!(0.12));
    }

    #[test]
    fn calculate_reaches_top_bracket() {
        let schedule = single_schedule();

        let result = ProgressiveTaxCalculator::new(&schedule).calculate(dec!(700000)).unwrap();

        // 1,240 + 4,560 + 12,166 + 23,058 + 17,424 + 134,531.25 + 21,978
        assert_eq!(result.total_tax, dec!(214957.25));
        assert_eq!(result.brackets.len(), 7);
        assert_eq!(result.brackets[6].max_income, None);
        assert_eq!(result.marginal_rate, dec!(0.37));
    }

    #[test]
    fn calculate_rounds_only_the_total() {
        let schedule =
            BracketSchedule::from_thresholds(&[(dec!(0), dec!(0.015)), (dec!(100.33), dec!(0.015))])
                .unwrap();

        // Each bracket alone rounds to 1.50 and 0.00 (1.50495, 0.00495);
        // rounding the sum keeps the extra cent.
        let result = ProgressiveTaxCalculator::new(&schedule).calculate(dec!(100.66)).unwrap();

        assert_eq!(result.brackets[0].tax, dec!(1.50495));
        assert_eq!(result.brackets[1].tax, dec!(0.00495));
        assert_eq!(result.total_tax, dec!(1.51));
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]

        #[test]
        fn prop_bracket_amounts_sum_to_taxable_income(cents in 0u64..200_000_000) {
            let schedule = single_schedule();
            let income = Decimal::new(cents as i64, 2);

            let result = ProgressiveTaxCalculator::new(&schedule).calculate(income).unwrap();
            let taxed: Decimal = result.brackets.iter().map(|d| d.amount_taxed).sum();

            prop_assert_eq!(taxed, income);
        }

        #[test]
        fn prop_tax_is_non_decreasing_in_income(
            cents in 0u64..200_000_000,
            extra in 0u64..5_000_000,
        ) {
            let schedule = single_schedule();
            let calculator = ProgressiveTaxCalculator::new(&schedule);
            let lower = Decimal::new(cents as i64, 2);
            let higher = Decimal::new((cents + extra) as i64, 2);

            let lower_tax = calculator.calculate(lower).unwrap().total_tax;
            let higher_tax = calculator.calculate(higher).unwrap().total_tax;

            prop_assert!(higher_tax >= lower_tax);
        }
    }
}
