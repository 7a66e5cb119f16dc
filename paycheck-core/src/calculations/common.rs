//! Shared arithmetic helpers for the paycheck calculations.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds to whole cents, with midpoints rounded away from zero.
///
/// Applied only to final totals; intermediate per-bracket amounts stay
/// unrounded so rounding error does not compound.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use paycheck_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(107.555)), dec!(107.56));
/// assert_eq!(round_half_up(dec!(107.554)), dec!(107.55));
/// assert_eq!(round_half_up(dec!(-0.005)), dec!(-0.01));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Clamps negative amounts to zero.
///
/// ```
/// use rust_decimal_macros::dec;
/// use paycheck_core::calculations::common::floor_at_zero;
///
/// assert_eq!(floor_at_zero(dec!(-16100)), dec!(0));
/// assert_eq!(floor_at_zero(dec!(33900)), dec!(33900));
/// ```
pub fn floor_at_zero(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}

/// Annual amount minus a deduction, never below zero.
pub fn after_deduction(
    annual_income: Decimal,
    deduction: Decimal,
) -> Decimal {
    floor_at_zero(annual_income - deduction)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        assert_eq!(round_half_up(dec!(1245.164)), dec!(1245.16));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        assert_eq!(round_half_up(dec!(0.125)), dec!(0.13));
    }

    #[test]
    fn round_half_up_keeps_whole_cents() {
        assert_eq!(round_half_up(dec!(3100.00)), dec!(3100.00));
    }

    #[test]
    fn round_half_up_handles_many_fractional_digits() {
        assert_eq!(round_half_up(dec!(1921.153846153846)), dec!(1921.15));
    }

    #[test]
    fn floor_at_zero_clamps_negative() {
        assert_eq!(floor_at_zero(dec!(-0.01)), dec!(0));
    }

    #[test]
    fn after_deduction_floors_when_deduction_exceeds_income() {
        assert_eq!(after_deduction(dec!(10000), dec!(16100)), dec!(0));
    }

    #[test]
    fn after_deduction_subtracts_deduction() {
        assert_eq!(after_deduction(dec!(50000), dec!(16100)), dec!(33900));
    }
}
