use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A half-open income interval `[min_income, max_income)` taxed at a single
/// marginal rate. `max_income` is `None` for the top bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub min_income: Decimal,
    pub max_income: Option<Decimal>,
    pub rate: Decimal,
}

/// Errors raised while assembling a [`BracketSchedule`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BracketScheduleError {
    #[error("bracket schedule is empty")]
    Empty,

    #[error("first bracket must start at 0, got {0}")]
    FirstBracketNotAtZero(Decimal),

    #[error("bracket {index} has rate {rate} outside [0, 1]")]
    InvalidRate { index: usize, rate: Decimal },

    #[error("bracket {index} upper bound {max} is not above its lower bound {min}")]
    InvertedBounds {
        index: usize,
        min: Decimal,
        max: Decimal,
    },

    #[error("bracket {index} starts at {min} but the previous bracket ends at {previous_max}")]
    NotContiguous {
        index: usize,
        min: Decimal,
        previous_max: Decimal,
    },

    #[error("bracket {0} is unbounded but is not the last bracket")]
    UnboundedBeforeEnd(usize),

    #[error("last bracket must be unbounded, but it ends at {0}")]
    BoundedTop(Decimal),
}

/// An ordered bracket table covering `[0, ∞)` with no gaps or overlaps.
///
/// The invariants are checked once at construction, so calculators can walk
/// the brackets without re-validating them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<TaxBracket>", into = "Vec<TaxBracket>")]
pub struct BracketSchedule {
    brackets: Vec<TaxBracket>,
}

impl BracketSchedule {
    /// Validates and wraps a bracket list.
    ///
    /// # Errors
    ///
    /// Returns [`BracketScheduleError`] if the list is empty, does not start
    /// at zero, has a gap or overlap, has a bounded top bracket, an
    /// unbounded bracket before the end, or a rate outside `[0, 1]`.
    pub fn new(brackets: Vec<TaxBracket>) -> Result<Self, BracketScheduleError> {
        let first = brackets.first().ok_or(BracketScheduleError::Empty)?;
        if first.min_income != Decimal::ZERO {
            return Err(BracketScheduleError::FirstBracketNotAtZero(first.min_income));
        }

        let last_index = brackets.len() - 1;
        let mut previous_max = Decimal::ZERO;

        for (index, bracket) in brackets.iter().enumerate() {
            if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
                return Err(BracketScheduleError::InvalidRate {
                    index,
                    rate: bracket.rate,
                });
            }

            if bracket.min_income != previous_max {
                return Err(BracketScheduleError::NotContiguous {
                    index,
                    min: bracket.min_income,
                    previous_max,
                });
            }

            match bracket.max_income {
                Some(max) if max <= bracket.min_income => {
                    return Err(BracketScheduleError::InvertedBounds {
                        index,
                        min: bracket.min_income,
                        max,
                    });
                }
                Some(max) if index == last_index => {
                    return Err(BracketScheduleError::BoundedTop(max));
                }
                Some(max) => previous_max = max,
                None if index != last_index => {
                    return Err(BracketScheduleError::UnboundedBeforeEnd(index));
                }
                None => {}
            }
        }

        Ok(Self { brackets })
    }

    /// Builds a schedule from `(lower threshold, rate)` pairs; each bracket
    /// ends where the next one begins and the last is unbounded.
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use paycheck_core::BracketSchedule;
    ///
    /// let schedule = BracketSchedule::from_thresholds(&[
    ///     (dec!(0), dec!(0.10)),
    ///     (dec!(12400), dec!(0.12)),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(schedule.brackets()[0].max_income, Some(dec!(12400)));
    /// assert_eq!(schedule.brackets()[1].max_income, None);
    /// ```
    pub fn from_thresholds(thresholds: &[(Decimal, Decimal)]) -> Result<Self, BracketScheduleError> {
        let brackets = thresholds
            .iter()
            .enumerate()
            .map(|(index, &(min_income, rate))| TaxBracket {
                min_income,
                max_income: thresholds.get(index + 1).map(|&(next_min, _)| next_min),
                rate,
            })
            .collect();

        Self::new(brackets)
    }

    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// Rate of the top bracket.
    pub fn top_rate(&self) -> Decimal {
        self.brackets.last().map_or(Decimal::ZERO, |b| b.rate)
    }
}

impl TryFrom<Vec<TaxBracket>> for BracketSchedule {
    type Error = BracketScheduleError;

    fn try_from(brackets: Vec<TaxBracket>) -> Result<Self, Self::Error> {
        Self::new(brackets)
    }
}

impl From<BracketSchedule> for Vec<TaxBracket> {
    fn from(schedule: BracketSchedule) -> Self {
        schedule.brackets
    }
}

/// Standard deduction and bracket table that apply to one filing status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilingSchedule {
    pub standard_deduction: Decimal,
    pub brackets: BracketSchedule,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn bracket(
        min: Decimal,
        max: Option<Decimal>,
        rate: Decimal,
    ) -> TaxBracket {
        TaxBracket {
            min_income: min,
            max_income: max,
            rate,
        }
    }

    #[test]
    fn new_accepts_contiguous_schedule() {
        let schedule = BracketSchedule::new(vec![
            bracket(dec!(0), Some(dec!(10000)), dec!(0.10)),
            bracket(dec!(10000), Some(dec!(40000)), dec!(0.12)),
            bracket(dec!(40000), None, dec!(0.22)),
        ])
        .expect("schedule should be valid");

        assert_eq!(schedule.brackets().len(), 3);
        assert_eq!(schedule.top_rate(), dec!(0.22));
    }

    #[test]
    fn new_accepts_single_unbounded_bracket() {
        let schedule = BracketSchedule::new(vec![bracket(dec!(0), None, dec!(0.05))]);

        assert!(schedule.is_ok());
    }

    #[test]
    fn new_rejects_empty_schedule() {
        assert_eq!(BracketSchedule::new(vec![]), Err(BracketScheduleError::Empty));
    }

    #[test]
    fn new_rejects_schedule_not_starting_at_zero() {
        let result = BracketSchedule::new(vec![bracket(dec!(100), None, dec!(0.10))]);

        assert_eq!(result, Err(BracketScheduleError::FirstBracketNotAtZero(dec!(100))));
    }

    #[test]
    fn new_rejects_gap_between_brackets() {
        let result = BracketSchedule::new(vec![
            bracket(dec!(0), Some(dec!(10000)), dec!(0.10)),
            bracket(dec!(10001), None, dec!(0.12)),
        ]);

        assert_eq!(
            result,
            Err(BracketScheduleError::NotContiguous {
                index: 1,
                min: dec!(10001),
                previous_max: dec!(10000),
            })
        );
    }

    #[test]
    fn new_rejects_overlapping_brackets() {
        let result = BracketSchedule::new(vec![
            bracket(dec!(0), Some(dec!(10000)), dec!(0.10)),
            bracket(dec!(9000), None, dec!(0.12)),
        ]);

        assert!(matches!(result, Err(BracketScheduleError::NotContiguous { index: 1, .. })));
    }

    #[test]
    fn new_rejects_bounded_top_bracket() {
        let result = BracketSchedule::new(vec![bracket(dec!(0), Some(dec!(10000)), dec!(0.10))]);

        assert_eq!(result, Err(BracketScheduleError::BoundedTop(dec!(10000))));
    }

    #[test]
    fn new_rejects_unbounded_middle_bracket() {
        let result = BracketSchedule::new(vec![
            bracket(dec!(0), None, dec!(0.10)),
            bracket(dec!(10000), None, dec!(0.12)),
        ]);

        assert_eq!(result, Err(BracketScheduleError::UnboundedBeforeEnd(0)));
    }

    #[test]
    fn new_rejects_inverted_bounds() {
        let result = BracketSchedule::new(vec![
            bracket(dec!(0), Some(dec!(0)), dec!(0.10)),
            bracket(dec!(0), None, dec!(0.12)),
        ]);

        assert!(matches!(result, Err(BracketScheduleError::InvertedBounds { index: 0, .. })));
    }

    #[test]
    fn new_rejects_rate_above_one() {
        let result = BracketSchedule::new(vec![bracket(dec!(0), None, dec!(1.5))]);

        assert_eq!(
            result,
            Err(BracketScheduleError::InvalidRate {
                index: 0,
                rate: dec!(1.5),
            })
        );
    }

    #[test]
    fn new_rejects_negative_rate() {
        let result = BracketSchedule::new(vec![bracket(dec!(0), None, dec!(-0.01))]);

        assert!(matches!(result, Err(BracketScheduleError::InvalidRate { .. })));
    }

    #[test]
    fn from_thresholds_links_upper_bounds() {
        let schedule =
            BracketSchedule::from_thresholds(&[(dec!(0), dec!(0.01)), (dec!(5000), dec!(0.02))])
                .unwrap();

        assert_eq!(
            schedule.brackets(),
            &[
                bracket(dec!(0), Some(dec!(5000)), dec!(0.01)),
                bracket(dec!(5000), None, dec!(0.02)),
            ]
        );
    }

    #[test]
    fn from_thresholds_rejects_unsorted_thresholds() {
        let result =
            BracketSchedule::from_thresholds(&[(dec!(0), dec!(0.01)), (dec!(5000), dec!(0.02)), (dec!(4000), dec!(0.03))]);

        assert!(result.is_err());
    }
}
