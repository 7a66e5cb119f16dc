//! Federal income tax and FICA figures for 2026.

use std::collections::BTreeMap;

use paycheck_core::{
    BracketSchedule, BracketScheduleError, FicaConstants, FilingSchedule, FilingStatus,
    FilingStatusAmounts,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub const FICA_2026: FicaConstants = FicaConstants {
    social_security_rate: dec!(0.062),
    social_security_wage_base: dec!(184500),
    medicare_rate: dec!(0.0145),
    additional_medicare_rate: dec!(0.009),
    additional_medicare_thresholds: FilingStatusAmounts {
        single: dec!(200000),
        married_filing_jointly: dec!(250000),
        married_filing_separately: dec!(125000),
        head_of_household: dec!(200000),
        qualifying_surviving_spouse: dec!(200000),
    },
};

pub const STANDARD_DEDUCTION_2026: FilingStatusAmounts = FilingStatusAmounts {
    single: dec!(16100),
    married_filing_jointly: dec!(32200),
    married_filing_separately: dec!(16100),
    head_of_household: dec!(24150),
    qualifying_surviving_spouse: dec!(32200),
};

/// Federal standard deduction for `status` in 2026.
pub fn federal_standard_deduction_2026(status: FilingStatus) -> Decimal {
    STANDARD_DEDUCTION_2026.get(status)
}

// Schedule X
const SINGLE: [(Decimal, Decimal); 7] = [
    (dec!(0), dec!(0.10)),
    (dec!(12400), dec!(0.12)),
    (dec!(50400), dec!(0.22)),
    (dec!(105700), dec!(0.24)),
    (dec!(201775), dec!(0.32)),
    (dec!(256225), dec!(0.35)),
    (dec!(640600), dec!(0.37)),
];

// Schedule Y-1, shared with qualifying surviving spouses
const MARRIED_JOINT: [(Decimal, Decimal); 7] = [
    (dec!(0), dec!(0.10)),
    (dec!(24800), dec!(0.12)),
    (dec!(100800), dec!(0.22)),
    (dec!(211400), dec!(0.24)),
    (dec!(403550), dec!(0.32)),
    (dec!(512450), dec!(0.35)),
    (dec!(768700), dec!(0.37)),
];

// Schedule Y-2
const MARRIED_SEPARATE: [(Decimal, Decimal); 7] = [
    (dec!(0), dec!(0.10)),
    (dec!(12400), dec!(0.12)),
    (dec!(50400), dec!(0.22)),
    (dec!(105700), dec!(0.24)),
    (dec!(201775), dec!(0.32)),
    (dec!(256225), dec!(0.35)),
    (dec!(384350), dec!(0.37)),
];

// Schedule Z
const HEAD_OF_HOUSEHOLD: [(Decimal, Decimal); 7] = [
    (dec!(0), dec!(0.10)),
    (dec!(17700), dec!(0.12)),
    (dec!(67450), dec!(0.22)),
    (dec!(105700), dec!(0.24)),
    (dec!(201750), dec!(0.32)),
    (dec!(256200), dec!(0.35)),
    (dec!(640600), dec!(0.37)),
];

fn thresholds_for(status: FilingStatus) -> &'static [(Decimal, Decimal)] {
    match status {
        FilingStatus::Single => &SINGLE,
        FilingStatus::MarriedFilingJointly | FilingStatus::QualifyingSurvivingSpouse => {
            &MARRIED_JOINT
        }
        FilingStatus::MarriedFilingSeparately => &MARRIED_SEPARATE,
        FilingStatus::HeadOfHousehold => &HEAD_OF_HOUSEHOLD,
    }
}

/// Federal schedules for every filing status.
pub fn federal_schedules_2026() -> Result<BTreeMap<FilingStatus, FilingSchedule>, BracketScheduleError> {
    FilingStatus::ALL
        .into_iter()
        .map(|status| {
            let schedule = FilingSchedule {
                standard_deduction: federal_standard_deduction_2026(status),
                brackets: BracketSchedule::from_thresholds(thresholds_for(status))?,
            };
            Ok::<_, BracketScheduleError>((status, schedule))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn every_status_has_a_valid_schedule() {
        let schedules = federal_schedules_2026().expect("federal tables should validate");

        assert_eq!(schedules.len(), FilingStatus::ALL.len());
        for schedule in schedules.values() {
            assert_eq!(schedule.brackets.brackets().len(), 7);
            assert_eq!(schedule.brackets.top_rate(), dec!(0.37));
        }
    }

    #[test]
    fn surviving_spouse_shares_joint_schedule() {
        let schedules = federal_schedules_2026().unwrap();

        assert_eq!(
            schedules[&FilingStatus::QualifyingSurvivingSpouse],
            schedules[&FilingStatus::MarriedFilingJointly]
        );
    }

    #[test]
    fn separate_filers_reach_top_rate_earlier_than_single() {
        let schedules = federal_schedules_2026().unwrap();
        let top_min = |status: FilingStatus| {
            schedules[&status]
                .brackets
                .brackets()
                .last()
                .map(|b| b.min_income)
                .unwrap()
        };

        assert_eq!(top_min(FilingStatus::Single), dec!(640600));
        assert_eq!(top_min(FilingStatus::MarriedFilingSeparately), dec!(384350));
    }

    #[test]
    fn standard_deductions_by_status() {
        assert_eq!(federal_standard_deduction_2026(FilingStatus::Single), dec!(16100));
        assert_eq!(federal_standard_deduction_2026(FilingStatus::MarriedFilingJointly), dec!(32200));
        assert_eq!(federal_standard_deduction_2026(FilingStatus::HeadOfHousehold), dec!(24150));
    }

    #[test]
    fn fica_thresholds_follow_statute() {
        let thresholds = FICA_2026.additional_medicare_thresholds;

        assert_eq!(thresholds.get(FilingStatus::MarriedFilingJointly), dec!(250000));
        assert_eq!(thresholds.get(FilingStatus::MarriedFilingSeparately), dec!(125000));
        assert_eq!(thresholds.get(FilingStatus::QualifyingSurvivingSpouse), dec!(200000));
        assert_eq!(FICA_2026.max_social_security(), dec!(11439.000));
    }
}
