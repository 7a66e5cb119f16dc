use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::FilingStatusAmounts;

/// Employee-side payroll tax parameters for one tax year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FicaConstants {
    /// Employee Social Security rate (6.2%).
    pub social_security_rate: Decimal,

    /// Earnings above this amount owe no Social Security tax.
    pub social_security_wage_base: Decimal,

    /// Employee Medicare rate (1.45%).
    pub medicare_rate: Decimal,

    /// Additional Medicare rate on wages above the filing-status threshold.
    pub additional_medicare_rate: Decimal,

    pub additional_medicare_thresholds: FilingStatusAmounts,
}

impl FicaConstants {
    /// Highest Social Security amount any single earner can owe.
    pub fn max_social_security(&self) -> Decimal {
        self.social_security_wage_base * self.social_security_rate
    }
}
