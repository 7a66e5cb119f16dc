use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{FilingStatus, PayFrequency};

/// Income and tax attributed to one bracket. Amounts are unrounded; only
/// the schedule total is rounded to cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketDetail {
    pub min_income: Decimal,
    pub max_income: Option<Decimal>,
    pub rate: Decimal,
    pub amount_taxed: Decimal,
    pub tax: Decimal,
}

/// Gross-to-net amounts over one span of time (a year or a pay period).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaycheckBreakdown {
    pub gross_pay: Decimal,
    pub federal_tax: Decimal,
    pub state_tax: Decimal,
    pub social_security: Decimal,
    pub medicare: Decimal,
    pub additional_medicare: Decimal,
    pub net_pay: Decimal,
}

impl PaycheckBreakdown {
    pub fn total_tax(&self) -> Decimal {
        self.federal_tax
            + self.state_tax
            + self.social_security
            + self.medicare
            + self.additional_medicare
    }
}

/// Complete output of one engine call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxCalculationResult {
    pub tax_year: i32,
    pub filing_status: FilingStatus,
    pub state_code: String,
    pub frequency: PayFrequency,

    pub annual: PaycheckBreakdown,
    pub per_period: PaycheckBreakdown,

    /// Annual gross minus the federal standard deduction, floored at zero.
    pub taxable_income: Decimal,
    pub state_taxable_income: Decimal,

    pub federal_brackets: Vec<BracketDetail>,
    pub state_brackets: Vec<BracketDetail>,

    /// Federal rate applied to the last taxed dollar; the first bracket's
    /// rate when there is no taxable income.
    pub marginal_rate: Decimal,

    /// Total tax divided by annual gross, zero when gross is zero.
    pub effective_rate: Decimal,
}
