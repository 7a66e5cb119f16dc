use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{FilingSchedule, FilingStatus};

/// How a state taxes wage income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum StateTaxMethod {
    NoIncomeTax,
    Flat {
        rate: Decimal,
        /// Filing statuses missing from this map are not supported.
        standard_deductions: BTreeMap<FilingStatus, Decimal>,
    },
    Progressive {
        /// Filing statuses missing from this map are not supported.
        schedules: BTreeMap<FilingStatus, FilingSchedule>,
    },
}

impl StateTaxMethod {
    pub fn name(&self) -> &'static str {
        match self {
            Self::NoIncomeTax => "none",
            Self::Flat { .. } => "flat",
            Self::Progressive { .. } => "progressive",
        }
    }

    pub fn supports(
        &self,
        status: FilingStatus,
    ) -> bool {
        match self {
            Self::NoIncomeTax => true,
            Self::Flat {
                standard_deductions,
                ..
            } => standard_deductions.contains_key(&status),
            Self::Progressive { schedules } => schedules.contains_key(&status),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateTaxProfile {
    /// Two-letter postal code, upper case.
    pub code: String,
    pub name: String,
    pub method: StateTaxMethod,
}

impl StateTaxProfile {
    pub fn new(
        code: &str,
        name: &str,
        method: StateTaxMethod,
    ) -> Self {
        Self {
            code: code.trim().to_ascii_uppercase(),
            name: name.to_string(),
            method,
        }
    }
}
