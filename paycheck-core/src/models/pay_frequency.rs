use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const WEEKS_PER_YEAR: i64 = 52;

/// How often the gross amount passed to the engine is earned.
///
/// For [`PayFrequency::Hourly`] the gross amount is the hourly rate and a
/// "period" is one hour of work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PayFrequency {
    Annual,
    Monthly,
    Semimonthly,
    Biweekly,
    Weekly,
    Hourly { hours_per_week: Decimal },
}

impl PayFrequency {
    /// Number of periods in a year. Hourly pay counts worked hours over
    /// 52 weeks, and is `None` when that count does not fit in a `Decimal`.
    pub fn periods_per_year(&self) -> Option<Decimal> {
        match self {
            Self::Annual => Some(Decimal::ONE),
            Self::Monthly => Some(Decimal::from(12)),
            Self::Semimonthly => Some(Decimal::from(24)),
            Self::Biweekly => Some(Decimal::from(26)),
            Self::Weekly => Some(Decimal::from(WEEKS_PER_YEAR)),
            Self::Hourly { hours_per_week } => {
                hours_per_week.checked_mul(Decimal::from(WEEKS_PER_YEAR))
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Annual => "annual",
            Self::Monthly => "monthly",
            Self::Semimonthly => "semimonthly",
            Self::Biweekly => "biweekly",
            Self::Weekly => "weekly",
            Self::Hourly { .. } => "hourly",
        }
    }

    /// Parses a frequency name. `hours_per_week` is only consulted for
    /// `hourly`.
    pub fn parse(
        name: &str,
        hours_per_week: Option<Decimal>,
    ) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "annual" | "annually" | "yearly" | "year" => Some(Self::Annual),
            "monthly" | "month" => Some(Self::Monthly),
            "semimonthly" | "semi-monthly" => Some(Self::Semimonthly),
            "biweekly" | "bi-weekly" => Some(Self::Biweekly),
            "weekly" | "week" => Some(Self::Weekly),
            "hourly" | "hour" => hours_per_week.map(|hours_per_week| Self::Hourly { hours_per_week }),
            _ => None,
        }
    }
}

impl fmt::Display for PayFrequency {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Hourly { hours_per_week } => write!(f, "hourly ({hours_per_week} h/week)"),
            other => f.write_str(other.name()),
        }
    }
}
