//! Paycheck tax calculations.
//!
//! [`engine`] orchestrates the federal, state and payroll pieces found in
//! [`progressive`] and [`state`].

pub mod common;
pub mod conversions;
pub mod engine;
pub mod progressive;
pub mod state;

pub use conversions::{hourly_to_salary, salary_to_hourly};
pub use engine::{PaycheckInput, TaxEngine, calculate_taxes};
pub use progressive::{ProgressiveTax, ProgressiveTaxCalculator};
pub use state::{StateTaxOutcome, StateTaxResolver};
