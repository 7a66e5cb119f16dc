//! Reference tables for the paycheck engine.
//!
//! [`tables`] holds the built-in 2026 federal, FICA and state figures.
//! [`loader`] overlays bracket and standard deduction tables read from CSV.

pub mod loader;
pub mod tables;

pub use loader::{
    BracketRecord, DeductionRecord, FEDERAL_JURISDICTION, LoadedTables, TableLoader,
    TableLoaderError,
};
pub use tables::{
    BuiltinTableError, FICA_2026, LATEST_TAX_YEAR, STANDARD_DEDUCTION_2026, available_tax_years,
    builtin_tax_year, federal_schedules_2026, federal_standard_deduction_2026,
    state_profiles_2026, tax_year_2026,
};
