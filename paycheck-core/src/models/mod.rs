mod fica;
mod filing_status;
mod pay_frequency;
mod state_profile;
mod tax_bracket;
mod tax_result;
mod tax_year_constants;

pub use fica::FicaConstants;
pub use filing_status::{FilingStatus, FilingStatusAmounts, ParseFilingStatusError};
pub use pay_frequency::PayFrequency;
pub use state_profile::{StateTaxMethod, StateTaxProfile};
pub use tax_bracket::{BracketSchedule, BracketScheduleError, FilingSchedule, TaxBracket};
pub use tax_result::{BracketDetail, PaycheckBreakdown, TaxCalculationResult};
pub use tax_year_constants::{SourceCitation, TaxYearConstants};
