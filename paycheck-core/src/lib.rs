pub mod calculations;
pub mod error;
pub mod models;

pub use calculations::PaycheckInput;
pub use error::TaxEngineError;
pub use models::*;
