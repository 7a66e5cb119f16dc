use thiserror::Error;

/// Validation failures reported before any tax is computed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaxEngineError {
    /// A negative amount, non-positive hours, or a filing status the
    /// jurisdiction does not support.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The state code is not present in the tax year's tables.
    #[error("unknown jurisdiction '{0}'")]
    UnknownJurisdiction(String),
}

impl TaxEngineError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}
