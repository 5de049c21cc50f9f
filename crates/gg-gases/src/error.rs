//! Gas catalog errors.

use gg_core::GgError;
use thiserror::Error;

/// Result type for catalog operations.
pub type GasResult<T> = Result<T, GasError>;

/// Errors raised by the gas property catalog.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GasError {
    /// Requested name is not a catalog key or known alias.
    #[error("Unknown gas: '{name}'")]
    UnknownGas { name: String },

    /// A catalog record breaks one of its own invariants.
    #[error("Inconsistent property record for {gas}: {what}")]
    InconsistentRecord { gas: &'static str, what: &'static str },
}

impl From<GasError> for GgError {
    fn from(err: GasError) -> Self {
        match err {
            GasError::UnknownGas { .. } => GgError::InvalidArg {
                what: "unknown gas name",
            },
            GasError::InconsistentRecord { what, .. } => GgError::InvalidArg { what },
        }
    }
}
