//! Conduction model errors.

use gg_core::GgError;
use gg_gases::GasError;
use thiserror::Error;

/// Result type for conduction model operations.
pub type ConductionResult<T> = Result<T, ConductionError>;

/// Errors raised while evaluating the gap conductance.
///
/// Every variant is a caller or catalog defect; nothing here is retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConductionError {
    /// Non-positive or non-finite temperature, pressure, separation or molar mass.
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] GgError),

    /// Blend denominator `Kn + a·α·Λ·P·r` evaluated to exactly zero.
    #[error("Division by zero in heat transfer blend at sample {index}")]
    DivisionByZero { index: usize },

    /// Average temperature outside the conductivity fit range (strict mode only).
    #[error("Average temperature {t_k} K outside fit range [{t_min_k}, {t_max_k}] K for {gas}")]
    OutOfFitRange {
        gas: &'static str,
        t_k: f64,
        t_min_k: f64,
        t_max_k: f64,
    },

    /// Sweep definition or sweep/variable mismatch.
    #[error("Invalid sweep: {reason}")]
    InvalidSweep { reason: String },

    /// Gas lookup failure.
    #[error(transparent)]
    Gas(#[from] GasError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ConductionError::from(GgError::NonPositive {
            what: "surface temperature 1",
            value: 0.0,
        });
        assert!(err.to_string().contains("surface temperature 1"));

        let err = ConductionError::OutOfFitRange {
            gas: "Xenon",
            t_k: 900.0,
            t_min_k: 100.0,
            t_max_k: 600.0,
        };
        assert!(err.to_string().contains("Xenon"));
    }

    #[test]
    fn gas_error_passes_through() {
        let err: ConductionError = GasError::UnknownGas {
            name: "Unobtainium".into(),
        }
        .into();
        assert_eq!(err.to_string(), "Unknown gas: 'Unobtainium'");
    }
}
