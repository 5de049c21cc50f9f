use thiserror::Error;

pub type GgResult<T> = Result<T, GgError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GgError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Non-positive value for {what}: {value}")]
    NonPositive { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}
