use thiserror::Error;

/// Errors that can occur while parsing the result side of an equation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResultError {
    #[error("Result cannot be empty")]
    Empty,
    #[error("Result must contain only digits: {0}")]
    InvalidDigits(String),
    #[error("Result has a leading zero: {0}")]
    LeadingZero(String),
    #[error("Result does not fit in a 64-bit integer: {0}")]
    Overflow(String),
}
