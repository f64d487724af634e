use thiserror::Error;

use crate::expression::ExpressionError;
use crate::validator::ResultError;

/// Why a candidate is not an equation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("Candidate has no equal sign")]
    MissingEqualSign,
    #[error("Invalid expression: {0}")]
    Expression(#[from] ExpressionError),
    #[error("Invalid result: {0}")]
    Result(#[from] ResultError),
    #[error("Expression evaluates to {expression} but result is {result}")]
    Mismatch { expression: i64, result: i64 },
}
