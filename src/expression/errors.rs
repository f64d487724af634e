use num_rational::Rational64;
use thiserror::Error;

/// Reasons an expression is invalid. None of these are program faults.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpressionError {
    #[error("Expression is empty")]
    Empty,
    #[error("Unexpected character '{character}' at position {position}")]
    UnexpectedCharacter { character: char, position: usize },
    #[error("Adjacent operators at position {0}")]
    AdjacentOperators(usize),
    #[error("Expression starts with a zero")]
    LeadingZero,
    #[error("Operand at position {0} starts with a zero")]
    ZeroOperand(usize),
    #[error("Operator without an operand")]
    DanglingOperator,
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Arithmetic overflow")]
    Overflow,
    #[error("Total {0} is not a whole number")]
    NonIntegral(Rational64),
}
