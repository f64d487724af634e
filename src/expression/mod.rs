//! Left-hand side evaluation under the game's formatting and precedence rules

mod errors;
mod eval;
mod token;
mod validation;

pub use errors::ExpressionError;
pub use eval::evaluate;
pub use token::{Token, is_operator, tokenize};
pub use validation::validate_expression;
