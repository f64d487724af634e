use log::trace;
use num_rational::Rational64;
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, Zero};

use crate::expression::errors::ExpressionError;
use crate::expression::token::{Token, tokenize};
use crate::expression::validation::validate_expression;

/// Evaluates the left-hand side of a candidate equation.
///
/// Products and quotients bind tighter than sums and are resolved left to
/// right in exact rational arithmetic. Only the final total has to be a
/// whole number, so `8/10*5` evaluates to 4.
///
/// # Errors
///
/// Returns an error if the expression breaks a formatting rule, divides by
/// zero, overflows, or does not total to a whole number.
pub fn evaluate(expression: &str) -> Result<i64, ExpressionError> {
    validate_expression(expression)?;
    let tokens = tokenize(expression)?;
    let total = reduce(&tokens)?;

    if !total.is_integer() {
        trace!("Rejecting '{}': total {} is fractional", expression, total);
        return Err(ExpressionError::NonIntegral(total));
    }
    Ok(total.to_integer())
}

/// One pass over the tokens. Each `*` or `/` folds the next number into the
/// most recent term; any other number opens a new term. The terms are summed.
fn reduce(tokens: &[Token]) -> Result<Rational64, ExpressionError> {
    let mut terms: Vec<Rational64> = Vec::with_capacity(tokens.len());
    let mut pending: Option<Token> = None;

    for &token in tokens {
        match token {
            Token::Number(n) => {
                let value = Rational64::from_integer(n);
                match pending.take() {
                    Some(op) => {
                        let term = terms.last_mut().ok_or(ExpressionError::DanglingOperator)?;
                        *term = apply(op, term, &value)?;
                    }
                    None => terms.push(value),
                }
            }
            Token::Mul | Token::Div => {
                if pending.is_some() || terms.is_empty() {
                    return Err(ExpressionError::DanglingOperator);
                }
                pending = Some(token);
            }
        }
    }

    if pending.is_some() {
        return Err(ExpressionError::DanglingOperator);
    }

    terms.iter().try_fold(Rational64::zero(), |acc, term| {
        acc.checked_add(term).ok_or(ExpressionError::Overflow)
    })
}

fn apply(op: Token, left: &Rational64, right: &Rational64) -> Result<Rational64, ExpressionError> {
    match op {
        Token::Mul => left.checked_mul(right).ok_or(ExpressionError::Overflow),
        Token::Div => {
            if right.is_zero() {
                return Err(ExpressionError::DivisionByZero);
            }
            left.checked_div(right).ok_or(ExpressionError::Overflow)
        }
        Token::Number(_) => Err(ExpressionError::DanglingOperator),
    }
}
