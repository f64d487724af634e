use log::trace;

use crate::expression::errors::ExpressionError;
use crate::expression::token::is_operator;

/// Formatting rules checked before any arithmetic
///
/// # Errors
///
/// Returns an error if the expression is empty, contains a character other
/// than a digit or `+ - * /`, has two operators in a row, starts with `0`,
/// or has any operator immediately followed by `0`. The last rule rejects a
/// zero operand anywhere but the very start as well as leading zeros on
/// later operands.
pub fn validate_expression(expression: &str) -> Result<(), ExpressionError> {
    if expression.is_empty() {
        return Err(ExpressionError::Empty);
    }

    if let Some((position, character)) = expression
        .char_indices()
        .find(|&(_, c)| !c.is_ascii_digit() && !is_operator(c))
    {
        return Err(ExpressionError::UnexpectedCharacter {
            character,
            position,
        });
    }

    let pairs = || expression.char_indices().zip(expression.chars().skip(1));

    let adjacent = pairs().find(|&((_, a), b)| is_operator(a) && is_operator(b));
    if let Some(((position, _), _)) = adjacent {
        trace!("Rejecting '{}': adjacent operators", expression);
        return Err(ExpressionError::AdjacentOperators(position));
    }

    if expression.starts_with('0') {
        trace!("Rejecting '{}': leading zero", expression);
        return Err(ExpressionError::LeadingZero);
    }

    let zero_operand = pairs().find(|&((_, a), b)| !a.is_ascii_digit() && b == '0');
    if let Some(((position, _), _)) = zero_operand {
        trace!("Rejecting '{}': zero operand", expression);
        return Err(ExpressionError::ZeroOperand(position + 1));
    }

    Ok(())
}
