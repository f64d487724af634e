use crate::expression::errors::ExpressionError;
use crate::pattern::constants::OPERATORS;

/// Lexical unit of an expression after sign absorption. Additive operators
/// never survive lexing; they become the sign of the following number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Number(i64),
    Mul,
    Div,
}

#[inline]
pub fn is_operator(c: char) -> bool {
    OPERATORS.contains(&c)
}

/// Single forward scan merging digit runs into numbers and folding each
/// `+`/`-` into the sign of the number after it.
///
/// # Errors
///
/// Returns an error for characters outside the game alphabet, a sign not
/// followed by a number, or a number that does not fit in an `i64`.
pub fn tokenize(expression: &str) -> Result<Vec<Token>, ExpressionError> {
    let mut tokens = Vec::new();
    let mut sign: i64 = 1;
    let mut signed = false;
    let mut number: Option<i64> = None;

    for (position, c) in expression.char_indices() {
        if let Some(digit) = c.to_digit(10) {
            let value = number
                .unwrap_or(0)
                .checked_mul(10)
                .and_then(|v| v.checked_add(i64::from(digit)))
                .ok_or(ExpressionError::Overflow)?;
            number = Some(value);
            continue;
        }

        if let Some(value) = number.take() {
            tokens.push(Token::Number(sign * value));
            sign = 1;
            signed = false;
        }

        match c {
            '+' | '-' => {
                if signed {
                    return Err(ExpressionError::DanglingOperator);
                }
                sign = if c == '-' { -1 } else { 1 };
                signed = true;
            }
            '*' | '/' => {
                if signed {
                    return Err(ExpressionError::DanglingOperator);
                }
                tokens.push(if c == '*' { Token::Mul } else { Token::Div });
            }
            character => {
                return Err(ExpressionError::UnexpectedCharacter {
                    character,
                    position,
                });
            }
        }
    }

    match number {
        Some(value) => tokens.push(Token::Number(sign * value)),
        None if signed => return Err(ExpressionError::DanglingOperator),
        None => {}
    }

    Ok(tokens)
}
