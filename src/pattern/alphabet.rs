use std::fmt;

use super::constants::{DIGITS, EQUALS, NONZERO_DIGITS, OPERATORS};

/// The set of characters allowed at one position of a candidate, in
/// enumeration order
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PositionAlphabet {
    symbols: Vec<char>,
}

impl PositionAlphabet {
    pub fn nonzero_digits() -> Self {
        Self {
            symbols: NONZERO_DIGITS.to_vec(),
        }
    }

    pub fn digits() -> Self {
        Self {
            symbols: DIGITS.to_vec(),
        }
    }

    pub fn digits_and_operators() -> Self {
        Self {
            symbols: DIGITS.iter().chain(OPERATORS.iter()).copied().collect(),
        }
    }

    pub fn equals() -> Self {
        Self::singleton(EQUALS)
    }

    pub fn singleton(symbol: char) -> Self {
        Self {
            symbols: vec![symbol],
        }
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }

    pub fn is_singleton(&self) -> bool {
        self.symbols.len() == 1
    }
}

impl fmt::Display for PositionAlphabet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let [only] = self.symbols.as_slice() {
            return write!(f, "{}", only);
        }

        let label = if self.symbols == NONZERO_DIGITS {
            "1-9".to_string()
        } else if self.symbols == DIGITS {
            "0-9".to_string()
        } else if *self == Self::digits_and_operators() {
            "0-9+-*/".to_string()
        } else {
            self.symbols.iter().collect()
        };
        write!(f, "[{}]", label)
    }
}
