use std::fmt;
use std::str::FromStr;

use crate::filter::core::EquationFilter;
use crate::filter::errors::Rejection;

/// An accepted `expression=result` string
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Equation {
    text: String,
    equals_index: usize,
    value: i64,
}

impl Equation {
    /// # Errors
    ///
    /// Returns the rejection reason if `candidate` is not a valid equation.
    pub fn parse(candidate: &str) -> Result<Self, Rejection> {
        let value = EquationFilter::check(candidate)?;
        let equals_index = candidate.find('=').ok_or(Rejection::MissingEqualSign)?;
        Ok(Self {
            text: candidate.to_string(),
            equals_index,
            value,
        })
    }

    pub fn expression(&self) -> &str {
        self.text.get(..self.equals_index).unwrap_or_default()
    }

    pub fn result(&self) -> &str {
        self.text.get(self.equals_index + 1..).unwrap_or_default()
    }

    /// Value both sides evaluate to
    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl FromStr for Equation {
    type Err = Rejection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl AsRef<str> for Equation {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
