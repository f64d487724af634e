use std::fmt;

use crate::iterator::CandidateIterator;

use super::alphabet::PositionAlphabet;

/// Per-position alphabets for one placement of the equal sign
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    alphabets: Vec<PositionAlphabet>,
    equals_index: usize,
}

impl Pattern {
    pub(crate) fn new(alphabets: Vec<PositionAlphabet>, equals_index: usize) -> Self {
        Self {
            alphabets,
            equals_index,
        }
    }

    pub fn alphabets(&self) -> &[PositionAlphabet] {
        &self.alphabets
    }

    /// Length of every candidate this pattern produces
    pub fn len(&self) -> usize {
        self.alphabets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alphabets.is_empty()
    }

    pub fn equals_index(&self) -> usize {
        self.equals_index
    }

    pub fn expression_len(&self) -> usize {
        self.equals_index
    }

    pub fn result_len(&self) -> usize {
        self.len().saturating_sub(self.equals_index + 1)
    }

    /// Closed-form size of the candidate set
    pub fn candidate_count(&self) -> u64 {
        self.alphabets
            .iter()
            .map(|alphabet| alphabet.len() as u64)
            .product()
    }

    pub fn candidates(&self) -> CandidateIterator<'_> {
        CandidateIterator::new(self)
    }

    /// Splits the pattern on its first position. The shards' candidate sets
    /// partition this pattern's, and concatenating them in order reproduces
    /// its enumeration order.
    pub fn shards(&self) -> Vec<Pattern> {
        let Some((first, rest)) = self.alphabets.split_first() else {
            return Vec::new();
        };

        first
            .symbols()
            .iter()
            .map(|&symbol| {
                let mut alphabets = Vec::with_capacity(self.alphabets.len());
                alphabets.push(PositionAlphabet::singleton(symbol));
                alphabets.extend(rest.iter().cloned());
                Pattern::new(alphabets, self.equals_index)
            })
            .collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for alphabet in &self.alphabets {
            write!(f, "{}", alphabet)?;
        }
        Ok(())
    }
}
