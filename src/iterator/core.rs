use std::iter::FusedIterator;

use crate::pattern::{Pattern, PositionAlphabet};

use super::state::OdometerState;

/// Lazy Cartesian product of a pattern's alphabets, leftmost position
/// varying slowest
#[derive(Debug, Clone)]
pub struct CandidateIterator<'a> {
    alphabets: &'a [PositionAlphabet],
    total: u64,
    state: OdometerState,
}

impl<'a> CandidateIterator<'a> {
    pub fn new(pattern: &'a Pattern) -> Self {
        let total = pattern.candidate_count();
        Self {
            alphabets: pattern.alphabets(),
            total,
            state: OdometerState::new(pattern.len(), total),
        }
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn remaining(&self) -> u64 {
        self.state.remaining
    }

    /// Rewinds to the first candidate
    pub fn restart(&mut self) {
        self.state = OdometerState::new(self.alphabets.len(), self.total);
    }

    fn current(&self) -> String {
        self.alphabets
            .iter()
            .zip(&self.state.indices)
            .filter_map(|(alphabet, &index)| alphabet.symbols().get(index))
            .collect()
    }
}

impl Iterator for CandidateIterator<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.state.is_exhausted() {
            return None;
        }

        let candidate = self.current();
        self.state.advance(self.alphabets.iter().map(PositionAlphabet::len));
        Some(candidate)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.state.remaining) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl ExactSizeIterator for CandidateIterator<'_> {}

impl FusedIterator for CandidateIterator<'_> {}
