use std::fmt;

use num_format::{Locale, ToFormattedString};

use crate::game::GameMode;

/// Accepted and examined counts for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationReport {
    pub mode: GameMode,
    pub accepted: u64,
    pub examined: u64,
}

impl GenerationReport {
    pub fn new(mode: GameMode) -> Self {
        Self {
            mode,
            accepted: 0,
            examined: 0,
        }
    }

    /// Sums the counters. Order of merging does not matter.
    pub fn merge(self, other: Self) -> Self {
        Self {
            mode: self.mode,
            accepted: self.accepted + other.accepted,
            examined: self.examined + other.examined,
        }
    }

    /// Percentage of examined candidates that were accepted
    pub fn acceptance_rate(&self) -> f64 {
        if self.examined == 0 {
            0.0
        } else {
            self.accepted as f64 / self.examined as f64 * 100.0
        }
    }
}

impl fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} valid expressions generated out of {} total expressions - ({:.3}%)",
            group_thousands(self.accepted),
            group_thousands(self.examined),
            self.acceptance_rate()
        )
    }
}

/// Formats `value` with a comma every three digits
pub fn group_thousands(value: u64) -> String {
    value.to_formatted_string(&Locale::en)
}
