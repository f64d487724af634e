use std::collections::HashMap;
use std::sync::Arc;

use crate::game::GameMode;

use super::core::Pattern;
use super::errors::PatternError;
use super::generator::patterns_for;

/// Memoizes `patterns_for` per mode
#[derive(Debug, Default)]
pub struct PatternCache {
    entries: HashMap<GameMode, Arc<[Pattern]>>,
}

impl PatternCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    ///
    /// Propagates configuration faults from pattern construction. Failed
    /// builds are not cached.
    pub fn get(&mut self, mode: GameMode) -> Result<Arc<[Pattern]>, PatternError> {
        if let Some(patterns) = self.entries.get(&mode) {
            return Ok(Arc::clone(patterns));
        }

        let patterns: Arc<[Pattern]> = patterns_for(mode)?.into();
        self.entries.insert(mode, Arc::clone(&patterns));
        Ok(patterns)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
