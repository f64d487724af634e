/// Configuration for equation generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Evaluate pattern shards on the rayon thread pool
    pub parallel: bool,
    /// Stop after examining this many candidates per mode. Limited runs are
    /// sequential so the examined candidates are an enumeration-order prefix.
    pub limit: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            limit: None,
        }
    }
}

impl GeneratorConfig {
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }
}
