use log::{debug, info};
use rayon::prelude::*;

use crate::filter::EquationFilter;
use crate::game::GameMode;
use crate::generator::config::GeneratorConfig;
use crate::generator::errors::GeneratorError;
use crate::generator::report::GenerationReport;
use crate::generator::sink::EquationSink;
use crate::pattern::{Pattern, PatternCache};

/// Accepted equations and examined count for one shard, owned by a worker
#[derive(Debug, Default)]
struct ShardOutcome {
    equations: Vec<String>,
    examined: u64,
}

/// Runs the full pipeline for a game mode
#[derive(Debug, Default)]
pub struct EquationGenerator {
    config: GeneratorConfig,
    patterns: PatternCache,
}

impl EquationGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            patterns: PatternCache::new(),
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates every equation of `mode` into `sink` in enumeration order.
    ///
    /// # Errors
    ///
    /// Returns an error if the mode's patterns cannot be built or the sink
    /// fails to record an equation.
    pub fn generate<S>(
        &mut self,
        mode: GameMode,
        sink: &mut S,
    ) -> Result<GenerationReport, GeneratorError>
    where
        S: EquationSink + ?Sized,
    {
        let patterns = self.patterns.get(mode)?;
        let total: u64 = patterns.iter().map(Pattern::candidate_count).sum();
        info!(
            "Generating {} mode equations from {} patterns ({} candidates)",
            mode,
            patterns.len(),
            total
        );

        let report = match self.config.limit {
            Some(limit) => Self::generate_sequential(mode, &patterns, limit, sink)?,
            None if self.config.parallel => Self::generate_parallel(mode, &patterns, sink)?,
            None => Self::generate_sequential(mode, &patterns, u64::MAX, sink)?,
        };
        sink.finish()?;

        info!("{} mode: {}", mode, report);
        Ok(report)
    }

    /// Generates every equation of `mode` into a vector.
    ///
    /// # Errors
    ///
    /// Returns an error if the mode's patterns cannot be built.
    pub fn collect(
        &mut self,
        mode: GameMode,
    ) -> Result<(Vec<String>, GenerationReport), GeneratorError> {
        let mut equations = Vec::new();
        let report = self.generate(mode, &mut equations)?;
        Ok((equations, report))
    }

    fn generate_sequential<S>(
        mode: GameMode,
        patterns: &[Pattern],
        limit: u64,
        sink: &mut S,
    ) -> Result<GenerationReport, GeneratorError>
    where
        S: EquationSink + ?Sized,
    {
        let mut report = GenerationReport::new(mode);

        'patterns: for pattern in patterns {
            for candidate in pattern.candidates() {
                if report.examined >= limit {
                    debug!("Candidate limit {} reached", limit);
                    break 'patterns;
                }
                report.examined += 1;
                if EquationFilter::accepts(&candidate) {
                    sink.emit(&candidate)?;
                    report.accepted += 1;
                }
            }
            debug!("Pattern {} done: {} accepted so far", pattern, report.accepted);
        }

        Ok(report)
    }

    /// Shards every pattern on its first position and scans the shards on the
    /// rayon pool. Each worker keeps its own outcome; outcomes are merged here
    /// in shard order so the sink sees enumeration order.
    fn generate_parallel<S>(
        mode: GameMode,
        patterns: &[Pattern],
        sink: &mut S,
    ) -> Result<GenerationReport, GeneratorError>
    where
        S: EquationSink + ?Sized,
    {
        let shards: Vec<Pattern> = patterns.iter().flat_map(Pattern::shards).collect();
        debug!("Scanning {} shards in parallel", shards.len());

        let outcomes: Vec<ShardOutcome> = shards.par_iter().map(Self::scan_shard).collect();

        let mut report = GenerationReport::new(mode);
        for outcome in outcomes {
            for equation in &outcome.equations {
                sink.emit(equation)?;
            }
            report = report.merge(GenerationReport {
                mode,
                accepted: outcome.equations.len() as u64,
                examined: outcome.examined,
            });
        }

        Ok(report)
    }

    fn scan_shard(shard: &Pattern) -> ShardOutcome {
        let mut outcome = ShardOutcome::default();
        for candidate in shard.candidates() {
            outcome.examined += 1;
            if EquationFilter::accepts(&candidate) {
                outcome.equations.push(candidate);
            }
        }
        outcome
    }
}
