use log::debug;

use crate::game::{GameConfig, GameMode};

use super::alphabet::PositionAlphabet;
use super::core::Pattern;
use super::errors::PatternError;

/// Patterns for every admissible equal-sign placement of `mode`
///
/// # Errors
///
/// Returns an error if the mode's configuration yields no usable placement.
pub fn patterns_for(mode: GameMode) -> Result<Vec<Pattern>, PatternError> {
    build_patterns(&mode.config())
}

/// # Errors
///
/// Returns an error when the placement range is empty or any placement
/// leaves the expression shorter than two characters or the result empty.
pub fn build_patterns(config: &GameConfig) -> Result<Vec<Pattern>, PatternError> {
    if config.equal_sign_positions.is_empty() {
        return Err(PatternError::NoEqualSignPositions { mode: config.mode });
    }

    let patterns = config
        .equal_sign_positions
        .clone()
        .map(|index| build_pattern(config.element_count, index))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        "Built {} patterns for {} mode",
        patterns.len(),
        config.mode
    );
    Ok(patterns)
}

fn build_pattern(element_count: usize, equals_index: usize) -> Result<Pattern, PatternError> {
    if equals_index >= element_count {
        return Err(PatternError::PositionOutOfRange {
            index: equals_index,
            element_count,
        });
    }
    if equals_index + 1 == element_count {
        return Err(PatternError::EmptyResult {
            index: equals_index,
        });
    }
    if equals_index < 2 {
        return Err(PatternError::ExpressionTooShort {
            index: equals_index,
        });
    }

    let mut alphabets = Vec::with_capacity(element_count);

    // Expression: no leading zero or operator, no trailing operator
    alphabets.push(PositionAlphabet::nonzero_digits());
    for _ in 1..equals_index - 1 {
        alphabets.push(PositionAlphabet::digits_and_operators());
    }
    alphabets.push(PositionAlphabet::digits());

    alphabets.push(PositionAlphabet::equals());

    // Result: a lone digit may be zero, longer results may not lead with one
    let result_len = element_count - equals_index - 1;
    if result_len == 1 {
        alphabets.push(PositionAlphabet::digits());
    } else {
        alphabets.push(PositionAlphabet::nonzero_digits());
        for _ in 1..result_len {
            alphabets.push(PositionAlphabet::digits());
        }
    }

    let pattern = Pattern::new(alphabets, equals_index);
    debug!(
        "Pattern {} has {} candidates",
        pattern,
        pattern.candidate_count()
    );
    Ok(pattern)
}
