//! Nerdle-gen - enumerate every valid hidden-answer equation for
//! Nerdle-style arithmetic guessing games
//!
//! Candidates are drawn from per-position alphabets, one pattern per
//! placement of the equal sign, and kept when the left-hand side evaluates
//! under the game's rules to the integer written on the right-hand side.

pub mod expression;
pub mod filter;
pub mod game;
pub mod generator;
pub mod iterator;
pub mod pattern;
pub mod validator;

// Re-export the main public API
pub use expression::{ExpressionError, evaluate};
pub use filter::{Equation, EquationFilter, Rejection};
pub use game::{GameConfig, GameMode};
pub use generator::{
    EquationGenerator, EquationSink, GenerationReport, GeneratorConfig, GeneratorError, SinkError,
    TableWriter,
};
pub use iterator::CandidateIterator;
pub use pattern::{Pattern, PatternCache, PatternError, PositionAlphabet, patterns_for};
pub use validator::{ResultError, parse_result};

/// Generate every valid equation for the given game mode
///
/// This is a convenience function that runs a default (parallel) generator
/// and collects the equations in enumeration order.
///
/// # Arguments
///
/// * `mode` - The game mode whose equation length to use
///
/// # Returns
///
/// * `Ok((equations, report))` - The accepted equations and the run's counts
/// * `Err(GeneratorError)` - If the mode's patterns cannot be built
///
/// # Errors
///
/// This function will return an error if the mode's configuration yields no
/// usable equal-sign placement.
///
/// # Examples
///
/// ```
/// use nerdle_gen::{GameMode, generate_equations};
///
/// match generate_equations(GameMode::Mini) {
///     Ok((equations, report)) => {
///         assert_eq!(equations.len(), 206);
///         println!("{}", report);
///     }
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn generate_equations(
    mode: GameMode,
) -> Result<(Vec<String>, GenerationReport), GeneratorError> {
    let mut generator = EquationGenerator::new(GeneratorConfig::default());
    generator.collect(mode)
}
