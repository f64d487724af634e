use thiserror::Error;

use crate::game::GameMode;

/// Configuration faults detected while building patterns. Any of these
/// aborts generation for the mode.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("No equal-sign positions configured for {mode} mode")]
    NoEqualSignPositions { mode: GameMode },
    #[error("Equal sign at index {index} is outside an equation of length {element_count}")]
    PositionOutOfRange { index: usize, element_count: usize },
    #[error("Equal sign at index {index} leaves no room for a result")]
    EmptyResult { index: usize },
    #[error("Equal sign at index {index} leaves an expression shorter than two characters")]
    ExpressionTooShort { index: usize },
}
