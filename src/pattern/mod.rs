//! Per-position alphabets that bound the candidate search space

mod alphabet;
mod cache;
pub mod constants;
mod core;
mod errors;
mod generator;

pub use alphabet::PositionAlphabet;
pub use cache::PatternCache;
pub use self::core::Pattern;
pub use errors::PatternError;
pub use generator::{build_patterns, patterns_for};
