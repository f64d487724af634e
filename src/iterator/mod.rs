mod core;
mod state;

pub use self::core::CandidateIterator;
