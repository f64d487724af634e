//! Right-hand side parsing

mod digits;
mod errors;

pub use digits::parse_result;
pub use errors::ResultError;
