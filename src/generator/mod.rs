//! End-to-end generation: patterns, enumeration, filtering, output

mod config;
mod core;
mod errors;
mod report;
mod sink;

pub use config::GeneratorConfig;
pub use self::core::EquationGenerator;
pub use errors::{GeneratorError, SinkError};
pub use report::{GenerationReport, group_thousands};
pub use sink::{EquationSink, TableWriter};

#[cfg(test)]
mod tests;
