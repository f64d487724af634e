use thiserror::Error;

use crate::pattern::PatternError;

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("Failed to write equation table: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Pattern configuration error: {0}")]
    PatternError(#[from] PatternError),
    #[error("Output error: {0}")]
    SinkError(#[from] SinkError),
}
