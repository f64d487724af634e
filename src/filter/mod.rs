//! Accept or reject candidate equations

mod core;
mod equation;
mod errors;

pub use self::core::EquationFilter;
pub use equation::Equation;
pub use errors::Rejection;
