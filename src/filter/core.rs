use crate::expression::evaluate;
use crate::filter::errors::Rejection;
use crate::validator::parse_result;

pub struct EquationFilter;

impl EquationFilter {
    /// Splits `candidate` on its first `=` and checks both sides.
    ///
    /// # Errors
    ///
    /// Returns the reason the candidate is rejected: no `=`, an invalid
    /// expression, an invalid result, or two sides that disagree.
    pub fn check(candidate: &str) -> Result<i64, Rejection> {
        let (expression, result) = candidate
            .split_once('=')
            .ok_or(Rejection::MissingEqualSign)?;

        let left = evaluate(expression)?;
        let right = parse_result(result)?;

        if left == right {
            Ok(left)
        } else {
            Err(Rejection::Mismatch {
                expression: left,
                result: right,
            })
        }
    }

    pub fn accepts(candidate: &str) -> bool {
        Self::check(candidate).is_ok()
    }
}
