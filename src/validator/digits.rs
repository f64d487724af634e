use log::trace;

use crate::validator::errors::ResultError;

/// Parses the result side of a candidate equation.
///
/// A run of zeros is accepted as zero; zeros followed by a nonzero digit
/// are not.
///
/// # Errors
///
/// Returns an error if the string is empty, contains anything but ASCII
/// digits, has a leading zero before a nonzero digit, or overflows `i64`.
pub fn parse_result(result: &str) -> Result<i64, ResultError> {
    if result.is_empty() {
        return Err(ResultError::Empty);
    }

    if !result.chars().all(|c| c.is_ascii_digit()) {
        trace!("Rejecting result '{}': non-digit characters", result);
        return Err(ResultError::InvalidDigits(result.to_string()));
    }

    if result.starts_with('0') && !result.trim_start_matches('0').is_empty() {
        trace!("Rejecting result '{}': leading zero", result);
        return Err(ResultError::LeadingZero(result.to_string()));
    }

    result
        .parse::<i64>()
        .map_err(|_| ResultError::Overflow(result.to_string()))
}
