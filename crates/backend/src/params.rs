// =============================================================================
// StorePulse Backend - Path Parameters
// =============================================================================

use crate::error::ApiError;

/// Parse a trailing-window length. Must be a positive integer.
pub fn parse_hours(raw: &str) -> Result<u32, ApiError> {
    match raw.parse::<u32>() {
        Ok(hours) if hours >= 1 => Ok(hours),
        _ => Err(ApiError::bad_request("Invalid hours parameter")),
    }
}

/// Parse a record id. `what` names the entity in the error message.
pub fn parse_id(raw: &str, what: &str) -> Result<i32, ApiError> {
    raw.parse::<i32>()
        .map_err(|_| ApiError::bad_request(format!("Invalid {} ID", what)))
}
