use crate::server::error::validation::ValidationError;

/// Parses the `qty` listing parameter.
///
/// Surrounding whitespace is ignored. The value must fit a signed 64-bit integer,
/// the range SQLite accepts for `LIMIT`.
///
/// # Arguments
/// - `value` - Raw query parameter value
///
/// # Returns
/// - `Ok(u64)` - Number of servers to keep, at most `i64::MAX`
/// - `Err(ValidationError::InvalidQuantity)` - Not an integer in `0..=i64::MAX`
pub fn parse_quantity(value: &str) -> Result<u64, ValidationError> {
    value
        .trim()
        .parse::<i64>()
        .ok()
        .and_then(|qty| u64::try_from(qty).ok())
        .ok_or_else(|| ValidationError::InvalidQuantity(value.to_string()))
}

/// Parses the `by_server_id` listing parameter into a server primary key.
///
/// # Arguments
/// - `value` - Raw query parameter value
///
/// # Returns
/// - `Ok(i32)` - Server ID to look up
/// - `Err(ValidationError::InvalidServerId)` - Not an integer in the primary key range
pub fn parse_server_id(value: &str) -> Result<i32, ValidationError> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| ValidationError::InvalidServerId(value.to_string()))
}

/// Interprets a boolean query flag.
///
/// Only the literal `true` enables a flag; anything else, including a missing
/// parameter, leaves it off.
pub fn parse_flag(value: Option<&str>) -> bool {
    value == Some("true")
}
