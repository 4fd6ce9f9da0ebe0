use std::num::ParseIntError;

use crate::server::error::{internal::InternalError, AppError};

/// Parses an i32 value from String
///
/// # Arguments
/// - `value` - The String to attempt to parse into `i32`
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed String to `i32`
/// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse
///   the string as an i32
pub fn parse_i32_from_string(value: String) -> Result<i32, AppError> {
    let result = value
        .parse::<i32>()
        .map_err(|e| InternalError::ParseStringId { value, source: e })?;

    Ok(result)
}

/// Parses an integer query parameter, ignoring surrounding whitespace.
pub fn parse_query_int<T>(value: &str) -> Result<T, ParseIntError>
where
    T: std::str::FromStr<Err = ParseIntError>,
{
    value.trim().parse::<T>()
}
