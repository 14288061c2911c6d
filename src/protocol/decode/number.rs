//! Scaled integer decoder (SMALLINT, INTEGER, BIGINT, NUMERIC, DECIMAL).
//!
//! NUMERIC and DECIMAL columns travel as plain big-endian integers; the
//! column scale says where the decimal point goes:
//! - scale = 0: the integer itself
//! - scale > 0: the integer times 10^scale
//! - scale < 0: the integer divided by 10^-scale, kept exact as a `Decimal`
//!
//! SMALLINT is padded to 4 bytes on the wire and truncated back to 16 bits.

use crate::error::{Error, Result};
use crate::protocol::buffer::{read_i32_be, read_i64_be};
use crate::protocol::constants::MAX_DECIMAL_SCALE;
use crate::protocol::types::{SqlType, SqlValue};
use rust_decimal::Decimal;

/// Read the stored integer of a scaled integer column, widened to i64.
pub fn read_scaled_integer(sql_type: SqlType, data: &[u8]) -> Result<i64> {
    match sql_type {
        SqlType::Short => Ok(read_i32_be(data, sql_type)? as i16 as i64),
        SqlType::Long => Ok(read_i32_be(data, sql_type)? as i64),
        SqlType::Int64 => read_i64_be(data, sql_type),
        other => Err(Error::type_conversion(format!(
            "{} is not a scaled integer type",
            other
        ))),
    }
}

/// Apply a column scale to a stored integer.
///
/// # Errors
/// Returns `Error::ScaleOverflow` if `value * 10^scale` does not fit an i64,
/// or if a negative scale is finer than `Decimal` can hold.
pub fn apply_scale(value: i64, scale: i16) -> Result<SqlValue> {
    let overflow = || Error::ScaleOverflow { value, scale };

    if scale == 0 {
        return Ok(SqlValue::Int64(value));
    }

    if scale > 0 {
        let factor = 10i64
            .checked_pow(scale as u32)
            .ok_or_else(overflow)?;
        return value
            .checked_mul(factor)
            .map(SqlValue::Int64)
            .ok_or_else(overflow);
    }

    let digits = scale.unsigned_abs() as u32;
    if digits > MAX_DECIMAL_SCALE {
        return Err(overflow());
    }
    Ok(SqlValue::Decimal(Decimal::from_i128_with_scale(
        value as i128,
        digits,
    )))
}

/// Decode a scaled integer column.
pub fn decode_scaled_integer(sql_type: SqlType, scale: i16, data: &[u8]) -> Result<SqlValue> {
    apply_scale(read_scaled_integer(sql_type, data)?, scale)
}
