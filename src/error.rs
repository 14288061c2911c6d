//! Error types for the Firebird wire value decoder.

use thiserror::Error;

use crate::protocol::types::SqlType;

/// Result type alias for decode operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for decoding column values off the wire.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Float window is not exactly 4 (FLOAT) or 8 (DOUBLE) bytes.
    #[error("Malformed float encoding: expected {expected} bytes, got {actual}")]
    MalformedFloatEncoding { expected: usize, actual: usize },

    /// Text bytes are not valid in the declared charset.
    #[error("Cannot decode text in charset {charset_id}: {message}")]
    CharsetDecode { charset_id: u8, message: String },

    /// Byte window does not match the fixed length of its type.
    #[error("Invalid {sql_type} value: expected {expected} bytes, got {actual}")]
    InvalidLength {
        sql_type: SqlType,
        expected: usize,
        actual: usize,
    },

    /// Applying the column scale does not fit the result type.
    #[error("Value {value} cannot be scaled by 10^{scale}")]
    ScaleOverflow { value: i64, scale: i16 },

    /// Day count maps to a date outside the supported calendar range.
    #[error("Invalid DATE: year={year}, month={month}, day={day}")]
    InvalidDate { year: i64, month: i64, day: i64 },

    /// Time fraction is one full day or more.
    #[error("Invalid TIME: {fraction} ten-thousandths of a second since midnight")]
    InvalidTime { fraction: u32 },

    /// Unsupported wire type code in a column descriptor.
    #[error("Unsupported SQL type: {type_num}")]
    UnsupportedType { type_num: u16 },

    /// Type conversion error.
    #[error("Type conversion error: {message}")]
    TypeConversion { message: String },
}

impl Error {
    /// Create a charset decode error.
    pub fn charset(charset_id: u8, message: impl Into<String>) -> Self {
        Self::CharsetDecode {
            charset_id,
            message: message.into(),
        }
    }

    /// Create a type conversion error.
    pub fn type_conversion(message: impl Into<String>) -> Self {
        Self::TypeConversion {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::MalformedFloatEncoding {
            expected: 4,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "Malformed float encoding: expected 4 bytes, got 3"
        );

        let err = Error::InvalidLength {
            sql_type: SqlType::Int64,
            expected: 8,
            actual: 2,
        };
        assert_eq!(err.to_string(), "Invalid BIGINT value: expected 8 bytes, got 2");

        let err = Error::charset(4, "invalid utf-8 sequence");
        assert_eq!(
            err.to_string(),
            "Cannot decode text in charset 4: invalid utf-8 sequence"
        );
    }
}
