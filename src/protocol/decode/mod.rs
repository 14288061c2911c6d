//! Column value decoders for the wire protocol.
//!
//! Each family of types has its own module with decode functions, and
//! `ValueDecoder` dispatches on the column descriptor.
//!
//! | SQL Type | Module | Result |
//! |----------|--------|--------|
//! | SMALLINT, INTEGER, BIGINT | `number` | `Int64` or `Decimal` |
//! | DATE, TIME, TIMESTAMP | `date` | `Date`, `Time`, `Timestamp` |
//! | CHAR, VARCHAR | `charset` | `String`, or `Binary` for OCTETS |
//!
//! FLOAT, DOUBLE PRECISION, BOOLEAN and the BLOB/ARRAY/QUAD ids are read
//! directly with the primitive readers in `protocol::buffer`.

mod charset;
mod date;
mod number;

use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::error::{Error, Result};
use crate::protocol::buffer::{read_bytes8, read_f32_be, read_f64_be};
use crate::protocol::types::{BlobId, ColumnMetadata, SqlType, SqlValue};

pub use charset::{CharsetDecoder, Utf8CharsetDecoder};
pub use date::{date_fields, decode_date, decode_time, decode_timestamp, time_fields};
pub use number::{apply_scale, decode_scaled_integer, read_scaled_integer};

/// Turns column bytes into `SqlValue`s.
///
/// Holds no per-row state; one decoder can be shared by every column of
/// every row, across threads.
#[derive(Clone)]
pub struct ValueDecoder {
    charset: Arc<dyn CharsetDecoder>,
}

impl ValueDecoder {
    /// Create a decoder that reads text as UTF-8.
    pub fn new() -> Self {
        Self {
            charset: Arc::new(Utf8CharsetDecoder),
        }
    }

    /// Set the charset decoder used for CHAR/VARCHAR columns.
    ///
    /// # Example
    ///
    /// ```
    /// use firebird_thin_rs::{Utf8CharsetDecoder, ValueDecoder};
    /// use std::sync::Arc;
    ///
    /// let decoder = ValueDecoder::new().with_charset_decoder(Arc::new(Utf8CharsetDecoder));
    /// ```
    pub fn with_charset_decoder(mut self, charset: Arc<dyn CharsetDecoder>) -> Self {
        self.charset = charset;
        self
    }

    /// Decode one column value.
    ///
    /// `data` must be exactly the bytes of this column: `io_length()` bytes
    /// for fixed-size types, the payload after the length prefix for VARCHAR.
    ///
    /// # Errors
    /// - `Error::InvalidLength` if a fixed-size window has the wrong size
    /// - `Error::MalformedFloatEncoding` for a FLOAT/DOUBLE of the wrong size
    /// - `Error::CharsetDecode` from the charset decoder
    /// - `Error::ScaleOverflow`, `Error::InvalidDate`, `Error::InvalidTime`
    ///   for values that do not fit the result type
    pub fn decode(&self, meta: &ColumnMetadata, data: &[u8]) -> Result<SqlValue> {
        trace!(
            sql_type = %meta.sql_type,
            scale = meta.scale,
            subtype = meta.subtype,
            len = data.len(),
            "decoding column value"
        );

        match meta.sql_type {
            SqlType::Text | SqlType::Varying => {
                if meta.is_octets() {
                    Ok(SqlValue::Binary(data.to_vec()))
                } else {
                    self.charset
                        .decode_text(data, meta.charset_id())
                        .map(SqlValue::String)
                }
            }
            ty @ (SqlType::Short | SqlType::Long | SqlType::Int64) => {
                decode_scaled_integer(ty, meta.scale, data)
            }
            SqlType::Date => decode_date(data).map(SqlValue::Date),
            SqlType::Time => decode_time(data).map(SqlValue::Time),
            SqlType::Timestamp => decode_timestamp(data).map(SqlValue::Timestamp),
            SqlType::Float => read_f32_be(data).map(SqlValue::Float),
            SqlType::Double => read_f64_be(data).map(SqlValue::Double),
            SqlType::Boolean => match data {
                [b] => Ok(SqlValue::Boolean(*b != 0)),
                _ => Err(Error::InvalidLength {
                    sql_type: SqlType::Boolean,
                    expected: 1,
                    actual: data.len(),
                }),
            },
            ty @ SqlType::Blob => Ok(SqlValue::Blob(BlobId::new(read_bytes8(data, ty)?))),
            ty @ SqlType::Array => Ok(SqlValue::Array(BlobId::new(read_bytes8(data, ty)?))),
            ty @ SqlType::Quad => Ok(SqlValue::Quad(BlobId::new(read_bytes8(data, ty)?))),
            SqlType::Null => Ok(SqlValue::Null),
        }
    }
}

impl Default for ValueDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ValueDecoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueDecoder").finish_non_exhaustive()
    }
}

/// Decode one column value with the default (UTF-8) decoder.
pub fn decode_value(meta: &ColumnMetadata, data: &[u8]) -> Result<SqlValue> {
    ValueDecoder::new().decode(meta, data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::constants::{CHARSET_OCTETS, CHARSET_UTF8};
    use rust_decimal::Decimal;

    fn column(sql_type: SqlType, scale: i16, subtype: i16) -> ColumnMetadata {
        ColumnMetadata::for_type(sql_type, scale, subtype, 0)
    }

    struct UppercaseDecoder;

    impl CharsetDecoder for UppercaseDecoder {
        fn decode_text(&self, bytes: &[u8], _charset_id: u8) -> Result<String> {
            Ok(String::from_utf8_lossy(bytes).to_uppercase())
        }
    }

    #[test]
    fn test_decode_text_and_octets() {
        let data = b"abc";
        for ty in [SqlType::Text, SqlType::Varying] {
            let text = decode_value(&column(ty, 0, CHARSET_UTF8 as i16), data).unwrap();
            assert_eq!(text, SqlValue::String("abc".to_string()));

            let raw = decode_value(&column(ty, 0, CHARSET_OCTETS as i16), data).unwrap();
            assert_eq!(raw, SqlValue::Binary(b"abc".to_vec()));
        }
    }

    #[test]
    fn test_decode_text_uses_configured_charset_decoder() {
        let decoder = ValueDecoder::new().with_charset_decoder(Arc::new(UppercaseDecoder));
        let value = decoder
            .decode(&column(SqlType::Varying, 0, 0), b"mixed Case")
            .unwrap();
        assert_eq!(value, SqlValue::String("MIXED CASE".to_string()));

        // OCTETS never reach the charset decoder
        let value = decoder
            .decode(&column(SqlType::Varying, 0, CHARSET_OCTETS as i16), b"ab")
            .unwrap();
        assert_eq!(value, SqlValue::Binary(b"ab".to_vec()));
    }

    #[test]
    fn test_decode_text_charset_error() {
        let result = decode_value(&column(SqlType::Varying, 0, CHARSET_UTF8 as i16), &[0xc3]);
        assert!(matches!(result, Err(Error::CharsetDecode { charset_id: 4, .. })));
    }

    #[test]
    fn test_decode_scaled_integers() {
        let long = [0xff, 0xff, 0xcf, 0xc7]; // -12345
        assert_eq!(
            decode_value(&column(SqlType::Long, 0, 0), &long).unwrap(),
            SqlValue::Int64(-12345)
        );
        assert_eq!(
            decode_value(&column(SqlType::Long, -2, 0), &long).unwrap(),
            SqlValue::Decimal(Decimal::new(-12345, 2))
        );
        assert_eq!(
            decode_value(&column(SqlType::Short, 1, 0), &[0, 0, 0, 7]).unwrap(),
            SqlValue::Int64(70)
        );
        assert_eq!(
            decode_value(
                &column(SqlType::Int64, -4, 0),
                &[0xff, 0xff, 0xff, 0xe3, 0x41, 0x66, 0xe5, 0xec]
            )
            .unwrap(),
            SqlValue::Decimal(Decimal::new(-123_456_789_012, 4))
        );
    }

    #[test]
    fn test_decode_temporal() {
        let date = decode_value(&column(SqlType::Date, 0, 0), &[0, 0, 0xc9, 0x58]).unwrap();
        assert_eq!(date.to_string(), "2000-01-01");

        let time = decode_value(&column(SqlType::Time, 0, 0), &[0x1a, 0xff, 0xbd, 0xd2]).unwrap();
        assert_eq!(time.to_string(), "12:34:56.789");

        let ts = decode_value(
            &column(SqlType::Timestamp, 0, 0),
            &[0, 0, 0xc9, 0x58, 0x1a, 0xff, 0xbd, 0xd2],
        )
        .unwrap();
        assert_eq!(ts.to_string(), "2000-01-01 12:34:56.789");
    }

    #[test]
    fn test_decode_scale_ignored_for_other_types() {
        let date = decode_value(&column(SqlType::Date, -2, 0), &[0, 0, 0xc9, 0x58]).unwrap();
        assert_eq!(date.to_string(), "2000-01-01");
        let double = decode_value(
            &column(SqlType::Double, 3, 0),
            &[0x3f, 0xf8, 0, 0, 0, 0, 0, 0],
        )
        .unwrap();
        assert_eq!(double, SqlValue::Double(1.5));
    }

    #[test]
    fn test_decode_floats() {
        assert_eq!(
            decode_value(&column(SqlType::Float, 0, 0), &[0x40, 0x50, 0, 0]).unwrap(),
            SqlValue::Float(3.25)
        );
        assert_eq!(
            decode_value(&column(SqlType::Float, 0, 0), &[0x40, 0x50, 0]),
            Err(Error::MalformedFloatEncoding {
                expected: 4,
                actual: 3
            })
        );
        assert!(matches!(
            decode_value(&column(SqlType::Double, 0, 0), &[0; 4]),
            Err(Error::MalformedFloatEncoding { expected: 8, .. })
        ));
    }

    #[test]
    fn test_decode_boolean() {
        let meta = column(SqlType::Boolean, 0, 0);
        assert_eq!(decode_value(&meta, &[0]).unwrap(), SqlValue::Boolean(false));
        assert_eq!(decode_value(&meta, &[1]).unwrap(), SqlValue::Boolean(true));
        assert_eq!(decode_value(&meta, &[0xff]).unwrap(), SqlValue::Boolean(true));
        assert!(decode_value(&meta, &[]).is_err());
    }

    #[test]
    fn test_decode_handles() {
        let raw = [0, 0, 0, 0x81, 0, 0, 0, 0x02];
        let id = BlobId::new(raw);
        assert_eq!(
            decode_value(&column(SqlType::Blob, 0, 0), &raw).unwrap(),
            SqlValue::Blob(id)
        );
        assert_eq!(
            decode_value(&column(SqlType::Array, 0, 0), &raw).unwrap(),
            SqlValue::Array(id)
        );
        assert_eq!(
            decode_value(&column(SqlType::Quad, 0, 0), &raw).unwrap(),
            SqlValue::Quad(id)
        );
        assert!(decode_value(&column(SqlType::Blob, 0, 0), &raw[..4]).is_err());
    }

    #[test]
    fn test_decode_null() {
        assert_eq!(
            decode_value(&column(SqlType::Null, 0, 0), &[]).unwrap(),
            SqlValue::Null
        );
    }

    #[test]
    fn test_decoder_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ValueDecoder>();
    }
}
