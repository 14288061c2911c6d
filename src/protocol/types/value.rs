//! Decoded column values.

use super::BlobId;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt;

/// A single decoded column value.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// NULL value (SQL_NULL columns).
    Null,
    /// Integer value (SMALLINT, INTEGER, BIGINT, or NUMERIC with scale >= 0).
    Int64(i64),
    /// Exact fixed-point value (NUMERIC/DECIMAL with scale < 0).
    Decimal(Decimal),
    /// Text value (CHAR, VARCHAR).
    String(String),
    /// Raw octets (CHAR/VARCHAR declared with CHARACTER SET OCTETS).
    Binary(Vec<u8>),
    /// DATE value.
    Date(NaiveDate),
    /// TIME value.
    Time(NaiveTime),
    /// TIMESTAMP value.
    Timestamp(NaiveDateTime),
    /// FLOAT value.
    Float(f32),
    /// DOUBLE PRECISION value.
    Double(f64),
    /// BOOLEAN value.
    Boolean(bool),
    /// BLOB id. Content must be fetched separately.
    Blob(BlobId),
    /// ARRAY id. Content must be fetched separately.
    Array(BlobId),
    /// QUAD value.
    Quad(BlobId),
}

impl SqlValue {
    /// Check if the value is NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }

    /// Try to get the value as an i64.
    ///
    /// Decimals convert only when they have no fractional part.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            SqlValue::Int64(v) => Some(*v),
            SqlValue::Decimal(d) if d.fract().is_zero() => d.to_i64(),
            _ => None,
        }
    }

    /// Try to get the value as an exact decimal.
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            SqlValue::Decimal(d) => Some(*d),
            SqlValue::Int64(v) => Some(Decimal::from(*v)),
            _ => None,
        }
    }

    /// Try to convert to f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            SqlValue::Float(v) => Some(*v as f64),
            SqlValue::Double(v) => Some(*v),
            SqlValue::Int64(v) => Some(*v as f64),
            SqlValue::Decimal(d) => d.to_f64(),
            _ => None,
        }
    }

    /// Try to get the value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SqlValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the value as raw bytes.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            SqlValue::Binary(bytes) => Some(bytes),
            SqlValue::String(s) => Some(s.as_bytes()),
            _ => None,
        }
    }

    /// Try to get the value as a date.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            SqlValue::Date(d) => Some(*d),
            SqlValue::Timestamp(ts) => Some(ts.date()),
            _ => None,
        }
    }

    /// Try to get the value as a time of day.
    pub fn as_time(&self) -> Option<NaiveTime> {
        match self {
            SqlValue::Time(t) => Some(*t),
            SqlValue::Timestamp(ts) => Some(ts.time()),
            _ => None,
        }
    }

    /// Try to get the value as a timestamp.
    pub fn as_timestamp(&self) -> Option<NaiveDateTime> {
        match self {
            SqlValue::Timestamp(ts) => Some(*ts),
            _ => None,
        }
    }

    /// Try to get the value as a bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SqlValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get the handle of a BLOB, ARRAY or QUAD value.
    pub fn as_blob_id(&self) -> Option<BlobId> {
        match self {
            SqlValue::Blob(id) | SqlValue::Array(id) | SqlValue::Quad(id) => Some(*id),
            _ => None,
        }
    }
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Null => write!(f, "NULL"),
            SqlValue::Int64(v) => write!(f, "{}", v),
            SqlValue::Decimal(d) => write!(f, "{}", d),
            SqlValue::String(s) => write!(f, "{}", s),
            SqlValue::Binary(bytes) => write!(f, "<OCTETS: {} bytes>", bytes.len()),
            SqlValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            SqlValue::Time(t) => write!(f, "{}", t.format("%H:%M:%S%.f")),
            SqlValue::Timestamp(ts) => write!(f, "{}", ts.format("%Y-%m-%d %H:%M:%S%.f")),
            SqlValue::Float(v) => write!(f, "{}", v),
            SqlValue::Double(v) => write!(f, "{}", v),
            SqlValue::Boolean(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
            SqlValue::Blob(id) => write!(f, "<BLOB: {}>", id),
            SqlValue::Array(id) => write!(f, "<ARRAY: {}>", id),
            SqlValue::Quad(id) => write!(f, "<QUAD: {}>", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_sql_value_null() {
        let val = SqlValue::Null;
        assert!(val.is_null());
        assert_eq!(val.as_str(), None);
        assert_eq!(format!("{}", val), "NULL");
    }

    #[test]
    fn test_sql_value_string() {
        let val = SqlValue::String("hello".to_string());
        assert!(!val.is_null());
        assert_eq!(val.as_str(), Some("hello"));
        assert_eq!(val.as_bytes(), Some(b"hello".as_slice()));
        assert_eq!(format!("{}", val), "hello");
    }

    #[test]
    fn test_sql_value_decimal() {
        let val = SqlValue::Decimal(Decimal::from_str("123.45").unwrap());
        assert_eq!(val.as_i64(), None);
        assert!((val.as_f64().unwrap() - 123.45).abs() < 1e-9);
        assert_eq!(format!("{}", val), "123.45");

        let whole = SqlValue::Decimal(Decimal::new(4200, 2));
        assert_eq!(whole.as_i64(), Some(42));
    }

    #[test]
    fn test_sql_value_int() {
        let val = SqlValue::Int64(42);
        assert_eq!(val.as_i64(), Some(42));
        assert_eq!(val.as_decimal(), Some(Decimal::from(42)));
        assert_eq!(val.as_f64(), Some(42.0));
    }

    #[test]
    fn test_sql_value_temporal_display() {
        let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let time = NaiveTime::from_hms_nano_opt(12, 34, 56, 789_000_000).unwrap();
        assert_eq!(SqlValue::Date(date).to_string(), "2000-01-01");
        assert_eq!(SqlValue::Time(time).to_string(), "12:34:56.789");
        let ts = SqlValue::Timestamp(date.and_time(time));
        assert_eq!(ts.to_string(), "2000-01-01 12:34:56.789");
        assert_eq!(ts.as_date(), Some(date));
        assert_eq!(ts.as_time(), Some(time));
    }

    #[test]
    fn test_sql_value_blob() {
        let id = BlobId::new([0, 0, 0, 1, 0, 0, 0, 2]);
        let val = SqlValue::Blob(id);
        assert_eq!(val.as_blob_id(), Some(id));
        assert_eq!(val.as_bytes(), None);
        assert_eq!(val.to_string(), "<BLOB: 0000000100000002>");
    }
}
