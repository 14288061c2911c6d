//! Wire protocol constants.
//!
//! SQL type codes as they appear in the XSQLVAR descriptor returned by the
//! server's describe phase. The server may set the low bit of a code to flag
//! a nullable column, so codes are compared with that bit cleared.

// SQL type codes
pub const SQL_TYPE_TEXT: u16 = 452;
pub const SQL_TYPE_VARYING: u16 = 448;
pub const SQL_TYPE_SHORT: u16 = 500;
pub const SQL_TYPE_LONG: u16 = 496;
pub const SQL_TYPE_FLOAT: u16 = 482;
pub const SQL_TYPE_DOUBLE: u16 = 480;
pub const SQL_TYPE_D_FLOAT: u16 = 530;
pub const SQL_TYPE_TIMESTAMP: u16 = 510;
pub const SQL_TYPE_BLOB: u16 = 520;
pub const SQL_TYPE_ARRAY: u16 = 540;
pub const SQL_TYPE_QUAD: u16 = 550;
pub const SQL_TYPE_TIME: u16 = 560;
pub const SQL_TYPE_DATE: u16 = 570;
pub const SQL_TYPE_INT64: u16 = 580;
pub const SQL_TYPE_BOOLEAN: u16 = 32764;
pub const SQL_TYPE_NULL: u16 = 32766;

/// Low bit of a type code marks the column as nullable.
pub const SQL_TYPE_NULLABLE_FLAG: u16 = 0x0001;

// Charset ids (low byte of the text subtype)
pub const CHARSET_NONE: u8 = 0;
pub const CHARSET_OCTETS: u8 = 1;
pub const CHARSET_ASCII: u8 = 2;
pub const CHARSET_UNICODE_FSS: u8 = 3;
pub const CHARSET_UTF8: u8 = 4;

// Blob subtypes
pub const BLOB_SUBTYPE_BINARY: i16 = 0;
pub const BLOB_SUBTYPE_TEXT: i16 = 1;

// Calendar encoding
/// Added to the wire day count to get the day number used by the
/// Julian-day-to-Gregorian conversion.
pub const DATE_DAY_OFFSET: i64 = 678882;
/// Days in 400 Gregorian years.
pub const DAYS_PER_400_YEARS: i64 = 146097;
/// Days in 4 Julian years.
pub const DAYS_PER_4_YEARS: i64 = 1461;
/// TIME is counted in ten-thousandths of a second.
pub const TIME_FRACTIONS_PER_SECOND: u32 = 10_000;
/// Nanoseconds in one ten-thousandth of a second.
pub const NANOS_PER_TIME_FRACTION: u32 = 100_000;
pub const SECONDS_PER_DAY: u32 = 86_400;

/// Largest negative scale representable as an exact `Decimal`.
pub const MAX_DECIMAL_SCALE: u32 = 28;
