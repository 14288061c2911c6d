//! SQL wire type enum and its metadata tables.
//!
//! Each variant is one on-wire representation from the XSQLVAR descriptor.
//! The fixed-length and display-width tables are `const fn` matches, so they
//! are compiled in and never mutated.
//!
//! Note: Nullability is a column property, not a type property.

use std::fmt;

use crate::error::{Error, Result};
use crate::protocol::constants::{
    SQL_TYPE_ARRAY, SQL_TYPE_BLOB, SQL_TYPE_BOOLEAN, SQL_TYPE_DATE, SQL_TYPE_DOUBLE,
    SQL_TYPE_FLOAT, SQL_TYPE_INT64, SQL_TYPE_LONG, SQL_TYPE_NULL, SQL_TYPE_NULLABLE_FLAG,
    SQL_TYPE_QUAD, SQL_TYPE_SHORT, SQL_TYPE_TEXT, SQL_TYPE_TIME, SQL_TYPE_TIMESTAMP,
    SQL_TYPE_VARYING,
};

/// On-wire representation of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SqlType {
    /// CHAR(n) - fixed-length text, length from the descriptor.
    Text,
    /// VARCHAR(n) - length-prefixed text.
    Varying,
    /// SMALLINT, or NUMERIC/DECIMAL stored in 16 bits.
    Short,
    /// INTEGER, or NUMERIC/DECIMAL stored in 32 bits.
    Long,
    /// BIGINT, or NUMERIC/DECIMAL stored in 64 bits.
    Int64,
    /// FLOAT - IEEE-754 single.
    Float,
    /// DOUBLE PRECISION - IEEE-754 double.
    Double,
    /// DATE - day count.
    Date,
    /// TIME - ten-thousandths of a second since midnight.
    Time,
    /// TIMESTAMP - DATE followed by TIME.
    Timestamp,
    /// BOOLEAN - one byte.
    Boolean,
    /// BLOB - 8-byte blob id.
    Blob,
    /// ARRAY - 8-byte array id.
    Array,
    /// QUAD - 8-byte opaque value.
    Quad,
    /// NULL - untyped parameter/literal.
    Null,
}

impl SqlType {
    /// Every wire type, in descriptor code order.
    pub const ALL: [SqlType; 15] = [
        SqlType::Varying,
        SqlType::Text,
        SqlType::Double,
        SqlType::Float,
        SqlType::Long,
        SqlType::Short,
        SqlType::Timestamp,
        SqlType::Blob,
        SqlType::Array,
        SqlType::Quad,
        SqlType::Time,
        SqlType::Date,
        SqlType::Int64,
        SqlType::Boolean,
        SqlType::Null,
    ];

    /// Create from a raw descriptor type code.
    ///
    /// The nullable bit is ignored. Returns `Err(Error::UnsupportedType)`
    /// for codes this decoder does not know (including D_FLOAT).
    pub fn from_raw(type_num: u16) -> Result<Self> {
        match type_num & !SQL_TYPE_NULLABLE_FLAG {
            SQL_TYPE_TEXT => Ok(SqlType::Text),
            SQL_TYPE_VARYING => Ok(SqlType::Varying),
            SQL_TYPE_SHORT => Ok(SqlType::Short),
            SQL_TYPE_LONG => Ok(SqlType::Long),
            SQL_TYPE_INT64 => Ok(SqlType::Int64),
            SQL_TYPE_FLOAT => Ok(SqlType::Float),
            SQL_TYPE_DOUBLE => Ok(SqlType::Double),
            SQL_TYPE_DATE => Ok(SqlType::Date),
            SQL_TYPE_TIME => Ok(SqlType::Time),
            SQL_TYPE_TIMESTAMP => Ok(SqlType::Timestamp),
            SQL_TYPE_BOOLEAN => Ok(SqlType::Boolean),
            SQL_TYPE_BLOB => Ok(SqlType::Blob),
            SQL_TYPE_ARRAY => Ok(SqlType::Array),
            SQL_TYPE_QUAD => Ok(SqlType::Quad),
            SQL_TYPE_NULL => Ok(SqlType::Null),
            _ => Err(Error::UnsupportedType { type_num }),
        }
    }

    /// Get the descriptor type code (nullable bit cleared).
    pub const fn type_num(&self) -> u16 {
        match self {
            SqlType::Text => SQL_TYPE_TEXT,
            SqlType::Varying => SQL_TYPE_VARYING,
            SqlType::Short => SQL_TYPE_SHORT,
            SqlType::Long => SQL_TYPE_LONG,
            SqlType::Int64 => SQL_TYPE_INT64,
            SqlType::Float => SQL_TYPE_FLOAT,
            SqlType::Double => SQL_TYPE_DOUBLE,
            SqlType::Date => SQL_TYPE_DATE,
            SqlType::Time => SQL_TYPE_TIME,
            SqlType::Timestamp => SQL_TYPE_TIMESTAMP,
            SqlType::Boolean => SQL_TYPE_BOOLEAN,
            SqlType::Blob => SQL_TYPE_BLOB,
            SqlType::Array => SQL_TYPE_ARRAY,
            SqlType::Quad => SQL_TYPE_QUAD,
            SqlType::Null => SQL_TYPE_NULL,
        }
    }

    /// Storage size in bytes when the layout is type-determined.
    ///
    /// `None` for VARYING (length-prefixed) and TEXT (declared length).
    /// SMALLINT is XDR-padded to 4 bytes on the wire.
    pub const fn fixed_length(&self) -> Option<usize> {
        match self {
            SqlType::Text | SqlType::Varying => None,
            SqlType::Short
            | SqlType::Long
            | SqlType::Float
            | SqlType::Time
            | SqlType::Date => Some(4),
            SqlType::Double
            | SqlType::Timestamp
            | SqlType::Blob
            | SqlType::Array
            | SqlType::Quad
            | SqlType::Int64 => Some(8),
            SqlType::Boolean => Some(1),
            SqlType::Null => Some(0),
        }
    }

    /// Maximum presentation width in characters.
    ///
    /// `None` when the width is not type-determined.
    pub const fn display_width(&self) -> Option<usize> {
        match self {
            SqlType::Text | SqlType::Varying | SqlType::Array => None,
            SqlType::Short => Some(6),
            SqlType::Long => Some(11),
            SqlType::Float | SqlType::Double => Some(17),
            SqlType::Time => Some(11),
            SqlType::Date => Some(10),
            SqlType::Timestamp => Some(22),
            SqlType::Blob => Some(0),
            SqlType::Quad | SqlType::Int64 => Some(20),
            SqlType::Boolean => Some(5),
            SqlType::Null => Some(4),
        }
    }

    /// Whether the column scale applies to this type.
    pub const fn is_scaled_integer(&self) -> bool {
        matches!(self, SqlType::Short | SqlType::Long | SqlType::Int64)
    }

    /// Whether this is a text type (charset applies).
    pub const fn is_text(&self) -> bool {
        matches!(self, SqlType::Text | SqlType::Varying)
    }
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SqlType::Text => "CHAR",
            SqlType::Varying => "VARCHAR",
            SqlType::Short => "SMALLINT",
            SqlType::Long => "INTEGER",
            SqlType::Int64 => "BIGINT",
            SqlType::Float => "FLOAT",
            SqlType::Double => "DOUBLE PRECISION",
            SqlType::Date => "DATE",
            SqlType::Time => "TIME",
            SqlType::Timestamp => "TIMESTAMP",
            SqlType::Boolean => "BOOLEAN",
            SqlType::Blob => "BLOB",
            SqlType::Array => "ARRAY",
            SqlType::Quad => "QUAD",
            SqlType::Null => "NULL",
        };
        f.write_str(name)
    }
}
