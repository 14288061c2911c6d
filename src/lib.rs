//! Firebird wire value decoder for Rust
//!
//! Turns the raw bytes of a result-set column into typed values, given the
//! column's XSQLVAR descriptor from the describe phase. Transport, framing
//! and row fetching live elsewhere; this crate only decodes.
//!
//! # Example
//!
//! ```
//! use firebird_thin_rs::{ColumnMetadata, Result, SqlType, SqlValue, ValueDecoder};
//!
//! fn main() -> Result<()> {
//!     let decoder = ValueDecoder::new();
//!
//!     // NUMERIC(9,2) stored as INTEGER
//!     let amount = ColumnMetadata::for_type(SqlType::Long, -2, 0, 4);
//!     let value = decoder.decode(&amount, &[0xff, 0xff, 0xcf, 0xc7])?;
//!     assert_eq!(value.to_string(), "-123.45");
//!
//!     // DATE
//!     let day = ColumnMetadata::for_type(SqlType::Date, 0, 0, 4);
//!     let value = decoder.decode(&day, &[0x00, 0x00, 0xc9, 0x58])?;
//!     assert_eq!(value.to_string(), "2000-01-01");
//!     assert!(!matches!(value, SqlValue::Null));
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod protocol;

// Re-export main types
pub use error::{Error, Result};
pub use protocol::decode::{decode_value, CharsetDecoder, Utf8CharsetDecoder, ValueDecoder};
pub use protocol::types::{BlobId, Column, ColumnInfo, ColumnMetadata, SqlType, SqlValue};
