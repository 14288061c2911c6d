//! Wire protocol value decoding.

pub mod buffer;
pub mod constants;
pub mod decode;
pub mod types;

pub use decode::{decode_value, CharsetDecoder, Utf8CharsetDecoder, ValueDecoder};
pub use types::{BlobId, Column, ColumnInfo, ColumnMetadata, SqlType, SqlValue};
