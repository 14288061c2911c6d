//! Column descriptors and decoded value types.

mod column;
mod handle;
mod metadata;
mod sql_type;
mod value;

pub use column::{Column, ColumnInfo};
pub use handle::BlobId;
pub use metadata::ColumnMetadata;
pub use sql_type::SqlType;
pub use value::SqlValue;
