//! Column descriptor from the describe phase.
//!
//! This struct preserves the XSQLVAR fields as the server sent them.
//! For user-facing API, use `Column` which provides a cleaner interface.

use crate::error::Result;
use crate::protocol::constants::{CHARSET_OCTETS, SQL_TYPE_NULLABLE_FLAG};

use super::sql_type::SqlType;

/// Column descriptor (one per result-set column).
///
/// Owns no row data. Use `Column` for user-facing API.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnMetadata {
    /// Wire type of the column.
    pub sql_type: SqlType,
    /// Decimal exponent for scaled integers (`stored * 10^scale`).
    pub scale: i16,
    /// Charset/collation for text, blob subtype for blobs.
    pub subtype: i16,
    /// Declared byte length.
    pub length: u32,
    /// Whether NULL values are allowed.
    pub nullable: bool,
    /// Field name.
    pub field_name: String,
    /// Relation (table) name.
    pub relation_name: String,
    /// Owner of the relation.
    pub owner_name: String,
    /// Alias given in the select list.
    pub alias_name: String,
}

impl ColumnMetadata {
    /// Create a descriptor from a raw type code with minimal info.
    ///
    /// The nullable flag is taken from the low bit of `type_num`.
    /// Returns `Err(Error::UnsupportedType)` for unknown codes.
    pub fn new(type_num: u16, scale: i16, subtype: i16, length: u32) -> Result<Self> {
        Ok(Self::for_type(SqlType::from_raw(type_num)?, scale, subtype, length)
            .with_nullable(type_num & SQL_TYPE_NULLABLE_FLAG != 0))
    }

    /// Create a descriptor for a known type.
    pub fn for_type(sql_type: SqlType, scale: i16, subtype: i16, length: u32) -> Self {
        Self {
            sql_type,
            scale,
            subtype,
            length,
            nullable: false,
            field_name: String::new(),
            relation_name: String::new(),
            owner_name: String::new(),
            alias_name: String::new(),
        }
    }

    /// Set nullability.
    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Set the naming fields.
    pub fn with_names(
        mut self,
        field_name: impl Into<String>,
        relation_name: impl Into<String>,
        owner_name: impl Into<String>,
        alias_name: impl Into<String>,
    ) -> Self {
        self.field_name = field_name.into();
        self.relation_name = relation_name.into();
        self.owner_name = owner_name.into();
        self.alias_name = alias_name.into();
        self
    }

    /// Number of bytes the column occupies on the wire.
    ///
    /// CHAR uses the declared length; VARCHAR is length-prefixed and returns
    /// `None`.
    pub fn io_length(&self) -> Option<usize> {
        match self.sql_type {
            SqlType::Text => Some(self.length as usize),
            ty => ty.fixed_length(),
        }
    }

    /// Presentation width in characters.
    pub fn display_length(&self) -> Option<usize> {
        match self.sql_type {
            SqlType::Text => Some(self.length as usize),
            ty => ty.display_width(),
        }
    }

    /// Declared charset id (low byte of the subtype).
    pub fn charset_id(&self) -> u8 {
        ((self.subtype as u16) & 0xff) as u8
    }

    /// Collation id (high byte of the subtype).
    pub fn collation_id(&self) -> u8 {
        ((self.subtype as u16) >> 8) as u8
    }

    /// Whether a text column holds raw octets rather than charset text.
    pub fn is_octets(&self) -> bool {
        self.sql_type.is_text() && self.charset_id() == CHARSET_OCTETS
    }

    /// Column name as shown to the user: alias, falling back to field name.
    pub fn name(&self) -> &str {
        if self.alias_name.is_empty() {
            &self.field_name
        } else {
            &self.alias_name
        }
    }
}
