//! Column and ColumnInfo types for user-facing API.
//!
//! These types provide a clean interface for accessing column information
//! from a result set, derived from the internal ColumnMetadata.

use super::metadata::ColumnMetadata;
use super::sql_type::SqlType;

/// A column in a result set (user-facing representation).
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Column name (alias if given, else field name).
    pub name: String,
    /// Table the column comes from, empty for expressions.
    pub relation: String,
    /// Whether NULL values are allowed.
    pub nullable: bool,
    /// Column wire type.
    pub data_type: SqlType,
    /// Decimal scale (scaled integer types only).
    pub scale: i16,
    /// Declared byte length.
    pub length: u32,
    /// Raw descriptor subtype.
    pub subtype: i16,
}

impl Column {
    /// Create a column from metadata.
    pub fn from_metadata(meta: &ColumnMetadata) -> Self {
        Self {
            name: meta.name().to_string(),
            relation: meta.relation_name.clone(),
            nullable: meta.nullable,
            data_type: meta.sql_type,
            scale: if meta.sql_type.is_scaled_integer() {
                meta.scale
            } else {
                0
            },
            length: meta.length,
            subtype: meta.subtype,
        }
    }

    /// SQL type name as it would appear in DDL.
    ///
    /// Scaled integers report NUMERIC with the precision of their storage.
    pub fn type_name(&self) -> String {
        match self.data_type {
            SqlType::Text => format!("CHAR({})", self.length),
            SqlType::Varying => format!("VARCHAR({})", self.length),
            ty @ (SqlType::Short | SqlType::Long | SqlType::Int64) if self.scale < 0 => {
                let precision = match ty {
                    SqlType::Short => 4,
                    SqlType::Long => 9,
                    _ => 18,
                };
                format!("NUMERIC({},{})", precision, -self.scale)
            }
            SqlType::Blob => format!("BLOB SUB_TYPE {}", self.subtype),
            ty => ty.to_string(),
        }
    }
}

/// Shared column information for all rows in a result set.
#[derive(Debug, Clone, Default)]
pub struct ColumnInfo {
    /// Column definitions.
    pub columns: Vec<Column>,
}

impl ColumnInfo {
    /// Create new column info from columns.
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Create column info from descriptors.
    pub fn from_metadata(metadata: &[ColumnMetadata]) -> Self {
        Self {
            columns: metadata.iter().map(Column::from_metadata).collect(),
        }
    }

    /// Get column names.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Get the number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Get column by index.
    pub fn get(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// Find column index by name (case-insensitive).
    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        let name_upper = name.to_uppercase();
        self.columns
            .iter()
            .position(|c| c.name.to_uppercase() == name_upper)
    }
}
