//! Opaque handles for BLOB, ARRAY and QUAD columns.
//!
//! A BLOB or ARRAY column does not carry its content inline. The row holds an
//! 8-byte id, and the content is read separately by opening the blob with
//! that id. This module only models the id; fetching is done elsewhere.

use std::fmt;

/// 8-byte blob/array/quad id as received in the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlobId([u8; 8]);

impl BlobId {
    /// Wire size of an id.
    pub const LEN: usize = 8;

    /// Create an id from its raw bytes.
    pub const fn new(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }

    /// Raw id bytes, as they must be sent back to open the blob.
    pub fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }

    /// The id as a big-endian 64-bit integer.
    pub fn as_u64(&self) -> u64 {
        u64::from_be_bytes(self.0)
    }

    /// Check if the id is all zeroes (no blob assigned).
    pub fn is_null(&self) -> bool {
        self.0 == [0; 8]
    }
}

impl From<[u8; 8]> for BlobId {
    fn from(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for BlobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.as_u64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blob_id_accessors() {
        let id = BlobId::new([0, 0, 0, 0x81, 0, 0, 0, 0x02]);
        assert_eq!(id.as_u64(), 0x0000_0081_0000_0002);
        assert_eq!(id.as_bytes(), &[0, 0, 0, 0x81, 0, 0, 0, 0x02]);
        assert!(!id.is_null());
        assert_eq!(id.to_string(), "0000008100000002");
    }

    #[test]
    fn test_blob_id_null() {
        assert!(BlobId::from([0; 8]).is_null());
    }
}
