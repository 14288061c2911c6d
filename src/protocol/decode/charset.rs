//! Text decoding in the column's declared charset.
//!
//! Charset tables live outside this crate. The value decoder only needs
//! something that turns bytes plus a charset id into a `String`, so that is
//! the seam: implement `CharsetDecoder` to plug in real charset support.

use crate::error::{Error, Result};

/// Decodes CHAR/VARCHAR bytes declared in a given charset.
pub trait CharsetDecoder: Send + Sync {
    /// Decode `bytes` encoded in charset `charset_id`.
    ///
    /// Returns `Error::CharsetDecode` if the bytes are not valid text.
    fn decode_text(&self, bytes: &[u8], charset_id: u8) -> Result<String>;
}

/// Treats every charset as UTF-8.
///
/// Correct for UTF8, UNICODE_FSS, ASCII and NONE columns on a UTF8
/// connection, which is what the server sends when the attachment charset
/// is UTF8.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8CharsetDecoder;

impl CharsetDecoder for Utf8CharsetDecoder {
    fn decode_text(&self, bytes: &[u8], charset_id: u8) -> Result<String> {
        String::from_utf8(bytes.to_vec()).map_err(|e| Error::charset(charset_id, e.to_string()))
    }
}
