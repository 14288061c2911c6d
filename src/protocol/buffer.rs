//! Primitive readers for fixed-width wire values.
//!
//! Every reader takes the exact byte window of one column value and checks
//! its length before touching it. All values are big-endian (XDR).

use crate::error::{Error, Result};
use crate::protocol::types::SqlType;
use bytes::Buf;

#[inline]
fn check_length(window: &[u8], expected: usize, sql_type: SqlType) -> Result<()> {
    if window.len() != expected {
        return Err(Error::InvalidLength {
            sql_type,
            expected,
            actual: window.len(),
        });
    }
    Ok(())
}

/// Read a big-endian i32 from an exactly 4-byte window.
pub fn read_i32_be(window: &[u8], sql_type: SqlType) -> Result<i32> {
    check_length(window, 4, sql_type)?;
    let mut buf = window;
    Ok(buf.get_i32())
}

/// Read a big-endian u32 from an exactly 4-byte window.
pub fn read_u32_be(window: &[u8], sql_type: SqlType) -> Result<u32> {
    check_length(window, 4, sql_type)?;
    let mut buf = window;
    Ok(buf.get_u32())
}

/// Read a big-endian i64 from an exactly 8-byte window.
pub fn read_i64_be(window: &[u8], sql_type: SqlType) -> Result<i64> {
    check_length(window, 8, sql_type)?;
    let mut buf = window;
    Ok(buf.get_i64())
}

/// Read a big-endian IEEE-754 single from an exactly 4-byte window.
pub fn read_f32_be(window: &[u8]) -> Result<f32> {
    if window.len() != 4 {
        return Err(Error::MalformedFloatEncoding {
            expected: 4,
            actual: window.len(),
        });
    }
    let mut buf = window;
    Ok(buf.get_f32())
}

/// Read a big-endian IEEE-754 double from an exactly 8-byte window.
pub fn read_f64_be(window: &[u8]) -> Result<f64> {
    if window.len() != 8 {
        return Err(Error::MalformedFloatEncoding {
            expected: 8,
            actual: window.len(),
        });
    }
    let mut buf = window;
    Ok(buf.get_f64())
}

/// Read an 8-byte window as-is.
pub fn read_bytes8(window: &[u8], sql_type: SqlType) -> Result<[u8; 8]> {
    check_length(window, 8, sql_type)?;
    let mut out = [0u8; 8];
    out.copy_from_slice(window);
    Ok(out)
}

/// Split a window at `at`, failing if it is shorter than `at` bytes.
pub fn split_window(window: &[u8], at: usize, sql_type: SqlType) -> Result<(&[u8], &[u8])> {
    if window.len() < at {
        return Err(Error::InvalidLength {
            sql_type,
            expected: at,
            actual: window.len(),
        });
    }
    Ok(window.split_at(at))
}
