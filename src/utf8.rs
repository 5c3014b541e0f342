//! `&str`-producing convenience wrappers around whole-buffer validation.

use core::mem;

use crate::error::Utf8Error;
use crate::validate::is_utf8;

/// Converts a slice of bytes to a string slice, validating it first.
pub fn from_utf8(v: &[u8]) -> Result<&str, Utf8Error> {
    if is_utf8(v) {
        Ok(unsafe { from_utf8_unchecked(v) })
    } else {
        Err(Utf8Error)
    }
}

/// Converts a slice of bytes to a string slice without checking that the
/// bytes are valid UTF-8.
///
/// # Safety
/// The bytes passed in must be valid UTF-8.
pub const unsafe fn from_utf8_unchecked(v: &[u8]) -> &str {
    #[allow(clippy::transmute_bytes_to_str)]
    unsafe {
        mem::transmute(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_utf8() {
        let bytes = b"Hello, world!";
        let str = from_utf8(bytes).unwrap();
        assert_eq!(bytes, str.as_bytes());
    }

    #[test]
    fn valid_utf8_empty() {
        let bytes = b"";
        let str = from_utf8(bytes).unwrap();
        assert_eq!(bytes, str.as_bytes());
    }

    #[test]
    fn invalid_utf8() {
        let bytes = b"\x1F\x8Babcdefg";
        let err = from_utf8(bytes).unwrap_err();
        assert_eq!(err, Utf8Error);
    }

    #[test]
    fn multibyte_utf8() {
        let bytes = "Hello, 世界! 🦀".as_bytes();
        let str = from_utf8(bytes).unwrap();
        assert_eq!(bytes, str.as_bytes());
    }
}
