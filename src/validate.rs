//! Whole-buffer UTF-8 validation.

use crate::codeunit::is_ascii;
use crate::decode::decode_one;

const WORD: usize = core::mem::size_of::<usize>();

const fn high_bit_mask() -> usize {
    let mut m: usize = 0;
    let mut i = 0;
    while i < WORD {
        m = (m << 8) | 0x80;
        i += 1;
    }
    m
}

const HIGH_BITS: usize = high_bit_mask();

/// Scans a contiguous run of ASCII bytes at the start of `bytes`, a
/// word-at-a-time. Generalizes the teacher crate's SIMD "is this chunk pure
/// ASCII" fast path to plain, stable-Rust `usize` chunks: if a whole machine
/// word has no set high bit, all 8 (or 4) bytes in it are ASCII and can be
/// skipped in one comparison instead of one-byte-at-a-time.
#[inline]
fn ascii_run_len(bytes: &[u8]) -> usize {
    let mut i = 0;
    let chunks = bytes.chunks_exact(WORD);
    let remainder = chunks.remainder();

    for chunk in chunks {
        let word = usize::from_ne_bytes(chunk.try_into().expect("chunk is exactly WORD bytes"));
        if word & HIGH_BITS != 0 {
            for &b in chunk {
                if !is_ascii(b) {
                    return i;
                }
                i += 1;
            }
            return i;
        }
        i += WORD;
    }

    for &b in remainder {
        if !is_ascii(b) {
            return i;
        }
        i += 1;
    }

    i
}

/// Returns the length of the longest prefix of `bytes` that is valid UTF-8.
///
/// If the whole buffer is valid, the result equals `bytes.len()`. Otherwise
/// the result is the byte offset of the first byte that cannot begin (or
/// continue) a valid encoding — the offset of the failing lead byte.
pub fn utf8_valid_up_to(bytes: &[u8]) -> usize {
    let len = bytes.len();
    let mut i = 0;

    while i < len {
        let b = bytes[i];
        if is_ascii(b) {
            i += ascii_run_len(&bytes[i..]);
            continue;
        }

        let mut cursor = i + 1;
        match decode_one(b, bytes, &mut cursor) {
            Ok(_) => i = cursor,
            Err(_) => return i,
        }
    }

    i
}

/// Returns `true` iff `bytes` is valid UTF-8 end to end.
pub fn is_utf8(bytes: &[u8]) -> bool {
    utf8_valid_up_to(bytes) == bytes.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_valid() {
        assert!(is_utf8(b""));
        assert_eq!(utf8_valid_up_to(b""), 0);
    }

    #[test]
    fn ascii_is_valid() {
        let s = b"Hello, world!";
        assert!(is_utf8(s));
        assert_eq!(utf8_valid_up_to(s), s.len());
    }

    #[test]
    fn multibyte_is_valid() {
        let s = "Hello, 世界! 🦀".as_bytes();
        assert!(is_utf8(s));
        assert_eq!(utf8_valid_up_to(s), s.len());
    }

    #[test]
    fn long_ascii_run_exercises_word_fast_path() {
        let s = "a".repeat(257);
        assert!(is_utf8(s.as_bytes()));
        assert_eq!(utf8_valid_up_to(s.as_bytes()), s.len());
    }

    #[test]
    fn truncated_multibyte_fails_at_lead() {
        let bytes = b"abc\xE2\x82"; // truncated U+20AC
        assert!(!is_utf8(bytes));
        assert_eq!(utf8_valid_up_to(bytes), 3);
    }

    #[test]
    fn overlong_fails_at_lead() {
        let bytes = [0xC0, 0x80];
        assert!(!is_utf8(&bytes));
        assert_eq!(utf8_valid_up_to(&bytes), 0);
    }

    #[test]
    fn surrogate_fails_at_lead() {
        let bytes = [b'x', 0xED, 0xA0, 0x80];
        assert!(!is_utf8(&bytes));
        assert_eq!(utf8_valid_up_to(&bytes), 1);
    }

    #[test]
    fn matches_core_str_on_ascii_and_multibyte() {
        let samples: [&[u8]; 3] = [b"plain ascii", "caf\u{e9}".as_bytes(), "\u{10348}".as_bytes()];
        for s in samples {
            assert_eq!(is_utf8(s), core::str::from_utf8(s).is_ok());
        }
    }
}
