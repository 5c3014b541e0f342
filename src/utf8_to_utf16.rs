//! UTF-8 to UTF-16 conversion.

use crate::codeunit::is_ascii;
use crate::decode::decode_one;
use crate::error::DecodeError;

const REPLACEMENT_CHARACTER: u16 = 0xFFFD;

#[inline]
fn push_scalar(scalar: u32, dst: &mut [u16]) -> usize {
    if scalar <= 0xFFFF {
        dst[0] = scalar as u16;
        1
    } else {
        let v = scalar - 0x10000;
        dst[0] = 0xD800 + (v >> 10) as u16;
        dst[1] = 0xDC00 + (v & 0x3FF) as u16;
        2
    }
}

/// Number of source bytes a maximal invalid subsequence consumes for a
/// given [`DecodeError`], so that the reader always makes progress and
/// never re-examines a byte already folded into a replacement unit.
///
/// - `BadLead`: only the lead byte is consumed — the remaining
///   (possibly innocent-looking) bytes are re-examined as fresh leads on
///   the next iteration.
/// - `NotEnough`: the lead is truncated by the true end of the buffer (a
///   whole-buffer scan always passes the full `src` as both `bytes` and
///   limit, so this is the only way `NotEnough` can fire), so the whole
///   remainder — lead plus whatever continuation bytes are left —
///   collapses into the single maximal-subpart replacement, matching
///   `String::from_utf8_lossy`'s treatment of an incomplete trailing
///   sequence. `available` already counts the lead byte (see
///   `decode.rs::decode_multibyte`), so it equals the exact number of
///   bytes remaining from the lead to the end of the buffer.
/// - `BadTrailing`: the lead and any continuation bytes that were valid
///   *before* the first bad one are consumed; the offending byte itself is
///   left to be reprocessed, since it may start a new valid sequence.
/// - `NotShortest` / `BadCodePoint`: the whole well-shaped-but-invalid
///   sequence is consumed, since every byte in it was already confirmed to
///   be lead + matching continuation bytes.
#[inline]
pub(crate) fn error_skip(err: DecodeError) -> usize {
    match err {
        DecodeError::BadLead => 1,
        DecodeError::NotEnough { available, .. } => available,
        DecodeError::BadTrailing { units_observed } => units_observed - 1,
        DecodeError::NotShortest { units_observed, .. } => units_observed,
        DecodeError::BadCodePoint { units_observed, .. } => units_observed,
    }
}

/// Converts `src` to UTF-16, replacing each maximal invalid subsequence
/// with one U+FFFD code unit.
///
/// Requires `dst.len() > src.len()`: every UTF-8 byte yields at most one
/// UTF-16 code unit, since a 4-byte sequence yields 2 code units (fewer
/// units than input bytes), so this bound is always sufficient.
pub fn convert_utf8_to_utf16(src: &[u8], dst: &mut [u16]) -> usize {
    debug_assert!(dst.len() > src.len(), "destination buffer too small");

    let mut i = 0;
    let mut written = 0;

    while i < src.len() {
        let b = src[i];
        if is_ascii(b) {
            dst[written] = b as u16;
            written += 1;
            i += 1;
            continue;
        }

        let mut cursor = i + 1;
        match decode_one(b, src, &mut cursor) {
            Ok(scalar) => {
                written += push_scalar(scalar, &mut dst[written..]);
                i = cursor;
            }
            Err(err) => {
                dst[written] = REPLACEMENT_CHARACTER;
                written += 1;
                i += error_skip(err);
            }
        }
    }

    written
}

/// Converts `src` to UTF-16 iff it is entirely valid UTF-8 and fits in
/// `dst`; otherwise returns `None`.
///
/// No output count is committed as definitive on failure: a caller that
/// gets `None` back must discard whatever was written rather than relying
/// on a partial result.
pub fn convert_utf8_to_utf16_without_replacement(src: &[u8], dst: &mut [u16]) -> Option<usize> {
    let mut i = 0;
    let mut written = 0;

    while i < src.len() {
        let b = src[i];
        let (scalar, next_i) = if is_ascii(b) {
            (b as u32, i + 1)
        } else {
            let mut cursor = i + 1;
            match decode_one(b, src, &mut cursor) {
                Ok(scalar) => (scalar, cursor),
                Err(_) => return None,
            }
        };

        let needed = if scalar <= 0xFFFF { 1 } else { 2 };
        if written + needed > dst.len() {
            return None;
        }

        written += push_scalar(scalar, &mut dst[written..]);
        i = next_i;
    }

    Some(written)
}

/// Converts `src` to UTF-16 without validating it, for callers that have
/// already established validity (e.g. via [`crate::is_utf8`]).
///
/// # Safety
/// `src` must be valid UTF-8, and `dst.len() >= src.len()`.
pub unsafe fn unsafe_convert_valid_utf8_to_utf16(src: &[u8], dst: &mut [u16]) -> usize {
    debug_assert!(dst.len() >= src.len(), "destination buffer too small");

    let mut i = 0;
    let mut written = 0;

    while i < src.len() {
        let b = src[i];
        if is_ascii(b) {
            dst[written] = b as u16;
            written += 1;
            i += 1;
            continue;
        }

        let mut cursor = i + 1;
        // Safety: caller guarantees `src` is valid UTF-8, so this always succeeds.
        let scalar = unsafe { decode_one(b, src, &mut cursor).unwrap_unchecked() };
        written += push_scalar(scalar, &mut dst[written..]);
        i = cursor;
    }

    written
}
