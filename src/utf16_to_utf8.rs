//! UTF-16 to UTF-8 conversion, including the bounded partial converter whose
//! truncation-fill behavior is the hard engineering of this crate.

const REPLACEMENT_CHARACTER: u32 = 0xFFFD;

#[inline]
fn is_high_surrogate(u: u16) -> bool {
    (0xD800..=0xDBFF).contains(&u)
}

#[inline]
fn is_low_surrogate(u: u16) -> bool {
    (0xDC00..=0xDFFF).contains(&u)
}

#[inline]
fn combine_surrogates(high: u16, low: u16) -> u32 {
    0x10000 + (((high - 0xD800) as u32) << 10) + (low - 0xDC00) as u32
}

#[inline]
fn utf8_len(scalar: u32) -> usize {
    match scalar {
        0x00..=0x7F => 1,
        0x80..=0x7FF => 2,
        0x800..=0xFFFF => 3,
        _ => 4,
    }
}

#[inline]
fn encode_scalar(scalar: u32, dst: &mut [u8]) -> usize {
    match scalar {
        0x00..=0x7F => {
            dst[0] = scalar as u8;
            1
        }
        0x80..=0x7FF => {
            dst[0] = 0xC0 | (scalar >> 6) as u8;
            dst[1] = 0x80 | (scalar & 0x3F) as u8;
            2
        }
        0x800..=0xFFFF => {
            dst[0] = 0xE0 | (scalar >> 12) as u8;
            dst[1] = 0x80 | ((scalar >> 6) & 0x3F) as u8;
            dst[2] = 0x80 | (scalar & 0x3F) as u8;
            3
        }
        _ => {
            dst[0] = 0xF0 | (scalar >> 18) as u8;
            dst[1] = 0x80 | ((scalar >> 12) & 0x3F) as u8;
            dst[2] = 0x80 | ((scalar >> 6) & 0x3F) as u8;
            dst[3] = 0x80 | (scalar & 0x3F) as u8;
            4
        }
    }
}

/// Writes the bit-exact truncation-fill replacement sized to exactly consume
/// `dst`, per the normative byte table: `EF BF BD` for 3 bytes, `C2 BF` for
/// 2, `3F` for 1, nothing for 0. `dst` is always 0..=3 bytes long when this
/// is called, since any scalar that needs more than 3 bytes to write a full
/// replacement (there are none — the widest thing ever emitted here as a
/// *replacement* is the 3-byte U+FFFD) only reaches this path when fewer
/// than 3 bytes remain.
#[inline]
fn write_truncation_fill(dst: &mut [u8]) -> usize {
    match dst.len() {
        0 => 0,
        1 => {
            dst[0] = 0x3F;
            1
        }
        2 => {
            dst[0] = 0xC2;
            dst[1] = 0xBF;
            2
        }
        _ => {
            dst[0] = 0xEF;
            dst[1] = 0xBF;
            dst[2] = 0xBD;
            3
        }
    }
}

/// Writes `scalar`'s UTF-8 encoding into `dst[*written..]`, advancing
/// `*written`. If the full encoding does not fit, writes the bit-exact
/// truncation-fill instead (sized to exactly exhaust the remaining space)
/// and returns `false`; otherwise writes the full encoding and returns
/// `true`.
#[inline]
fn write_scalar_bounded(scalar: u32, dst: &mut [u8], written: &mut usize) -> bool {
    let needed = utf8_len(scalar);
    let remaining = dst.len() - *written;
    if remaining < needed {
        *written += write_truncation_fill(&mut dst[*written..]);
        false
    } else {
        *written += encode_scalar(scalar, &mut dst[*written..]);
        true
    }
}

/// Converts as much of `src` to UTF-8 as fits in `dst`, returning
/// `(read, written)`.
///
/// Both counters are bounded: `read <= src.len()` and `written <= dst.len()`.
/// Well-formed code points are encoded normally (1-4 bytes); unpaired
/// surrogates are emitted as U+FFFD. When the next code point's encoding
/// would not fit in the remaining destination space, no partial code point
/// is written — instead a replacement character sized to exactly fill the
/// remaining space is written (see [`write_truncation_fill`]), the source
/// unit that triggered it is still counted as read, and the call returns.
/// This lets a caller resume at `src[read..]` with a fresh destination
/// buffer and always get well-formed UTF-8 out of each call.
pub fn convert_utf16_to_utf8_partial(src: &[u16], dst: &mut [u8]) -> (usize, usize) {
    let mut read = 0;
    let mut written = 0;
    let mut pending_high: Option<u16> = None;

    while read < src.len() {
        let unit = src[read];

        let (scalar, consume) = match pending_high.take() {
            None => {
                if is_high_surrogate(unit) {
                    pending_high = Some(unit);
                    read += 1;
                    continue;
                } else if is_low_surrogate(unit) {
                    (REPLACEMENT_CHARACTER, true)
                } else {
                    (unit as u32, true)
                }
            }
            Some(high) => {
                if is_low_surrogate(unit) {
                    (combine_surrogates(high, unit), true)
                } else {
                    // Stale high surrogate: emit its replacement without
                    // consuming `unit`, which gets reprocessed from Normal
                    // on the next iteration.
                    (REPLACEMENT_CHARACTER, false)
                }
            }
        };

        if !write_scalar_bounded(scalar, dst, &mut written) {
            if consume {
                read += 1;
            }
            return (read, written);
        }
        if consume {
            read += 1;
        }
    }

    if pending_high.is_some() {
        write_scalar_bounded(REPLACEMENT_CHARACTER, dst, &mut written);
    }

    (read, written)
}

/// Converts all of `src` to UTF-8, writing into `dst`.
///
/// Requires `dst.len() >= 3 * src.len()`, the worst-case expansion for
/// well-formed input and for unpaired-surrogate replacement alike (every
/// source unit consumes at most 3 destination bytes: standalone non-BMP
/// pairs are 2 source units for 4 destination bytes, which is less than
/// 3-per-unit). Panics in debug builds if the whole source was not
/// consumed, which can only happen if the precondition was violated.
pub fn convert_utf16_to_utf8(src: &[u16], dst: &mut [u8]) -> usize {
    debug_assert!(dst.len() >= 3 * src.len(), "destination buffer too small");
    let (read, written) = convert_utf16_to_utf8_partial(src, dst);
    debug_assert_eq!(read, src.len(), "partial converter did not consume all input");
    written
}
