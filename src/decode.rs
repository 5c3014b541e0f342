//! Byte-exact single-code-point UTF-8 decoding.

use crate::codeunit::is_continuation;
use crate::error::DecodeError;

/// Structural shape of a lead byte, as seen by [`decode_one`].
///
/// This is deliberately more permissive than [`crate::codeunit::classify_lead`]:
/// it only checks the high-bit *pattern* (`0`, `110`, `1110`, `11110`), not
/// whether the lead can ever produce a valid scalar. `0xC0`/`0xC1` match the
/// two-byte pattern and `0xF5..=0xF7` match the four-byte pattern — both are
/// structurally fine leads that always fail later, as an overlong encoding or
/// an out-of-range code point respectively. Only bytes matching no pattern at
/// all (continuation bytes used as a lead, and `0xF8..=0xFF`) are rejected
/// here.
enum Pattern {
    Ascii,
    Two,
    Three,
    Four,
    Invalid,
}

#[inline]
fn lead_pattern(b: u8) -> Pattern {
    match b {
        0x00..=0x7F => Pattern::Ascii,
        0xC0..=0xDF => Pattern::Two,
        0xE0..=0xEF => Pattern::Three,
        0xF0..=0xF7 => Pattern::Four,
        _ => Pattern::Invalid,
    }
}

/// Decodes one code point from `bytes`, given its already-read `lead` byte
/// and a read-`cursor` positioned at the byte after the lead.
///
/// On success, returns the assembled scalar and advances `*cursor` past the
/// consumed continuation bytes. On failure, returns the detailed
/// [`DecodeError`] and leaves `*cursor` exactly where it was: the lead byte
/// is still unconsumed from the caller's point of view.
///
/// Detection follows a fixed order so that exactly one error variant is
/// produced for any given byte sequence: bad lead, not enough bytes, bad
/// trailing byte, overlong form, then out-of-range/surrogate code point.
pub fn decode_one(lead: u8, bytes: &[u8], cursor: &mut usize) -> Result<u32, DecodeError> {
    match lead_pattern(lead) {
        Pattern::Invalid => Err(DecodeError::BadLead),
        Pattern::Ascii => Ok(lead as u32),
        Pattern::Two => decode_multibyte(lead, bytes, cursor, 1, 2, 0x1F),
        Pattern::Three => decode_multibyte(lead, bytes, cursor, 2, 3, 0x0F),
        Pattern::Four => decode_multibyte(lead, bytes, cursor, 3, 4, 0x07),
    }
}

#[inline]
fn decode_multibyte(
    lead: u8,
    bytes: &[u8],
    cursor: &mut usize,
    continuations: usize,
    total_len: usize,
    lead_mask: u8,
) -> Result<u32, DecodeError> {
    let start = *cursor;
    let remaining = bytes.len() - start;

    if remaining < continuations {
        return Err(DecodeError::NotEnough {
            available: 1 + remaining,
            needed: total_len,
        });
    }

    let mut scalar = (lead & lead_mask) as u32;
    for i in 0..continuations {
        let b = bytes[start + i];
        if !is_continuation(b) {
            return Err(DecodeError::BadTrailing { units_observed: i + 2 });
        }
        scalar = (scalar << 6) | (b & 0x3F) as u32;
    }

    let min_for_len = match total_len {
        2 => 0x80,
        3 => 0x800,
        4 => 0x10000,
        _ => unreachable!("total_len is always 2, 3, or 4"),
    };
    if scalar < min_for_len {
        return Err(DecodeError::NotShortest { scalar, units_observed: total_len });
    }
    if (0xD800..=0xDFFF).contains(&scalar) || scalar > 0x10FFFF {
        return Err(DecodeError::BadCodePoint { scalar, units_observed: total_len });
    }

    *cursor = start + continuations;
    Ok(scalar)
}
