/// A UTF-8 error.
///
/// Returned by the whole-buffer entry points ([`crate::from_utf8`],
/// [`crate::is_utf8`]) when a buffer is not valid UTF-8 anywhere. Callers
/// that need to know *why* a buffer is invalid, byte-exactly, should decode
/// with [`crate::decode_one`] instead, which reports a [`DecodeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Utf8Error;

impl core::fmt::Display for Utf8Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "invalid utf-8 sequence")
    }
}

/// The reason a single code point failed to decode.
///
/// Exactly one variant is produced per failed call to
/// [`crate::decode_one`], matching the five reporters of the decoding
/// contract. The cursor passed to `decode_one` is left unchanged on every
/// variant below: the caller always observes the lead byte as still
/// unconsumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The lead byte's high bits do not match any valid UTF-8 lead pattern.
    BadLead,
    /// The lead byte promises more continuation bytes than remain in the
    /// input.
    NotEnough {
        /// Continuation bytes actually available after the lead.
        available: usize,
        /// Continuation bytes the lead byte requires.
        needed: usize,
    },
    /// A required continuation byte was not `0b10xxxxxx`.
    BadTrailing {
        /// 1-based count of units observed from the lead up to and
        /// including the first bad byte (so this is always >= 2).
        units_observed: usize,
    },
    /// The assembled scalar is a surrogate or exceeds `0x10FFFF`.
    BadCodePoint {
        /// The assembled (invalid) scalar value.
        scalar: u32,
        /// Total bytes consumed to assemble it, including the lead.
        units_observed: usize,
    },
    /// The assembled scalar was encoded using more bytes than the
    /// shortest valid form requires (an overlong encoding).
    NotShortest {
        /// The assembled (overlong) scalar value.
        scalar: u32,
        /// Total bytes consumed to assemble it, including the lead.
        units_observed: usize,
    },
}

impl core::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DecodeError::BadLead => write!(f, "invalid utf-8 lead byte"),
            DecodeError::NotEnough { available, needed } => {
                write!(f, "not enough continuation bytes: have {available}, need {needed}")
            }
            DecodeError::BadTrailing { units_observed } => {
                write!(f, "invalid continuation byte at offset {units_observed}")
            }
            DecodeError::BadCodePoint { scalar, units_observed } => {
                write!(f, "invalid code point 0x{scalar:X} ({units_observed} units)")
            }
            DecodeError::NotShortest { scalar, units_observed } => {
                write!(f, "overlong encoding of 0x{scalar:X} ({units_observed} units)")
            }
        }
    }
}
