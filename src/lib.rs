//! # transcode-core
//!
//! A byte-exact transcoding core interoperating among UTF-8, UTF-16
//! (native-endian), and Latin-1 (ISO-8859-1). Every operation is a pure
//! function over caller-owned buffers: validation, bounded partial
//! conversion with well-defined replacement behavior, and exact
//! lossless/lossy mappings between the three encodings.
//!
//! The two load-bearing pieces are [`decode_one`], a byte-exact UTF-8
//! decoder that distinguishes five failure modes and never advances its
//! cursor on failure, and [`convert_utf16_to_utf8_partial`], whose
//! output-buffer-exhaustion behavior writes a replacement character sized
//! to exactly fill whatever destination space remains.
//!
//! Out of scope: locale-aware transformation, normalization, case folding,
//! bidi handling, grapheme segmentation, stateful streaming converters that
//! save continuation state across calls, UTF-16 endianness translation, and
//! BOM detection/stripping.

#![cfg_attr(not(test), no_std)]

mod codeunit;
mod decode;
mod error;
mod latin1;
mod utf16_to_utf8;
mod utf8;
mod utf8_to_utf16;
mod validate;

pub use codeunit::{classify_lead, is_ascii, is_continuation, Lead};
pub use decode::decode_one;
pub use error::{DecodeError, Utf8Error};
pub use latin1::{
    convert_latin1_to_utf16, convert_latin1_to_utf8, convert_latin1_to_utf8_partial,
    is_utf16_latin1, is_utf8_latin1, lossy_convert_utf16_to_latin1, lossy_convert_utf8_to_latin1,
    unsafe_is_valid_utf8_latin1, unsafe_valid_utf8_latin1_up_to, utf8_latin1_up_to,
};
pub use utf16_to_utf8::{convert_utf16_to_utf8, convert_utf16_to_utf8_partial};
pub use utf8::{from_utf8, from_utf8_unchecked};
pub use utf8_to_utf16::{
    convert_utf8_to_utf16, convert_utf8_to_utf16_without_replacement,
    unsafe_convert_valid_utf8_to_utf16,
};
pub use validate::{is_utf8, utf8_valid_up_to};

/// A UTF-8 validation result.
pub type Result<T> = core::result::Result<T, Utf8Error>;
