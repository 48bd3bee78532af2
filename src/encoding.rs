//! Character decoding for the archive's pages.
//!
//! The whole site, index included, is authored in Shift_JIS, so pages
//! are decoded with the label configured in [`crate::ScrapeOptions`]
//! rather than sniffed per page. Decoding is lossy and never fails;
//! an unrecognized label is the only error surface.

use encoding_rs::Encoding;

/// Decode bytes with a forced WHATWG encoding label.
///
/// Returns `None` when the label names no known encoding. Decoding
/// itself cannot fail: invalid sequences become the Unicode
/// replacement character.
#[must_use]
pub fn decode_with_label(bytes: &[u8], label: &str) -> Option<String> {
    let encoding = Encoding::for_label(label.as_bytes())?;
    let (decoded, _encoding_used, _had_errors) = encoding.decode(bytes);
    Some(decoded.into_owned())
}
