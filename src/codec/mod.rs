//! Mode-keyed segment codecs
//!
//! One submodule per data mode (numeric, alphanumeric, byte, kanji), all
//! behind a single dispatch keyed by the `Mode` tag so the variant set
//! stays closed and exhaustively matched:
//! - validation of candidate payload strings
//! - packed data-portion sizing
//! - serialization into and deserialization out of a `BitBuffer`

mod alphanumeric;
mod byte;
mod kanji;
mod numeric;
mod payload;

pub use payload::{decode_payload, encode_segments};

use crate::error::{SegmentError, SegmentResult};
use crate::models::{BitBuffer, Mode};
use tracing::trace;

/// Whether every unit of `data` is representable in `mode`'s alphabet
///
/// Pure predicate; `Segment::new` runs it so the write path never has to.
pub fn is_valid(mode: Mode, data: &str) -> bool {
    match mode {
        Mode::Numeric => numeric::validate(data),
        Mode::AlphaNum => alphanumeric::validate(data),
        Mode::Byte => byte::validate(data),
        Mode::Kanji => kanji::validate(data),
    }
}

/// Encoding units in `data`: digits, table characters, octets, or
/// Shift-JIS byte pairs depending on the mode
pub(crate) fn char_count(mode: Mode, data: &str) -> usize {
    match mode {
        Mode::Numeric | Mode::AlphaNum | Mode::Byte => data.len(),
        Mode::Kanji => data.chars().count() / 2,
    }
}

/// Packed size of the data portion for `char_count` units
pub(crate) fn length_in_bits(mode: Mode, char_count: usize) -> usize {
    match mode {
        Mode::Numeric => numeric::length_in_bits(char_count),
        Mode::AlphaNum => alphanumeric::length_in_bits(char_count),
        Mode::Byte => byte::length_in_bits(char_count),
        Mode::Kanji => kanji::length_in_bits(char_count),
    }
}

/// Serialize the payload's data portion into `buffer`
pub(crate) fn write_payload(mode: Mode, data: &str, buffer: &mut BitBuffer) -> SegmentResult<()> {
    match mode {
        Mode::Numeric => numeric::write(data, buffer),
        Mode::AlphaNum => alphanumeric::write(data, buffer),
        Mode::Byte => byte::write(data, buffer),
        Mode::Kanji => kanji::write(data, buffer),
    }
}

/// Decode one segment of `mode`, with `buffer` positioned immediately
/// after the 4-bit mode indicator
///
/// Reads the character-count field at the width `version` dictates, then
/// exactly the payload bits, and reconstructs the source string. Fails if
/// the stream runs short at any step or a packed group value is out of
/// range for its width.
pub fn decode_segment(mode: Mode, buffer: &mut BitBuffer, version: u8) -> SegmentResult<String> {
    let count = read_char_count(mode, buffer, version)?;
    match mode {
        Mode::Numeric => numeric::decode(buffer, count),
        Mode::AlphaNum => alphanumeric::decode(buffer, count),
        Mode::Byte => byte::decode(buffer, count),
        Mode::Kanji => kanji::decode(buffer, count),
    }
}

/// Consume the character-count field that follows a mode indicator
pub(crate) fn read_char_count(
    mode: Mode,
    buffer: &mut BitBuffer,
    version: u8,
) -> SegmentResult<usize> {
    let count_bits = mode.length_bits_for_version(version)?;
    if buffer.available() < count_bits {
        return Err(SegmentError::NotEnoughBits {
            need: count_bits,
            have: buffer.available(),
        });
    }
    let count = buffer.read(count_bits)? as usize;
    trace!(mode = ?mode, count, version, "decoding segment");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Segment;

    #[test]
    fn test_decode_segment_is_inverse_of_write() {
        let cases = [
            (Mode::Numeric, "8675309"),
            (Mode::AlphaNum, "QR SEGMENTS/0.1"),
            (Mode::Byte, "arbitrary bytes \u{1F600}"),
            (Mode::Kanji, "\u{93}\u{5F}\u{E4}\u{AA}"),
        ];
        for (mode, data) in cases {
            let segment = Segment::new(mode, data).unwrap();
            let mut buffer = BitBuffer::new();
            segment.write(&mut buffer, 12).unwrap();

            let indicator = buffer.read(4).unwrap() as u8;
            assert_eq!(indicator, mode.indicator());
            assert_eq!(decode_segment(mode, &mut buffer, 12).unwrap(), data);
            assert_eq!(buffer.available(), 0, "decode must consume exactly");
        }
    }

    #[test]
    fn test_decode_segment_rejects_truncated_count_field() {
        let mut buffer = BitBuffer::new();
        buffer.put(3, 4);
        assert_eq!(
            decode_segment(Mode::Numeric, &mut buffer, 1).unwrap_err(),
            SegmentError::NotEnoughBits { need: 10, have: 4 }
        );
    }
}
