//! Kanji mode (Mode 1000)
//!
//! Shift-JIS double-byte characters packed in 13 bits each. The payload
//! carries the Shift-JIS octets as chars U+0000..=U+00FF, two per kanji;
//! one character-count unit covers one byte pair.

use crate::error::{SegmentError, SegmentResult};
use crate::models::BitBuffer;

pub(crate) fn validate(data: &str) -> bool {
    let units: Vec<u32> = data.chars().map(|c| c as u32).collect();
    if units.is_empty() || units.len() % 2 != 0 {
        return false;
    }
    units.chunks(2).all(|pair| {
        pair[0] <= 0xFF && pair[1] <= 0xFF && sjis_offset((pair[0] << 8) | pair[1]).is_some()
    })
}

pub(crate) fn length_in_bits(char_count: usize) -> usize {
    char_count * 13
}

pub(crate) fn write(data: &str, buffer: &mut BitBuffer) -> SegmentResult<()> {
    let mut chars = data.chars();
    while let Some(hi_char) = chars.next() {
        let lo_char = chars.next().ok_or(SegmentError::IllegalChar(hi_char))?;
        let (hi, lo) = (hi_char as u32, lo_char as u32);
        if hi > 0xFF || lo > 0xFF {
            let bad = if hi > 0xFF { hi_char } else { lo_char };
            return Err(SegmentError::IllegalChar(bad));
        }
        let code = (hi << 8) | lo;
        let offset = sjis_offset(code).ok_or(SegmentError::IllegalChar(hi_char))?;
        let c = code - offset;
        buffer.put((c >> 8) * 0xC0 + (c & 0xFF), 13);
    }
    Ok(())
}

/// Decode `length` kanji, two Shift-JIS octets per 13-bit value
pub(crate) fn decode_bytes(buffer: &mut BitBuffer, length: usize) -> SegmentResult<Vec<u8>> {
    let mut bytes = Vec::with_capacity(length * 2);
    for _ in 0..length {
        if buffer.available() < 13 {
            return Err(SegmentError::NotEnoughBits {
                need: 13,
                have: buffer.available(),
            });
        }
        let value = buffer.read(13)?;
        let mut code = ((value / 0xC0) << 8) | (value % 0xC0);
        code += if code < 0x1F00 { 0x8140 } else { 0xC140 };
        bytes.push((code >> 8) as u8);
        bytes.push((code & 0xFF) as u8);
    }
    Ok(bytes)
}

pub(crate) fn decode(buffer: &mut BitBuffer, length: usize) -> SegmentResult<String> {
    let bytes = decode_bytes(buffer, length)?;
    Ok(bytes.into_iter().map(char::from).collect())
}

/// Subtraction base for a double-byte code, per its Shift-JIS row range
fn sjis_offset(code: u32) -> Option<u32> {
    let lo = code & 0xFF;
    if !(0x40..=0xFC).contains(&lo) || lo == 0x7F {
        return None;
    }
    match code {
        0x8140..=0x9FFC => Some(0x8140),
        0xE040..=0xEBBF => Some(0xC140),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 点 (0x935F) and 茗 (0xE4AA), the ISO/IEC 18004 worked examples
    const TEN: &str = "\u{93}\u{5F}";
    const MYO: &str = "\u{E4}\u{AA}";

    #[test]
    fn test_validate() {
        assert!(validate(TEN));
        assert!(validate(MYO));
        assert!(!validate(""));
        // Odd number of octets
        assert!(!validate("\u{93}"));
        // Lead byte outside both Shift-JIS rows
        assert!(!validate("\u{40}\u{40}"));
        // 0x7F is never a valid trail byte
        assert!(!validate("\u{93}\u{7F}"));
        // Not a byte string
        assert!(!validate("点"));
    }

    #[test]
    fn test_packing_matches_reference_values() {
        // 0x935F - 0x8140 = 0x121F; 0x12 * 0xC0 + 0x1F = 0x0D9F
        let mut buffer = BitBuffer::new();
        write(TEN, &mut buffer).unwrap();
        assert_eq!(buffer.len(), 13);
        assert_eq!(buffer.read(13).unwrap(), 0x0D9F);

        // 0xE4AA - 0xC140 = 0x236A; 0x23 * 0xC0 + 0x6A = 0x1AAA
        let mut buffer = BitBuffer::new();
        write(MYO, &mut buffer).unwrap();
        assert_eq!(buffer.read(13).unwrap(), 0x1AAA);
    }

    #[test]
    fn test_roundtrip() {
        let data = format!("{TEN}{MYO}");
        let mut buffer = BitBuffer::new();
        write(&data, &mut buffer).unwrap();
        assert_eq!(buffer.len(), length_in_bits(2));
        assert_eq!(decode(&mut buffer, 2).unwrap(), data);
    }

    #[test]
    fn test_decode_rejects_truncated_stream() {
        let mut buffer = BitBuffer::new();
        buffer.put(0x0D9F, 13);
        assert_eq!(
            decode(&mut buffer, 2).unwrap_err(),
            SegmentError::NotEnoughBits { need: 13, have: 0 }
        );
    }

    #[test]
    fn test_write_rejects_non_sjis_pair() {
        let mut buffer = BitBuffer::new();
        assert!(matches!(
            write("\u{40}\u{40}", &mut buffer).unwrap_err(),
            SegmentError::IllegalChar(_)
        ));
    }
}
