//! Segment stream assembly and walking
//!
//! The data region of a symbol is a run of segments followed by a 4-bit
//! terminator. Encoding writes each segment in order and the terminator;
//! padding up to the codeword boundary belongs to the symbol-assembly
//! layer, not here. Decoding walks indicators until the terminator or
//! until fewer than 4 bits remain.

use crate::codec::{self, alphanumeric, byte, kanji, numeric};
use crate::error::SegmentResult;
use crate::models::{BitBuffer, Mode, Segment};
use tracing::debug;

const TERMINATOR: u8 = 0b0000;
const ECI: u8 = 0b0111;

/// Encode `segments` in order into a fresh buffer, terminator included
pub fn encode_segments(segments: &[Segment], version: u8) -> SegmentResult<BitBuffer> {
    let mut buffer = BitBuffer::new();
    for segment in segments {
        segment.write(&mut buffer, version)?;
    }
    buffer.put(u32::from(TERMINATOR), 4);
    Ok(buffer)
}

/// Walk a segment stream and decode every segment in order
///
/// Returns the raw decoded bytes alongside the text reconstruction. The
/// two differ only for byte or kanji segments whose octets are not valid
/// UTF-8; the text substitutes there while the bytes pass through intact.
pub fn decode_payload(buffer: &mut BitBuffer, version: u8) -> SegmentResult<(Vec<u8>, String)> {
    let mut data = Vec::new();
    let mut content = String::new();

    loop {
        if buffer.available() < 4 {
            break;
        }
        let indicator = buffer.read(4)? as u8;
        if indicator == TERMINATOR {
            break;
        }
        if indicator == ECI {
            skip_eci(buffer)?;
            continue;
        }

        let mode = Mode::from_indicator(indicator)?;
        let count = codec::read_char_count(mode, buffer, version)?;
        match mode {
            Mode::Numeric => {
                let decoded = numeric::decode(buffer, count)?;
                data.extend_from_slice(decoded.as_bytes());
                content.push_str(&decoded);
            }
            Mode::AlphaNum => {
                let decoded = alphanumeric::decode(buffer, count)?;
                data.extend_from_slice(decoded.as_bytes());
                content.push_str(&decoded);
            }
            Mode::Byte => {
                let bytes = byte::decode_bytes(buffer, count)?;
                content.push_str(&String::from_utf8_lossy(&bytes));
                data.extend_from_slice(&bytes);
            }
            Mode::Kanji => {
                let bytes = kanji::decode_bytes(buffer, count)?;
                content.push_str(&String::from_utf8_lossy(&bytes));
                data.extend_from_slice(&bytes);
            }
        }
    }

    Ok((data, content))
}

/// Consume an ECI designator; character set switching is out of scope,
/// so the assignment number is read and dropped
fn skip_eci(buffer: &mut BitBuffer) -> SegmentResult<()> {
    let mut assignment = buffer.read(8)?;
    if assignment & 0x80 != 0 {
        assignment = ((assignment & 0x7F) << 8) | buffer.read(8)?;
        if assignment & 0x4000 != 0 {
            assignment = ((assignment & 0x3FFF) << 8) | buffer.read(8)?;
        }
    }
    debug!(assignment, "skipping ECI designator");
    Ok(())
}
