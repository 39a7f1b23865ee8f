//! Byte mode (Mode 0100)
//!
//! One octet per character; UTF-8 code units pass through byte-for-byte
//! with no re-encoding on either side.

use crate::error::{SegmentError, SegmentResult};
use crate::models::BitBuffer;

/// An empty byte segment carries nothing and is rejected outright
pub(crate) fn validate(data: &str) -> bool {
    !data.is_empty()
}

pub(crate) fn length_in_bits(char_count: usize) -> usize {
    char_count * 8
}

pub(crate) fn write(data: &str, buffer: &mut BitBuffer) -> SegmentResult<()> {
    for byte in data.bytes() {
        buffer.put(u32::from(byte), 8);
    }
    Ok(())
}

/// Read `length` raw octets; arbitrary byte values are accepted
pub(crate) fn decode_bytes(buffer: &mut BitBuffer, length: usize) -> SegmentResult<Vec<u8>> {
    let need = length * 8;
    if buffer.available() < need {
        return Err(SegmentError::NotEnoughBits {
            need,
            have: buffer.available(),
        });
    }
    let mut bytes = Vec::with_capacity(length);
    for _ in 0..length {
        bytes.push(buffer.read(8)? as u8);
    }
    Ok(bytes)
}

pub(crate) fn decode(buffer: &mut BitBuffer, length: usize) -> SegmentResult<String> {
    let bytes = decode_bytes(buffer, length)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
