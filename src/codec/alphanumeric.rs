//! Alphanumeric mode (Mode 0010)
//!
//! Pairs of characters = 11 bits, single trailing character = 6 bits

use crate::error::{SegmentError, SegmentResult};
use crate::models::BitBuffer;

/// Alphanumeric character set: 0-9, A-Z, space, $%*+-./:
const ALPHANUMERIC_TABLE: [char; 45] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I',
    'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', ' ', '$',
    '%', '*', '+', '-', '.', '/', ':',
];

pub(crate) fn validate(data: &str) -> bool {
    data.chars().all(|c| char_index(c).is_some())
}

pub(crate) fn length_in_bits(char_count: usize) -> usize {
    11 * (char_count / 2) + 6 * (char_count % 2)
}

pub(crate) fn write(data: &str, buffer: &mut BitBuffer) -> SegmentResult<()> {
    let mut chars = data.chars();
    while let Some(first) = chars.next() {
        match chars.next() {
            Some(second) => {
                buffer.put(index_of(first)? * 45 + index_of(second)?, 11);
            }
            None => {
                buffer.put(index_of(first)?, 6);
            }
        }
    }
    Ok(())
}

/// Decode `length` characters, pairs first, then the odd single if any
pub(crate) fn decode(buffer: &mut BitBuffer, length: usize) -> SegmentResult<String> {
    let mut result = String::with_capacity(length);
    let mut remaining = length;

    while remaining >= 2 {
        require(buffer, 11)?;
        let pair = buffer.read(11)?;
        let first = pair / 45;
        let second = pair % 45;
        // 11 bits hold 0-2047 but only 0-2024 map to character pairs
        if first >= 45 {
            return Err(SegmentError::OutOfRangeValue {
                value: pair,
                max: 45 * 45 - 1,
            });
        }
        result.push(ALPHANUMERIC_TABLE[first as usize]);
        result.push(ALPHANUMERIC_TABLE[second as usize]);
        remaining -= 2;
    }

    if remaining == 1 {
        require(buffer, 6)?;
        let single = buffer.read(6)?;
        if single >= 45 {
            return Err(SegmentError::OutOfRangeValue {
                value: single,
                max: 44,
            });
        }
        result.push(ALPHANUMERIC_TABLE[single as usize]);
    }

    Ok(result)
}

fn require(buffer: &BitBuffer, need: usize) -> SegmentResult<()> {
    if buffer.available() < need {
        return Err(SegmentError::NotEnoughBits {
            need,
            have: buffer.available(),
        });
    }
    Ok(())
}

fn index_of(c: char) -> SegmentResult<u32> {
    char_index(c).ok_or(SegmentError::IllegalChar(c))
}

fn char_index(c: char) -> Option<u32> {
    ALPHANUMERIC_TABLE
        .iter()
        .position(|&t| t == c)
        .map(|i| i as u32)
}
