//! Segment data errors
//!
//! One error family covers every failure the codec can surface: short
//! reads, illegal payload characters, and packed values that exceed the
//! maximum legal for their group width. All of them abort the current
//! write/decode call with no partial output.

use crate::models::Mode;
use thiserror::Error;

/// Errors raised while encoding or decoding QR data segments
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SegmentError {
    /// A read needed more bits than the stream has left
    #[error("not enough bits available: need {need}, have {have}")]
    NotEnoughBits {
        /// Bits the operation required
        need: usize,
        /// Bits actually unread in the stream
        have: usize,
    },

    /// A payload character is outside the mode's alphabet
    #[error("illegal char: {0:?}")]
    IllegalChar(char),

    /// A decoded group value exceeds the maximum legal for its width
    #[error("value {value} out of range (max {max})")]
    OutOfRangeValue {
        /// The raw value read from the stream
        value: u32,
        /// Largest value a well-formed stream can carry here
        max: u32,
    },

    /// The payload string failed mode validation at construction
    #[error("invalid data for {0:?} mode")]
    InvalidData(Mode),

    /// Version number outside 1..=40
    #[error("invalid version number: {0}")]
    InvalidVersion(u8),

    /// A 4-bit mode indicator this codec does not recognize
    #[error("unknown mode indicator: {0:#06b}")]
    UnknownMode(u8),
}

/// Result type for segment operations
pub type SegmentResult<T> = std::result::Result<T, SegmentError>;
