//! qr_segments - QR code segment encoding and decoding
//!
//! A pure Rust implementation of the ISO/IEC 18004 data-segment layer:
//! mode-tagged, bit-packed segments for the data region of a QR symbol,
//! and the inverse walk that reconstructs strings from a packed stream.
//! Error correction, matrix layout, masking and rendering live upstream
//! and downstream of this crate.
//!
//! # Example
//! ```
//! use qr_segments::{BitBuffer, Mode, Segment, decode_segment};
//!
//! let segment = Segment::new(Mode::Numeric, "01234567")?;
//! let mut buffer = BitBuffer::new();
//! segment.write(&mut buffer, 1)?;
//!
//! // A reader consumes the 4-bit mode indicator first
//! let mode = Mode::from_indicator(buffer.read(4)? as u8)?;
//! assert_eq!(decode_segment(mode, &mut buffer, 1)?, "01234567");
//! # Ok::<(), qr_segments::SegmentError>(())
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Segment codecs for the four data modes, plus stream assembly/walking
pub mod codec;
/// Error taxonomy for segment encoding and decoding
pub mod error;
/// Core data structures (Segment, Mode, BitBuffer)
pub mod models;

pub use codec::{decode_payload, decode_segment, encode_segments, is_valid};
pub use error::{SegmentError, SegmentResult};
pub use models::{BitBuffer, Mode, Segment};
