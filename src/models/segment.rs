use crate::codec;
use crate::error::{SegmentError, SegmentResult};
use crate::models::{BitBuffer, Mode};
use tracing::trace;

/// A mode-tagged, validated unit of payload data
///
/// Construction validates the payload against the mode alphabet, so any
/// `Segment` that exists satisfies the write precondition. The payload
/// and its derived character count are immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    mode: Mode,
    data: String,
    char_count: usize,
}

impl Segment {
    /// Create a segment from a payload string, validating it for `mode`
    pub fn new(mode: Mode, data: impl Into<String>) -> SegmentResult<Self> {
        let data = data.into();
        if !codec::is_valid(mode, &data) {
            return Err(SegmentError::InvalidData(mode));
        }
        let char_count = codec::char_count(mode, &data);
        Ok(Self {
            mode,
            data,
            char_count,
        })
    }

    /// The data mode this segment encodes with
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The source payload string
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Number of encoding units (digits, octets, or kanji pairs)
    pub fn char_count(&self) -> usize {
        self.char_count
    }

    /// Packed size of the data portion in bits
    ///
    /// Excludes the 4-bit mode indicator and the character-count field;
    /// exactly matches what `write` emits after those two.
    pub fn len_in_bits(&self) -> usize {
        codec::length_in_bits(self.mode, self.char_count)
    }

    /// Append this segment to `buffer`: mode indicator, character count,
    /// then the packed payload
    ///
    /// The character-count field width depends on `version` (1..=40).
    pub fn write(&self, buffer: &mut BitBuffer, version: u8) -> SegmentResult<()> {
        let count_bits = self.mode.length_bits_for_version(version)?;
        trace!(
            mode = ?self.mode,
            count = self.char_count,
            version,
            "writing segment"
        );
        buffer
            .put(u32::from(self.mode.indicator()), 4)
            .put(self.char_count as u32, count_bits);
        codec::write_payload(self.mode, &self.data, buffer)
    }
}
