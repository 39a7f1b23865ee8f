use crate::error::{SegmentError, SegmentResult};

/// QR data mode (ISO/IEC 18004 Table 2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Decimal digits 0-9, three digits per 10 bits
    Numeric,
    /// Digits, uppercase letters and nine symbols, two chars per 11 bits
    AlphaNum,
    /// Arbitrary 8-bit data, one octet per character
    Byte,
    /// Shift-JIS double-byte characters, 13 bits each
    Kanji,
}

impl Mode {
    /// The 4-bit wire indicator for this mode
    pub const fn indicator(self) -> u8 {
        match self {
            Mode::Numeric => 0b0001,
            Mode::AlphaNum => 0b0010,
            Mode::Byte => 0b0100,
            Mode::Kanji => 0b1000,
        }
    }

    /// Look up a mode from its 4-bit indicator
    pub fn from_indicator(bits: u8) -> SegmentResult<Self> {
        match bits {
            0b0001 => Ok(Mode::Numeric),
            0b0010 => Ok(Mode::AlphaNum),
            0b0100 => Ok(Mode::Byte),
            0b1000 => Ok(Mode::Kanji),
            _ => Err(SegmentError::UnknownMode(bits)),
        }
    }

    /// Width of the character-count field for this mode at `version`
    ///
    /// Versions partition into three bands (1-9, 10-26, 27-40) with
    /// non-decreasing widths per ISO/IEC 18004 Table 3.
    pub fn length_bits_for_version(self, version: u8) -> SegmentResult<usize> {
        if !(1..=40).contains(&version) {
            return Err(SegmentError::InvalidVersion(version));
        }
        let band = match version {
            1..=9 => 0,
            10..=26 => 1,
            _ => 2,
        };
        Ok(match self {
            Mode::Numeric => [10, 12, 14][band],
            Mode::AlphaNum => [9, 11, 13][band],
            Mode::Byte => [8, 16, 16][band],
            Mode::Kanji => [8, 10, 12][band],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_roundtrip() {
        for mode in [Mode::Numeric, Mode::AlphaNum, Mode::Byte, Mode::Kanji] {
            assert_eq!(Mode::from_indicator(mode.indicator()).unwrap(), mode);
        }
    }

    #[test]
    fn test_unknown_indicator() {
        assert_eq!(
            Mode::from_indicator(0b0101).unwrap_err(),
            SegmentError::UnknownMode(0b0101)
        );
        // Terminator is not a data mode
        assert!(Mode::from_indicator(0b0000).is_err());
    }

    #[test]
    fn test_length_bits_bands() {
        assert_eq!(Mode::Numeric.length_bits_for_version(1).unwrap(), 10);
        assert_eq!(Mode::Numeric.length_bits_for_version(9).unwrap(), 10);
        assert_eq!(Mode::Numeric.length_bits_for_version(10).unwrap(), 12);
        assert_eq!(Mode::Numeric.length_bits_for_version(26).unwrap(), 12);
        assert_eq!(Mode::Numeric.length_bits_for_version(27).unwrap(), 14);
        assert_eq!(Mode::Numeric.length_bits_for_version(40).unwrap(), 14);

        assert_eq!(Mode::AlphaNum.length_bits_for_version(1).unwrap(), 9);
        assert_eq!(Mode::AlphaNum.length_bits_for_version(20).unwrap(), 11);
        assert_eq!(Mode::AlphaNum.length_bits_for_version(40).unwrap(), 13);

        assert_eq!(Mode::Byte.length_bits_for_version(9).unwrap(), 8);
        assert_eq!(Mode::Byte.length_bits_for_version(10).unwrap(), 16);
        assert_eq!(Mode::Byte.length_bits_for_version(40).unwrap(), 16);

        assert_eq!(Mode::Kanji.length_bits_for_version(1).unwrap(), 8);
        assert_eq!(Mode::Kanji.length_bits_for_version(10).unwrap(), 10);
        assert_eq!(Mode::Kanji.length_bits_for_version(27).unwrap(), 12);
    }

    #[test]
    fn test_invalid_version() {
        assert_eq!(
            Mode::Byte.length_bits_for_version(0).unwrap_err(),
            SegmentError::InvalidVersion(0)
        );
        assert_eq!(
            Mode::Byte.length_bits_for_version(41).unwrap_err(),
            SegmentError::InvalidVersion(41)
        );
    }
}
