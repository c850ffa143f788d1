//! # Six-bit Armor Codec
//!
//! AIS binary messages travel inside `VDM`/`VDO` sentences as "armored" text:
//! every printable character carries six bits of the message. This module turns
//! armored text back into a bit stream and extracts integers and six-bit text
//! from arbitrary bit ranges of it.
//!
//! ```text
//!  ASCII  48..=87  ('0'..='W')  ->  0..=39
//!  ASCII  96..=119 ('`'..='w')  ->  40..=63
//! ```

use std::fmt;

use crate::PayloadError;

/// Maps one armored character to its 6-bit value.
///
/// This is the bare arithmetic mapping: subtract 48, and subtract a further 8
/// when the result exceeds 40. It does not validate its input; feeding a
/// character outside the armor alphabet is a contract violation and yields a
/// meaningless value. Use [`dearmor_checked`] when the input is untrusted.
///
/// ```rust
/// use nmea0183_ais::ais::dearmor;
///
/// assert_eq!(dearmor(b'0'), 0b000000);
/// assert_eq!(dearmor(b'W'), 0b100111);
/// assert_eq!(dearmor(b'`'), 0b101000);
/// assert_eq!(dearmor(b'w'), 0b111111);
/// ```
pub const fn dearmor(armored: u8) -> u8 {
    let value = armored.wrapping_sub(48);
    if value > 40 { value.wrapping_sub(8) } else { value }
}

/// Maps one armored character to its 6-bit value, rejecting characters
/// outside the armor alphabet.
pub const fn dearmor_checked(armored: char) -> Option<u8> {
    match armored {
        '0'..='W' | '`'..='w' => Some(dearmor(armored as u8)),
        _ => None,
    }
}

/// Decodes a whole armored string into a bit stream without fill bits.
///
/// See [`BitStream::from_armored`].
pub fn dearmor_stream(armored: &str) -> Result<BitStream, PayloadError> {
    BitStream::from_armored(armored, 0)
}

/// A decoded AIS bit stream.
///
/// Bits are numbered from 0 at the most significant bit of the first armored
/// character. [`len`](Self::len) counts every decoded bit, including the fill
/// bits padding the last character; [`data_len`](Self::data_len) excludes them.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct BitStream {
    sextets: Vec<u8>,
    fill_bits: u8,
}

impl BitStream {
    /// Decodes `armored` into a bit stream whose last `fill_bits` bits are padding.
    ///
    /// Fails on characters outside the armor alphabet and on fill-bit counts
    /// outside `0..=5` (or larger than the stream itself).
    ///
    /// ```rust
    /// use nmea0183_ais::ais::BitStream;
    ///
    /// let bits = BitStream::from_armored("15NO", 0).unwrap();
    /// assert_eq!(bits.len(), 24);
    /// assert_eq!(bits.extract_unsigned(0, 6), Ok(1));
    /// assert!(bits.extract_unsigned(20, 6).is_err());
    /// ```
    pub fn from_armored(armored: &str, fill_bits: u8) -> Result<Self, PayloadError> {
        let sextets = armored
            .chars()
            .enumerate()
            .map(|(position, character)| {
                dearmor_checked(character).ok_or(PayloadError::InvalidArmor {
                    character,
                    position,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if fill_bits > 5 || usize::from(fill_bits) > sextets.len() * 6 {
            return Err(PayloadError::InvalidFillBits(fill_bits));
        }

        Ok(Self { sextets, fill_bits })
    }

    /// Number of decoded bits, fill bits included.
    pub fn len(&self) -> usize {
        self.sextets.len() * 6
    }

    /// Returns `true` when the stream holds no bits.
    pub fn is_empty(&self) -> bool {
        self.sextets.is_empty()
    }

    /// Number of data bits, fill bits excluded.
    pub fn data_len(&self) -> usize {
        self.len() - usize::from(self.fill_bits)
    }

    /// Number of padding bits at the end of the stream.
    pub fn fill_bits(&self) -> u8 {
        self.fill_bits
    }

    /// Returns the bit at `index`, if any.
    pub fn bit(&self, index: usize) -> Option<bool> {
        let sextet = self.sextets.get(index / 6)?;
        Some(sextet >> (5 - index % 6) & 1 == 1)
    }

    /// Reads `width` bits starting at `offset` as a big-endian unsigned integer.
    ///
    /// A read past the end of the stream is an error, never a zero.
    pub fn extract_unsigned(&self, offset: usize, width: usize) -> Result<u64, PayloadError> {
        self.check_range(offset, width)?;
        if width > 64 {
            return Err(PayloadError::InvalidWidth(width));
        }

        let value = (offset..offset + width).fold(0u64, |value, index| {
            let bit = self.sextets[index / 6] >> (5 - index % 6) & 1;
            (value << 1) | u64::from(bit)
        });

        Ok(value)
    }

    /// Reads `width` bits starting at `offset` as a two's complement integer.
    pub fn extract_signed(&self, offset: usize, width: usize) -> Result<i64, PayloadError> {
        let value = self.extract_unsigned(offset, width)?;
        if width == 0 {
            return Ok(0);
        }

        let value = i128::from(value);
        if value >> (width - 1) & 1 == 1 {
            Ok((value - (1i128 << width)) as i64)
        } else {
            Ok(value as i64)
        }
    }

    /// Reads `width` bits starting at `offset` as AIS six-bit ASCII.
    ///
    /// Every group of six bits maps to one character (`@`, `A`..`Z`, `[`..`_`
    /// for 0..=31, then space through `?`). A trailing group shorter than six
    /// bits is read as the value of its remaining bits. Trailing `@` padding is
    /// removed.
    pub fn extract_text(&self, offset: usize, width: usize) -> Result<String, PayloadError> {
        self.check_range(offset, width)?;

        let end = offset + width;
        let mut text = String::with_capacity(width.div_ceil(6));
        let mut start = offset;
        while start < end {
            let group = (end - start).min(6);
            let value = self.extract_unsigned(start, group)? as u8;
            text.push(sixbit_ascii(value));
            start += group;
        }

        let trimmed = text.trim_end_matches('@').len();
        text.truncate(trimmed);
        Ok(text)
    }

    fn check_range(&self, offset: usize, width: usize) -> Result<(), PayloadError> {
        match offset.checked_add(width) {
            Some(end) if end <= self.len() => Ok(()),
            _ => Err(PayloadError::BitRangeOverrun {
                offset,
                width,
                length: self.len(),
            }),
        }
    }
}

/// Renders the stream as a string of `0` and `1`, fill bits included.
impl fmt::Display for BitStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for sextet in &self.sextets {
            write!(f, "{sextet:06b}")?;
        }
        Ok(())
    }
}

fn sixbit_ascii(value: u8) -> char {
    let value = value & 0x3f;
    if value < 32 {
        char::from(value + 64)
    } else {
        char::from(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dearmor_alphabet() {
        assert_eq!(dearmor(b'0'), 0);
        assert_eq!(dearmor(b'W'), 39);
        assert_eq!(dearmor(b'`'), 40);
        assert_eq!(dearmor(b'w'), 63);

        assert_eq!(dearmor_checked('0'), Some(0));
        assert_eq!(dearmor_checked('w'), Some(63));
        for invalid in ['X', '_', '/', 'x', ' ', '*'] {
            assert_eq!(dearmor_checked(invalid), None, "Failed: {invalid:?}");
        }

        for (character, value) in ('0'..='W').chain('`'..='w').zip(0u8..) {
            assert_eq!(dearmor_checked(character), Some(value));
        }
    }

    #[test]
    fn test_dearmor_stream() {
        let bits = dearmor_stream("0W`w").unwrap();
        assert_eq!(bits.to_string(), "000000100111101000111111");
        assert_eq!(bits.len(), 24);
        assert_eq!(bits.data_len(), 24);
        assert_eq!(bits.bit(6), Some(true));
        assert_eq!(bits.bit(7), Some(false));
        assert_eq!(bits.bit(24), None);
    }

    #[test]
    fn test_invalid_armor() {
        assert_eq!(
            dearmor_stream("15NX"),
            Err(PayloadError::InvalidArmor {
                character: 'X',
                position: 3
            })
        );
    }

    #[test]
    fn test_fill_bits() {
        let bits = BitStream::from_armored("1@0", 2).unwrap();
        assert_eq!(bits.len(), 18);
        assert_eq!(bits.data_len(), 16);
        assert_eq!(bits.fill_bits(), 2);

        assert_eq!(
            BitStream::from_armored("1@0", 6),
            Err(PayloadError::InvalidFillBits(6))
        );
        assert_eq!(
            BitStream::from_armored("", 1),
            Err(PayloadError::InvalidFillBits(1))
        );
    }

    #[test]
    fn test_extract_unsigned() {
        let bits = dearmor_stream("15NO=ndP01JrjhlH@0s;3?vD0L0e").unwrap();
        assert_eq!(bits.extract_unsigned(0, 6), Ok(1));
        assert_eq!(bits.extract_unsigned(6, 2), Ok(0));
        assert_eq!(bits.extract_unsigned(8, 30), Ok(367513050));
        assert_eq!(bits.extract_unsigned(0, 0), Ok(0));
        assert_eq!(bits.extract_unsigned(128, 9), Ok(511));

        assert_eq!(
            bits.extract_unsigned(160, 9),
            Err(PayloadError::BitRangeOverrun {
                offset: 160,
                width: 9,
                length: 168
            })
        );
        assert_eq!(
            bits.extract_unsigned(0, 65),
            Err(PayloadError::InvalidWidth(65))
        );
    }

    #[test]
    fn test_overflowing_range() {
        let bits = dearmor_stream("15NO").unwrap();
        let e = bits.extract_unsigned(usize::MAX, 2).unwrap_err();
        assert_eq!(
            e,
            PayloadError::BitRangeOverrun {
                offset: usize::MAX,
                width: 2,
                length: 24
            }
        );
        assert_eq!(
            e.to_string(),
            format!("bit range of 2 bits at {} exceeds stream of 24 bits", usize::MAX)
        );
        assert!(bits.extract_signed(usize::MAX, 2).is_err());
    }

    #[test]
    fn test_extract_signed() {
        let bits = dearmor_stream("15NO=ndP01JrjhlH@0s;3?vD0L0e").unwrap();
        assert_eq!(bits.extract_signed(42, 8), Ok(-128));
        assert_eq!(bits.extract_signed(61, 28), Ok(-42625510));
        assert_eq!(bits.extract_signed(89, 27), Ok(25428204));

        let bits = dearmor_stream("w").unwrap();
        assert_eq!(bits.extract_signed(0, 6), Ok(-1));
        assert_eq!(bits.extract_signed(1, 5), Ok(-1));
        assert_eq!(bits.extract_unsigned(0, 6), Ok(63));

        let bits = dearmor_stream("wwwwwwwwwwww").unwrap();
        assert_eq!(bits.extract_signed(0, 64), Ok(-1));
        assert_eq!(bits.extract_unsigned(0, 64), Ok(u64::MAX));
    }

    #[test]
    fn test_extract_text() {
        let bits = dearmor_stream("58wt8Ui`g??r21`7S=:22058<v05Htp").unwrap();
        assert_eq!(bits.extract_text(70, 42).as_deref(), Ok("  ZA83R"));

        // "1@0": 0b000001 0b010000 0b000000
        let bits = dearmor_stream("1@0").unwrap();
        assert_eq!(bits.extract_text(0, 18).as_deref(), Ok("AP"));
        assert_eq!(bits.extract_text(0, 0).as_deref(), Ok(""));
        assert!(bits.extract_text(12, 12).is_err());
    }
}
