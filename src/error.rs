//! # Error Types
//!
//! This module defines the error types used throughout the library.
//!
//! Two families of errors exist:
//! - [`Error`] is returned by the sentence framer when a line cannot be framed
//!   at all (non-ASCII input, missing start marker, malformed checksum digits).
//! - [`PayloadError`] is returned by the AIS payload decoder when the armored
//!   payload itself is unusable (invalid armor characters, reads past the end of
//!   the bit stream).
//!
//! Everything else (checksum mismatches, incomplete multi-part chains, blank or
//! malformed scalar fields, unknown message types) is *not* an error: it is
//! reported through boolean predicates or as an absent value.

use nom::error::{ErrorKind, FromExternalError, ParseError};
use std::fmt::{self, Debug, Display};

/// Holds the result of parsing functions.
///
/// It depends on the input type `I`, the output type `O`, and the error type `E`
/// (by default `nom::error::Error<I>`).
///
/// The `Ok` side is a pair containing the remainder of the input (the part of the data that
/// was not parsed) and the produced value. The `Err` side contains an instance of `nom::Err`.
pub type IResult<I, O, E = nom::error::Error<I>> = nom::IResult<I, O, Error<I, E>>;

/// Represents the ways a raw line can fail to frame as an NMEA sentence.
#[derive(Debug, PartialEq)]
pub enum Error<I, E = nom::error::Error<I>> {
    /// The provided input contains non-ASCII characters.
    ///
    /// NMEA sentences must be ASCII-only for proper parsing and checksum calculation.
    NonAscii,

    /// The line could not be framed because its format was invalid.
    ///
    /// This wraps nom's standard parsing errors and provides context about
    /// what went wrong during framing (missing `!`/`$` marker, checksum not made
    /// of exactly two hex digits, line ending policy violated, ...).
    ParsingError(E),

    /// The address field (talker and sentence type) is missing.
    MissingAddress(I),

    /// An unknown error occurred.
    ///
    /// This is a catch-all for unexpected error conditions.
    Unknown,
}

impl<I, E> ParseError<I> for Error<I, E>
where
    E: ParseError<I>,
{
    fn from_error_kind(input: I, kind: ErrorKind) -> Self {
        Error::ParsingError(E::from_error_kind(input, kind))
    }

    fn append(_: I, _: ErrorKind, other: Self) -> Self {
        other
    }
}

impl<I, E, EX> FromExternalError<I, EX> for Error<I, E>
where
    E: FromExternalError<I, EX>,
{
    fn from_external_error(input: I, kind: ErrorKind, e: EX) -> Self {
        Error::ParsingError(E::from_external_error(input, kind, e))
    }
}

impl<I: Debug, E: Debug> Display for Error<I, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NonAscii => write!(f, "sentence contains non-ASCII characters"),
            Error::ParsingError(e) => write!(f, "malformed sentence: {e:?}"),
            Error::MissingAddress(i) => write!(f, "sentence has no address field: {i:?}"),
            Error::Unknown => write!(f, "unknown sentence error"),
        }
    }
}

impl<I: Debug, E: Debug> std::error::Error for Error<I, E> {}

/// Hard failures of the AIS payload decoder.
///
/// These indicate an un-parseable payload or a read outside the decoded bit
/// stream, as opposed to a well-formed field that merely carries no value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadError {
    /// A character outside the armor alphabet (ASCII 48–87 and 96–119).
    InvalidArmor {
        /// The offending character
        character: char,
        /// Its position in the armored string
        position: usize,
    },

    /// A field read reaches past the end of the bit stream.
    BitRangeOverrun {
        /// First bit of the requested range
        offset: usize,
        /// Number of bits requested
        width: usize,
        /// Number of bits available
        length: usize,
    },

    /// An integer read wider than 64 bits.
    InvalidWidth(usize),

    /// A fill-bit count outside `0..=5`, or larger than the payload itself.
    InvalidFillBits(u8),

    /// The sentence carries no armored AIS payload.
    MissingPayload,
}

impl Display for PayloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadError::InvalidArmor {
                character,
                position,
            } => write!(f, "invalid armor character {character:?} at {position}"),
            PayloadError::BitRangeOverrun {
                offset,
                width,
                length,
            } => write!(
                f,
                "bit range of {width} bits at {offset} exceeds stream of {length} bits"
            ),
            PayloadError::InvalidWidth(width) => {
                write!(f, "cannot extract {width} bits into a 64-bit integer")
            }
            PayloadError::InvalidFillBits(fill) => write!(f, "invalid fill bit count {fill}"),
            PayloadError::MissingPayload => write!(f, "sentence carries no AIS payload"),
        }
    }
}

impl std::error::Error for PayloadError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_error_display() {
        let e = PayloadError::BitRangeOverrun {
            offset: 160,
            width: 12,
            length: 168,
        };
        assert_eq!(
            e.to_string(),
            "bit range of 12 bits at 160 exceeds stream of 168 bits"
        );

        let e = PayloadError::InvalidArmor {
            character: 'X',
            position: 3,
        };
        assert_eq!(e.to_string(), "invalid armor character 'X' at 3");
    }

    #[test]
    fn test_error_from_kind() {
        let e: Error<&str> = Error::from_error_kind("abc", ErrorKind::Char);
        assert_eq!(
            e,
            Error::ParsingError(nom::error::Error::new("abc", ErrorKind::Char))
        );
    }
}
