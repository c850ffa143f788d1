//! # NMEA 0183 Sentence Framer
//!
//! This module provides the framing layer for NMEA 0183 sentences of the form
//! `!HHHHH,D1,D2,...,Dn*CC\r\n` (encapsulation sentences such as `AIVDM`) or
//! `$HHHHH,D1,D2,...,Dn*CC\r\n` (parametric sentences).
//!
//! Framing splits a raw line into its start marker, the checksummed payload and
//! the transmitted checksum. It never judges the checksum: a mismatch is reported
//! by [`Sentence::checksum_ok`](crate::Sentence::checksum_ok) and the caller
//! decides what to do with a corrupt sentence.
//!
//! The framer is configurable to handle variations in:
//! - Checksum presence (required or optional)
//! - Line endings (CRLF required, optional or forbidden)

use nom::{
    AsBytes, AsChar, Compare, Err, FindSubstring, Input, Parser,
    branch::alt,
    bytes::complete::{tag, take, take_until},
    character::complete::{char, hex_digit0, one_of},
    combinator::{opt, rest, rest_len, verify},
    error::{ErrorKind, ParseError},
    number::complete::hex_u32,
    sequence::terminated,
};

use crate::{Error, IResult, Sentence};

/// Defines how the framer should handle the presence of NMEA checksums.
///
/// NMEA 0183 sentences can include a checksum in the format `*CC` where
/// CC is a two-digit hexadecimal value representing the XOR of all bytes in the
/// sentence payload (excluding the start marker and the '*' delimiter).
///
/// Whatever the mode, a checksum that is present but does not match is *not* a
/// framing error; see [`Sentence::checksum_ok`](crate::Sentence::checksum_ok).
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum ChecksumMode {
    /// Checksum is required and must be present.
    ///
    /// The framer will fail if no `*CC` checksum is found at the end of the line.
    Required,

    #[default]
    /// Checksum may be absent.
    ///
    /// The framer accepts lines both with and without `*CC`. When present it must
    /// still consist of exactly two hexadecimal digits.
    Optional,
}

/// Defines how the framer should handle line endings.
///
/// NMEA 0183 sentences end with a carriage return and line feed (`\r\n`) on the
/// wire, but log files and line readers often strip or normalize them.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum LineEndingMode {
    /// CRLF line ending is required and must be present.
    ///
    /// Use this mode when framing raw serial port data.
    Required,

    #[default]
    /// A trailing `\r\n` or `\n` is accepted and stripped, but not required.
    ///
    /// Use this mode for lines coming from log files or line-oriented readers.
    Optional,

    /// CRLF line ending is forbidden and must not be present.
    ///
    /// Use this mode when parsing sentences from APIs, databases, or other
    /// sources where line endings have been removed.
    Forbidden,
}

/// The three parts of a framed sentence, borrowed from the input line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame<'a> {
    /// Start marker, `!` or `$`
    pub marker: char,
    /// Everything between the marker and the `*` delimiter
    pub payload: &'a str,
    /// Transmitted checksum, if any
    pub checksum: Option<u8>,
}

/// Builder for a configured [`SentenceParser`].
///
/// # Examples
///
/// ```rust
/// use nmea0183_ais::{ChecksumMode, LineEndingMode, SentenceParserBuilder};
///
/// // Strict: checksum and CRLF both required
/// let strict = SentenceParserBuilder::new()
///     .checksum_mode(ChecksumMode::Required)
///     .line_ending_mode(LineEndingMode::Required)
///     .build();
/// assert!(strict.parse("$GPGGA,data*6A\r\n").is_ok());
/// assert!(strict.parse("$GPGGA,data*6A").is_err()); // (missing CRLF)
/// assert!(strict.parse("$GPGGA,data\r\n").is_err()); // (missing checksum)
///
/// // A wrong checksum still frames; it is reported by the sentence
/// let sentence = strict.parse("$GPGGA,data*99\r\n").unwrap();
/// assert!(!sentence.checksum_ok());
///
/// // Lenient (the default): checksum and line ending both optional
/// let lenient = SentenceParserBuilder::new().build();
/// assert!(lenient.parse("$GPGGA,data*6A").is_ok());
/// assert!(lenient.parse("$GPGGA,data\n").is_ok());
/// assert!(lenient.parse("$GPGGA,data").is_ok());
/// ```
#[must_use]
#[derive(Debug, Clone, Copy)]
pub struct SentenceParserBuilder {
    /// Checksum mode for the parser.
    checksum_mode: ChecksumMode,

    /// Line ending mode for the parser.
    line_ending_mode: LineEndingMode,
}

impl SentenceParserBuilder {
    /// Creates a new builder with default settings.
    ///
    /// The default settings are:
    /// - Checksum mode: [`ChecksumMode::Optional`]
    /// - Line ending mode: [`LineEndingMode::Optional`]
    pub fn new() -> Self {
        SentenceParserBuilder {
            checksum_mode: ChecksumMode::default(),
            line_ending_mode: LineEndingMode::default(),
        }
    }

    /// Sets the checksum mode for the parser.
    pub fn checksum_mode(mut self, mode: ChecksumMode) -> Self {
        self.checksum_mode = mode;
        self
    }

    /// Sets the line ending mode for the parser.
    pub fn line_ending_mode(mut self, mode: LineEndingMode) -> Self {
        self.line_ending_mode = mode;
        self
    }

    /// Builds the parser with the configured settings.
    pub fn build(self) -> SentenceParser {
        SentenceParser {
            checksum_mode: self.checksum_mode,
            line_ending_mode: self.line_ending_mode,
        }
    }
}

impl Default for SentenceParserBuilder {
    fn default() -> Self {
        SentenceParserBuilder::new()
    }
}

/// A configured NMEA 0183 sentence framer.
///
/// The parser holds no state between lines, so one instance can be shared by
/// any number of feeds.
#[derive(Debug, Default, Clone, Copy)]
pub struct SentenceParser {
    checksum_mode: ChecksumMode,
    line_ending_mode: LineEndingMode,
}

impl SentenceParser {
    /// Creates a parser with the default (lenient) configuration.
    pub fn new() -> Self {
        SentenceParserBuilder::new().build()
    }

    /// Parses one raw line into a [`Sentence`].
    ///
    /// Fails only when the line cannot be framed at all; a checksum mismatch is
    /// never an error here.
    pub fn parse<'a>(&self, line: &'a str) -> Result<Sentence, Error<&'a str>> {
        let frame = match self.frame(line) {
            Ok((_, frame)) => frame,
            Err(Err::Error(e) | Err::Failure(e)) => return Err(e),
            Err(Err::Incomplete(_)) => return Err(Error::Unknown),
        };

        if frame.payload.split(',').next().is_none_or(str::is_empty) {
            return Err(Error::MissingAddress(line));
        }

        Ok(Sentence::from(frame))
    }

    /// Frames a raw line without allocating.
    ///
    /// The returned parser:
    /// * Validates that the input is ASCII-only
    /// * Expects the line to start with `!` or `$`
    /// * Extracts the payload (everything before `*CC` or `\r\n`)
    /// * Parses the checksum digits and the line ending according to the
    ///   configured modes
    pub fn frame<'a>(&self, i: &'a str) -> IResult<&'a str, Frame<'a>> {
        if !i.is_ascii() {
            return Err(nom::Err::Error(Error::NonAscii));
        }

        let (i, line_ending) = match self.line_ending_mode {
            LineEndingMode::Optional => {
                let stripped = i
                    .strip_suffix("\r\n")
                    .or_else(|| i.strip_suffix('\n'))
                    .unwrap_or(i);
                (stripped, LineEndingMode::Forbidden)
            }
            mode => (i, mode),
        };

        let (i, marker) = one_of("!$").parse(i)?;
        let (cc, payload) = alt((take_until("*"), take_until("\r\n"), rest)).parse(i)?;
        let (i, transmitted) = checksum_crlf(self.checksum_mode, line_ending).parse(cc)?;

        Ok((
            i,
            Frame {
                marker,
                payload,
                checksum: transmitted,
            },
        ))
    }
}

/// Creates a parser for checksum and CRLF based on configuration.
///
/// This function returns a parser that can handle the end portion of NMEA sentences,
/// specifically the checksum (if present) and line ending (if present).
///
/// # Message Format Expectations
///
/// - cc=[`ChecksumMode::Required`], crlf=[`LineEndingMode::Required`]: Expects `*CC\r\n`
/// - cc=[`ChecksumMode::Required`], crlf=[`LineEndingMode::Forbidden`]: Expects `*CC`
/// - cc=[`ChecksumMode::Optional`], crlf=[`LineEndingMode::Required`]: Expects `\r\n` or `*CC\r\n`
/// - cc=[`ChecksumMode::Optional`], crlf=[`LineEndingMode::Forbidden`]: Expects nothing or `*CC`
///
/// [`LineEndingMode::Optional`] is resolved by the caller before this parser runs.
pub(crate) fn checksum_crlf<'a, I, E: ParseError<I>>(
    cc: ChecksumMode,
    le: LineEndingMode,
) -> impl FnMut(I) -> nom::IResult<I, Option<u8>, E>
where
    I: Input + AsBytes + Compare<&'a str> + FindSubstring<&'a str>,
    <I as Input>::Item: AsChar,
{
    move |i: I| {
        let (i, _) = crlf(le).parse(i)?;

        let (cc, parse_cc) = match cc {
            ChecksumMode::Required => char('*').map(|_| true).parse(i)?,
            ChecksumMode::Optional => opt(char('*')).map(|asterisk| asterisk.is_some()).parse(i)?,
        };

        if parse_cc {
            let (_, cc) = consumed(take(2u8), ErrorKind::Count).parse(cc)?;
            let (_, cc) = consumed(hex_digit0, ErrorKind::IsA).parse(cc)?;

            hex_u32.map(|cc| Some(cc as u8)).parse(cc)
        } else if cc.input_len() != 0 {
            Err(Err::Error(E::from_error_kind(cc, ErrorKind::Count)))
        } else {
            Ok((cc, None))
        }
    }
}

/// Parses CRLF line endings based on configuration.
///
/// Returns the input without its line ending. [`LineEndingMode::Optional`] is
/// treated like [`LineEndingMode::Forbidden`] since the caller strips optional
/// endings beforehand.
pub(crate) fn crlf<'a, I, E: ParseError<I>>(
    crlf: LineEndingMode,
) -> impl Fn(I) -> nom::IResult<I, (), E>
where
    I: Input + Compare<&'a str> + FindSubstring<&'a str>,
{
    move |i: I| match (crlf, opt(take_until("\r\n")).parse(i)?) {
        (LineEndingMode::Required, (ending, Some(line))) => {
            consumed(tag("\r\n"), ErrorKind::CrLf).parse(ending)?;
            Ok((line, ()))
        }
        (LineEndingMode::Required, (i, None)) | (_, (i, Some(_))) => {
            Err(Err::Error(E::from_error_kind(i, ErrorKind::CrLf)))
        }
        (_, (line, None)) => Ok((line, ())),
    }
}

/// Calculates the NMEA 0183 checksum for the given sentence payload.
///
/// The checksum is the XOR of every byte between the start marker and the `*`
/// delimiter, both excluded.
pub fn checksum(payload: &str) -> u8 {
    payload
        .as_bytes()
        .iter()
        .fold(0u8, |accumulated_xor, &byte| accumulated_xor ^ byte)
}

/// Ensures that the parser consumes all input.
fn consumed<I, E: ParseError<I>, F>(
    f: F,
    e: ErrorKind,
) -> impl Parser<I, Output = <F as Parser<I>>::Output, Error = E>
where
    I: Input,
    F: Parser<I, Error = E>,
{
    terminated(
        f,
        verify(rest_len, |len| len == &0)
            .or(move |i| Err(Err::Error(nom::error::make_error(i, e)))),
    )
}

#[cfg(test)]
mod tests {
    mod checksum;
    mod crlf;
    mod frame;
}
