//! # Sentence Model
//!
//! A [`Sentence`] is one framed NMEA 0183 line split into its comma-delimited
//! fields. It owns the next fragment of a multi-part AIS message (see
//! [`Sentence::add_fragment`]) and gives access to the `VDM`/`VDO`
//! encapsulation fields.

mod chain;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Error, Frame, PayloadError, SentenceParser,
    ais::AisMessage,
    nmea0183::checksum,
    parsing::{integer, string},
};

/// One parsed NMEA 0183 sentence.
///
/// `fields()[0]` is the address field (talker and sentence type, e.g. `AIVDM`);
/// data fields follow from index 1. Empty fields are preserved, so field
/// positions always match the wire.
///
/// ```rust
/// use nmea0183_ais::Sentence;
///
/// let sentence = Sentence::parse("!AIVDM,1,1,,B,15NO=ndP01JrjhlH@0s;3?vD0L0e,0*77").unwrap();
/// assert_eq!(sentence.talker(), "AI");
/// assert_eq!(sentence.sentence_type(), "VDM");
/// assert!(sentence.checksum_ok());
/// assert_eq!(sentence.field(3), Some(""));
/// assert_eq!(sentence.channel(), Some("B"));
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    marker: char,
    payload: String,
    fields: Vec<String>,
    checksum: Option<u8>,
    next_part: Option<Box<Sentence>>,
}

impl From<Frame<'_>> for Sentence {
    fn from(frame: Frame<'_>) -> Self {
        Sentence {
            marker: frame.marker,
            payload: frame.payload.to_owned(),
            fields: split_fields(frame.payload),
            checksum: frame.checksum,
            next_part: None,
        }
    }
}

impl Sentence {
    /// Parses a raw line with the default (lenient) [`SentenceParser`].
    pub fn parse(line: &str) -> Result<Sentence, Error<&str>> {
        SentenceParser::new().parse(line)
    }

    /// Start marker, `!` or `$`.
    pub fn marker(&self) -> char {
        self.marker
    }

    /// Everything between the marker and the `*` delimiter.
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Replaces the payload and re-derives the fields from it.
    ///
    /// The transmitted checksum is left untouched, so [`checksum_ok`](Self::checksum_ok)
    /// tells whether the new payload still matches it.
    pub fn set_payload(&mut self, payload: impl Into<String>) {
        self.payload = payload.into();
        self.fields = split_fields(&self.payload);
    }

    /// Rebuilds the sentence text, `<marker><payload>*<checksum>`.
    ///
    /// The `*<checksum>` suffix is omitted when no checksum was transmitted.
    pub fn original(&self) -> String {
        match self.checksum() {
            Some(cc) => format!("{}{}*{cc}", self.marker, self.payload),
            None => format!("{}{}", self.marker, self.payload),
        }
    }

    /// All comma-delimited fields, the address field first.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Returns field `n`, where field 0 is the address field.
    pub fn field(&self, n: usize) -> Option<&str> {
        self.fields.get(n).map(String::as_str)
    }

    /// Talker identifier and sentence type, e.g. `AIVDM`.
    pub fn prefix(&self) -> &str {
        self.field(0).unwrap_or_default()
    }

    /// Talker identifier: the prefix without its last three characters.
    pub fn talker(&self) -> &str {
        let prefix = self.prefix();
        prefix
            .len()
            .checked_sub(3)
            .and_then(|end| prefix.get(..end))
            .unwrap_or_default()
    }

    /// Sentence type: the last three characters of the prefix.
    pub fn sentence_type(&self) -> &str {
        let prefix = self.prefix();
        prefix
            .len()
            .checked_sub(3)
            .and_then(|start| prefix.get(start..))
            .unwrap_or(prefix)
    }

    /// The transmitted checksum as two lowercase hex digits, if any.
    pub fn checksum(&self) -> Option<String> {
        self.checksum.map(|cc| format!("{cc:02x}"))
    }

    /// The transmitted checksum value, if any.
    pub fn transmitted_checksum(&self) -> Option<u8> {
        self.checksum
    }

    /// The checksum computed over the payload, as two lowercase hex digits.
    pub fn calculated_checksum(&self) -> String {
        format!("{:02x}", checksum(&self.payload))
    }

    /// Returns `true` when a checksum was transmitted and matches the payload.
    ///
    /// Hex digit case does not matter: `3E` matches a computed `3e`.
    pub fn checksum_ok(&self) -> bool {
        self.checksum == Some(checksum(&self.payload))
    }

    /// Returns `true` for AIS encapsulation sentences (`VDM` or `VDO`).
    pub fn is_ais(&self) -> bool {
        matches!(self.sentence_type(), "VDM" | "VDO")
    }

    /// Returns `true` for `VDO` sentences, which report the own vessel.
    pub fn is_own_vessel(&self) -> bool {
        self.sentence_type() == "VDO"
    }

    /// Number of fragments of the logical message (field 1), 1 when blank.
    ///
    /// `None` when the field holds anything but a count in `1..=255`.
    pub fn total_messages(&self) -> Option<u8> {
        fragment_counter(self.field(1), Some(1))
    }

    /// 1-based index of this fragment (field 2).
    ///
    /// A blank index stands for 1 in an unfragmented message only. `None` when
    /// the index is blank in a multi-part message or is not a number in `1..=255`.
    pub fn message_number(&self) -> Option<u8> {
        let blank = self.total_messages().filter(|&total| total == 1);
        fragment_counter(self.field(2), blank)
    }

    /// Sequential message id (field 3), used to route fragments.
    pub fn sequence_id(&self) -> Option<u8> {
        small_integer(self.field(3))
    }

    /// Radio channel (field 4), `A` or `B` in practice.
    pub fn channel(&self) -> Option<&str> {
        string(self.field(4))
    }

    /// Armored AIS payload of this fragment alone (field 5).
    pub fn armored_payload(&self) -> Option<&str> {
        string(self.field(5))
    }

    /// Number of fill bits padding this fragment's payload (field 6), 0 when blank.
    pub fn fill_bits(&self) -> u8 {
        small_integer(self.field(6)).unwrap_or(0)
    }

    /// Decodes the AIS message carried by the chain headed by this sentence.
    ///
    /// The payload is assembled from every fragment currently linked; call
    /// [`is_complete`](Self::is_complete) first to make sure none is missing.
    pub fn ais(&self) -> Result<AisMessage, PayloadError> {
        let armored = self.assembled_armored_payload();
        if armored.is_empty() {
            return Err(PayloadError::MissingPayload);
        }

        AisMessage::decode(&armored, self.final_fill_bits())
    }
}

fn split_fields(payload: &str) -> Vec<String> {
    payload.split(',').map(str::to_owned).collect()
}

fn small_integer(field: Option<&str>) -> Option<u8> {
    integer(field).and_then(|value| u8::try_from(value).ok())
}

fn fragment_counter(field: Option<&str>, blank: Option<u8>) -> Option<u8> {
    match string(field) {
        None => blank,
        Some(_) => small_integer(field).filter(|&counter| counter > 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ais::VdmMessage;

    const TYPE_1: &str = "!AIVDM,1,1,,B,15NO=ndP01JrjhlH@0s;3?vD0L0e,0*77";

    #[test]
    fn test_basic_features() {
        let sentence = Sentence::parse(TYPE_1).unwrap();

        assert_eq!(sentence.marker(), '!');
        assert_eq!(sentence.prefix(), "AIVDM");
        assert_eq!(sentence.talker(), "AI");
        assert_eq!(sentence.sentence_type(), "VDM");
        assert!(sentence.is_ais());
        assert!(!sentence.is_own_vessel());

        assert_eq!(sentence.fields().len(), 7);
        assert_eq!(sentence.field(0), Some("AIVDM"));
        assert_eq!(sentence.field(7), None);

        assert_eq!(sentence.total_messages(), Some(1));
        assert_eq!(sentence.message_number(), Some(1));
        assert_eq!(sentence.sequence_id(), None);
        assert_eq!(sentence.channel(), Some("B"));
        assert_eq!(sentence.armored_payload(), Some("15NO=ndP01JrjhlH@0s;3?vD0L0e"));
        assert_eq!(sentence.fill_bits(), 0);
    }

    #[test]
    fn test_checksum() {
        let sentence = Sentence::parse(TYPE_1).unwrap();
        assert_eq!(sentence.checksum().as_deref(), Some("77"));
        assert_eq!(sentence.calculated_checksum(), "77");
        assert!(sentence.checksum_ok());
        assert_eq!(sentence.original(), TYPE_1);

        // uppercase transmitted digits
        let sentence = Sentence::parse("!AIVDM,1,1,,B,403OK@Quw35W<rsg:hH:wK70087D,0*6E").unwrap();
        assert_eq!(sentence.checksum().as_deref(), Some("6e"));
        assert!(sentence.checksum_ok());

        // corrupt but still usable
        let sentence = Sentence::parse("!AIVDM,1,1,,B,15NO=ndP01JrjhlH@0s;3?vD0L0e,0*78").unwrap();
        assert!(!sentence.checksum_ok());
        assert_eq!(sentence.ais().unwrap().message_type(), 1);

        let sentence = Sentence::parse("!AIVDM,1,1,,B,15NO=ndP01JrjhlH@0s;3?vD0L0e,0").unwrap();
        assert_eq!(sentence.checksum(), None);
        assert!(!sentence.checksum_ok());
        assert_eq!(sentence.original(), "!AIVDM,1,1,,B,15NO=ndP01JrjhlH@0s;3?vD0L0e,0");
    }

    #[test]
    fn test_empty_fields_preserved() {
        let sentence = Sentence::parse("$GPGLL,,,,,,*50").unwrap();
        assert_eq!(sentence.fields(), ["GPGLL", "", "", "", "", "", ""]);
        assert_eq!(sentence.talker(), "GP");
        assert_eq!(sentence.sentence_type(), "GLL");
        assert!(!sentence.is_ais());
    }

    #[test]
    fn test_set_payload() {
        let mut sentence = Sentence::parse(TYPE_1).unwrap();
        sentence.set_payload("AIVDO,1,1,,A,15NO=ndP01JrjhlH@0s;3?vD0L0e,0");

        assert_eq!(sentence.sentence_type(), "VDO");
        assert!(sentence.is_own_vessel());
        assert_eq!(sentence.channel(), Some("A"));
        assert!(!sentence.checksum_ok());
    }

    #[test]
    fn test_short_prefix() {
        let sentence = Sentence::parse("!VDM,1").unwrap();
        assert_eq!(sentence.talker(), "");
        assert_eq!(sentence.sentence_type(), "VDM");

        let sentence = Sentence::parse("$AB,1").unwrap();
        assert_eq!(sentence.talker(), "");
        assert_eq!(sentence.sentence_type(), "AB");
    }

    #[test]
    fn test_idempotence() {
        let first = Sentence::parse(TYPE_1).unwrap();
        let second = Sentence::parse(TYPE_1).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.ais(), second.ais());
    }

    #[test]
    fn test_missing_payload() {
        let sentence = Sentence::parse("!AIVDM,1,1,,B,,0*25").unwrap();
        assert_eq!(sentence.armored_payload(), None);
        assert_eq!(sentence.ais(), Err(PayloadError::MissingPayload));
    }
}
