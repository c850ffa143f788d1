#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    PayloadError,
    ais::{
        BitStream, Field, FieldKind, FieldValue, Payload, VdmMessage,
        messages::{MESSAGE_TYPE, REPEAT_INDICATOR, SOURCE_MMSI, ship_cargo_type_description},
    },
};

const AIS_VERSION: Field = Field::new("ais_version", 38, 2, FieldKind::Unsigned);
const IMO_NUMBER: Field = Field::new("imo_number", 40, 30, FieldKind::Unsigned);
const CALLSIGN: Field = Field::new("callsign", 70, 42, FieldKind::Text);
const NAME: Field = Field::new("name", 112, 120, FieldKind::Text);
const SHIP_CARGO_TYPE: Field = Field::new("ship_cargo_type", 232, 8, FieldKind::Unsigned);
const DIMENSION_TO_BOW: Field = Field::new("ship_dimension_to_bow", 240, 9, FieldKind::Unsigned);
const DIMENSION_TO_STERN: Field =
    Field::new("ship_dimension_to_stern", 249, 9, FieldKind::Unsigned);
const DIMENSION_TO_PORT: Field = Field::new("ship_dimension_to_port", 258, 6, FieldKind::Unsigned);
const DIMENSION_TO_STARBOARD: Field =
    Field::new("ship_dimension_to_starboard", 264, 6, FieldKind::Unsigned);
const EPFD_TYPE: Field = Field::new("epfd_type", 270, 4, FieldKind::Unsigned);
const ETA_MONTH: Field = Field::new("eta_month", 274, 4, FieldKind::Unsigned);
const ETA_DAY: Field = Field::new("eta_day", 278, 5, FieldKind::Unsigned);
const ETA_HOUR: Field = Field::new("eta_hour", 283, 5, FieldKind::Unsigned);
const ETA_MINUTE: Field = Field::new("eta_minute", 288, 6, FieldKind::Unsigned);
const STATIC_DRAUGHT: Field = Field::new("static_draught", 294, 8, FieldKind::Custom(draught));
const DESTINATION: Field = Field::new("destination", 302, 120, FieldKind::Text);
const DTE: Field = Field::new("dte", 422, 1, FieldKind::Bool);

/// Draught in metres, from tenths of a metre.
fn draught(
    bits: &BitStream,
    offset: usize,
    width: usize,
) -> Result<Option<FieldValue>, PayloadError> {
    let raw = bits.extract_unsigned(offset, width)?;
    Ok(Some(FieldValue::Float(raw as f64 / 10.0)))
}

/// Type 5 - Static and Voyage Related Data
///
/// <https://gpsd.gitlab.io/gpsd/AIVDM.html#_type_5_static_and_voyage_related_data>
///
/// Usually split over two sentences; decode it from a complete chain.
///
/// ```rust
/// use nmea0183_ais::{Sentence, ais::AisMessage};
///
/// let mut head = Sentence::parse("!AIVDM,2,1,0,A,58wt8Ui`g??r21`7S=:22058<v05Htp000000015>8OA;0sk,0*7B").unwrap();
/// head.add_fragment(Sentence::parse("!AIVDM,2,2,0,A,eQ8823mDm3kP00000000000,2*5D").unwrap());
/// assert!(head.is_complete());
///
/// let AisMessage::StaticVoyageData(data) = head.ais().unwrap() else {
///     unreachable!()
/// };
/// assert_eq!(data.name().as_deref(), Some("ARCO AVON"));
/// assert_eq!(data.destination().as_deref(), Some("HOUSTON"));
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct StaticVoyageData {
    payload: Payload,
}

impl StaticVoyageData {
    /// Layout of type 5.
    pub const SCHEMA: &'static [Field] = &[
        MESSAGE_TYPE,
        REPEAT_INDICATOR,
        SOURCE_MMSI,
        AIS_VERSION,
        IMO_NUMBER,
        CALLSIGN,
        NAME,
        SHIP_CARGO_TYPE,
        DIMENSION_TO_BOW,
        DIMENSION_TO_STERN,
        DIMENSION_TO_PORT,
        DIMENSION_TO_STARBOARD,
        EPFD_TYPE,
        ETA_MONTH,
        ETA_DAY,
        ETA_HOUR,
        ETA_MINUTE,
        STATIC_DRAUGHT,
        DESTINATION,
        DTE,
    ];

    /// AIS version indicator, 0 for ITU-R M.1371-1
    pub fn ais_version(&self) -> Option<u8> {
        self.payload.unsigned(&AIS_VERSION).map(|version| version as u8)
    }

    /// IMO ship identification number
    pub fn imo_number(&self) -> Option<u32> {
        self.payload.unsigned(&IMO_NUMBER).map(|imo| imo as u32)
    }

    /// Call sign, surrounding blanks removed
    pub fn callsign(&self) -> Option<heapless::String<7>> {
        self.trimmed_text(&CALLSIGN)
    }

    /// Vessel name, surrounding blanks removed
    pub fn name(&self) -> Option<heapless::String<20>> {
        self.trimmed_text(&NAME)
    }

    /// Ship and cargo type code
    pub fn ship_cargo_type(&self) -> Option<u8> {
        self.payload
            .unsigned(&SHIP_CARGO_TYPE)
            .map(|code| code as u8)
    }

    /// Ship and cargo type description
    pub fn ship_cargo_type_description(&self) -> Option<&'static str> {
        self.ship_cargo_type().and_then(ship_cargo_type_description)
    }

    /// Distance from the reference point to the bow, in metres
    pub fn ship_dimension_to_bow(&self) -> Option<u16> {
        self.payload.unsigned(&DIMENSION_TO_BOW).map(|m| m as u16)
    }

    /// Distance from the reference point to the stern, in metres
    pub fn ship_dimension_to_stern(&self) -> Option<u16> {
        self.payload.unsigned(&DIMENSION_TO_STERN).map(|m| m as u16)
    }

    /// Distance from the reference point to port, in metres
    pub fn ship_dimension_to_port(&self) -> Option<u8> {
        self.payload.unsigned(&DIMENSION_TO_PORT).map(|m| m as u8)
    }

    /// Distance from the reference point to starboard, in metres
    pub fn ship_dimension_to_starboard(&self) -> Option<u8> {
        self.payload
            .unsigned(&DIMENSION_TO_STARBOARD)
            .map(|m| m as u8)
    }

    /// Type of electronic position fixing device
    pub fn epfd_type(&self) -> Option<u8> {
        self.payload.unsigned(&EPFD_TYPE).map(|epfd| epfd as u8)
    }

    /// ETA month, 1 to 12
    pub fn eta_month(&self) -> Option<u8> {
        self.eta_part(&ETA_MONTH, 1..=12)
    }

    /// ETA day, 1 to 31
    pub fn eta_day(&self) -> Option<u8> {
        self.eta_part(&ETA_DAY, 1..=31)
    }

    /// ETA hour, 0 to 23
    pub fn eta_hour(&self) -> Option<u8> {
        self.eta_part(&ETA_HOUR, 0..=23)
    }

    /// ETA minute, 0 to 59
    pub fn eta_minute(&self) -> Option<u8> {
        self.eta_part(&ETA_MINUTE, 0..=59)
    }

    /// Estimated time of arrival (UTC) in the given year.
    ///
    /// The message carries no year, so the caller anchors it (usually to the
    /// reception year).
    ///
    /// ```rust
    /// use nmea0183_ais::ais::{AisMessage, StaticVoyageData};
    /// use time::macros::datetime;
    ///
    /// let AisMessage::StaticVoyageData(data) = AisMessage::decode(
    ///     "58wt8Ui`g??r21`7S=:22058<v05Htp000000015>8OA;0skeQ8823mDm3kP00000000000",
    ///     2,
    /// )
    /// .unwrap() else {
    ///     unreachable!()
    /// };
    /// assert_eq!(data.eta(2016), Some(datetime!(2016-03-23 19:45 UTC)));
    /// ```
    pub fn eta(&self, year: i32) -> Option<time::OffsetDateTime> {
        let month = time::Month::try_from(self.eta_month()?).ok()?;
        let date = time::Date::from_calendar_date(year, month, self.eta_day()?).ok()?;
        let time = time::Time::from_hms(self.eta_hour()?, self.eta_minute()?, 0).ok()?;

        Some(time::PrimitiveDateTime::new(date, time).assume_utc())
    }

    /// Static draught in metres
    pub fn static_draught(&self) -> Option<f64> {
        self.payload.float(&STATIC_DRAUGHT)
    }

    /// Destination, surrounding blanks removed
    pub fn destination(&self) -> Option<heapless::String<20>> {
        self.trimmed_text(&DESTINATION)
    }

    /// Data terminal equipment flag, `false` when a display is available
    pub fn dte(&self) -> Option<bool> {
        self.payload.flag(&DTE)
    }

    fn eta_part(&self, field: &Field, valid: std::ops::RangeInclusive<u64>) -> Option<u8> {
        self.payload
            .unsigned(field)
            .filter(|value| valid.contains(value))
            .map(|value| value as u8)
    }

    fn trimmed_text<const N: usize>(&self, field: &Field) -> Option<heapless::String<N>> {
        let text = self.payload.text(field)?;
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let mut trimmed = heapless::String::new();
        trimmed.push_str(text).ok()?;
        Some(trimmed)
    }
}

impl From<Payload> for StaticVoyageData {
    fn from(payload: Payload) -> Self {
        StaticVoyageData { payload }
    }
}

impl VdmMessage for StaticVoyageData {
    fn payload(&self) -> &Payload {
        &self.payload
    }

    fn schema(&self) -> &'static [Field] {
        Self::SCHEMA
    }
}
