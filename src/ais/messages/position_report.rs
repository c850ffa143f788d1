#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    PayloadError,
    ais::{
        BitStream, Field, FieldKind, FieldValue, Payload, VdmMessage,
        messages::{
            MESSAGE_TYPE, REPEAT_INDICATOR, SOURCE_MMSI, course_over_ground, latitude, longitude,
            navigational_status_description, speed_over_ground, true_heading,
        },
    },
};

const NAVIGATIONAL_STATUS: Field = Field::new("navigational_status", 38, 4, FieldKind::Unsigned);
const RATE_OF_TURN: Field = Field::new("rate_of_turn", 42, 8, FieldKind::Custom(rate_of_turn));
const SPEED_OVER_GROUND: Field = Field::new(
    "speed_over_ground",
    50,
    10,
    FieldKind::Custom(speed_over_ground),
);
const POSITION_ACCURACY: Field = Field::new("position_accuracy", 60, 1, FieldKind::Bool);
const LONGITUDE: Field = Field::new("longitude", 61, 28, FieldKind::Custom(longitude));
const LATITUDE: Field = Field::new("latitude", 89, 27, FieldKind::Custom(latitude));
const COURSE_OVER_GROUND: Field = Field::new(
    "course_over_ground",
    116,
    12,
    FieldKind::Custom(course_over_ground),
);
const TRUE_HEADING: Field = Field::new("true_heading", 128, 9, FieldKind::Custom(true_heading));
const TIME_STAMP: Field = Field::new("time_stamp", 137, 6, FieldKind::Unsigned);
const SPECIAL_MANOEUVRE: Field = Field::new("special_manoeuvre", 143, 2, FieldKind::Unsigned);
const RAIM: Field = Field::new("raim", 148, 1, FieldKind::Bool);
const RADIO_STATUS: Field = Field::new("radio_status", 149, 19, FieldKind::Unsigned);

/// Rate of turn in degrees per minute.
///
/// The raw value is `4.733 * sqrt(rate)`, signed; -128 means not available.
fn rate_of_turn(
    bits: &BitStream,
    offset: usize,
    width: usize,
) -> Result<Option<FieldValue>, PayloadError> {
    let raw = bits.extract_signed(offset, width)?;
    if raw == -128 {
        return Ok(None);
    }

    let rate = (raw as f64 / 4.733).powi(2);
    Ok(Some(FieldValue::Float(rate.copysign(raw as f64))))
}

/// Types 1, 2 and 3 - Class A Position Report
///
/// <https://gpsd.gitlab.io/gpsd/AIVDM.html#_types_1_2_and_3_position_report_class_a>
///
/// ```rust
/// use nmea0183_ais::ais::{AisMessage, VdmMessage};
///
/// let AisMessage::PositionReport(report) =
///     AisMessage::decode("15NO=ndP01JrjhlH@0s;3?vD0L0e", 0).unwrap()
/// else {
///     unreachable!()
/// };
///
/// assert_eq!(report.source_mmsi(), Some(367513050));
/// assert_eq!(report.navigational_status_description(), Some("Reserved for future use"));
/// assert_eq!(report.speed_over_ground(), Some(0.1));
/// assert_eq!(report.course_over_ground(), Some(282.8));
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct PositionReport {
    payload: Payload,
}

impl PositionReport {
    /// Layout of types 1, 2 and 3.
    pub const SCHEMA: &'static [Field] = &[
        MESSAGE_TYPE,
        REPEAT_INDICATOR,
        SOURCE_MMSI,
        NAVIGATIONAL_STATUS,
        RATE_OF_TURN,
        SPEED_OVER_GROUND,
        POSITION_ACCURACY,
        LONGITUDE,
        LATITUDE,
        COURSE_OVER_GROUND,
        TRUE_HEADING,
        TIME_STAMP,
        SPECIAL_MANOEUVRE,
        RAIM,
        RADIO_STATUS,
    ];

    /// Navigational status code, 0 to 15
    pub fn navigational_status(&self) -> Option<u8> {
        self.payload
            .unsigned(&NAVIGATIONAL_STATUS)
            .map(|status| status as u8)
    }

    /// Navigational status description
    pub fn navigational_status_description(&self) -> Option<&'static str> {
        self.navigational_status()
            .and_then(navigational_status_description)
    }

    /// Rate of turn in degrees per minute, negative to port
    pub fn rate_of_turn(&self) -> Option<f64> {
        self.payload.float(&RATE_OF_TURN)
    }

    /// Speed over ground in knots
    pub fn speed_over_ground(&self) -> Option<f64> {
        self.payload.float(&SPEED_OVER_GROUND)
    }

    /// `true` for a DGPS-quality fix (better than 10 m)
    pub fn position_accuracy(&self) -> Option<bool> {
        self.payload.flag(&POSITION_ACCURACY)
    }

    /// Longitude in degrees, negative to the west
    pub fn longitude(&self) -> Option<f64> {
        self.payload.float(&LONGITUDE)
    }

    /// Latitude in degrees, negative to the south
    pub fn latitude(&self) -> Option<f64> {
        self.payload.float(&LATITUDE)
    }

    /// Course over ground in degrees
    pub fn course_over_ground(&self) -> Option<f64> {
        self.payload.float(&COURSE_OVER_GROUND)
    }

    /// True heading in degrees
    pub fn true_heading(&self) -> Option<u16> {
        self.payload
            .unsigned(&TRUE_HEADING)
            .map(|heading| heading as u16)
    }

    /// UTC second of the report; 60 and above flag special conditions
    pub fn time_stamp(&self) -> Option<u8> {
        self.payload
            .unsigned(&TIME_STAMP)
            .map(|second| second as u8)
    }

    /// Special manoeuvre indicator
    pub fn special_manoeuvre(&self) -> Option<u8> {
        self.payload
            .unsigned(&SPECIAL_MANOEUVRE)
            .map(|indicator| indicator as u8)
    }

    /// Receiver autonomous integrity monitoring flag
    pub fn raim(&self) -> Option<bool> {
        self.payload.flag(&RAIM)
    }

    /// Raw radio status (SOTDMA/ITDMA communication state)
    pub fn radio_status(&self) -> Option<u32> {
        self.payload
            .unsigned(&RADIO_STATUS)
            .map(|status| status as u32)
    }
}

impl From<Payload> for PositionReport {
    fn from(payload: Payload) -> Self {
        PositionReport { payload }
    }
}

impl VdmMessage for PositionReport {
    fn payload(&self) -> &Payload {
        &self.payload
    }

    fn schema(&self) -> &'static [Field] {
        Self::SCHEMA
    }
}
