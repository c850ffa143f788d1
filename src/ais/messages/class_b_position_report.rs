#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ais::{
    Field, FieldKind, Payload, VdmMessage,
    messages::{
        MESSAGE_TYPE, REPEAT_INDICATOR, SOURCE_MMSI, course_over_ground, latitude, longitude,
        speed_over_ground, true_heading,
    },
};

const SPEED_OVER_GROUND: Field = Field::new(
    "speed_over_ground",
    46,
    10,
    FieldKind::Custom(speed_over_ground),
);
const POSITION_ACCURACY: Field = Field::new("position_accuracy", 56, 1, FieldKind::Bool);
const LONGITUDE: Field = Field::new("longitude", 57, 28, FieldKind::Custom(longitude));
const LATITUDE: Field = Field::new("latitude", 85, 27, FieldKind::Custom(latitude));
const COURSE_OVER_GROUND: Field = Field::new(
    "course_over_ground",
    112,
    12,
    FieldKind::Custom(course_over_ground),
);
const TRUE_HEADING: Field = Field::new("true_heading", 124, 9, FieldKind::Custom(true_heading));
const TIME_STAMP: Field = Field::new("time_stamp", 133, 6, FieldKind::Unsigned);
const CS_UNIT: Field = Field::new("cs_unit", 141, 1, FieldKind::Bool);
const DISPLAY: Field = Field::new("display", 142, 1, FieldKind::Bool);
const DSC: Field = Field::new("dsc", 143, 1, FieldKind::Bool);
const BAND: Field = Field::new("band", 144, 1, FieldKind::Bool);
const ACCEPT_MESSAGE_22: Field = Field::new("accept_message_22", 145, 1, FieldKind::Bool);
const ASSIGNED: Field = Field::new("assigned", 146, 1, FieldKind::Bool);
const RAIM: Field = Field::new("raim", 147, 1, FieldKind::Bool);
const RADIO_STATUS: Field = Field::new("radio_status", 148, 20, FieldKind::Unsigned);

/// Type 18 - Standard Class B CS Position Report
///
/// <https://gpsd.gitlab.io/gpsd/AIVDM.html#_type_18_standard_class_b_cs_position_report>
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ClassBPositionReport {
    payload: Payload,
}

impl ClassBPositionReport {
    /// Layout of type 18.
    pub const SCHEMA: &'static [Field] = &[
        MESSAGE_TYPE,
        REPEAT_INDICATOR,
        SOURCE_MMSI,
        SPEED_OVER_GROUND,
        POSITION_ACCURACY,
        LONGITUDE,
        LATITUDE,
        COURSE_OVER_GROUND,
        TRUE_HEADING,
        TIME_STAMP,
        CS_UNIT,
        DISPLAY,
        DSC,
        BAND,
        ACCEPT_MESSAGE_22,
        ASSIGNED,
        RAIM,
        RADIO_STATUS,
    ];

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

    /// UTC second of the report
    pub fn time_stamp(&self) -> Option<u8> {
        self.payload
            .unsigned(&TIME_STAMP)
            .map(|second| second as u8)
    }

    /// `true` for a carrier-sense (CS) unit, `false` for SOTDMA
    pub fn cs_unit(&self) -> Option<bool> {
        self.payload.flag(&CS_UNIT)
    }

    /// `true` when the unit has a display
    pub fn display(&self) -> Option<bool> {
        self.payload.flag(&DISPLAY)
    }

    /// `true` when the unit is attached to a VHF voice radio with DSC
    pub fn dsc(&self) -> Option<bool> {
        self.payload.flag(&DSC)
    }

    /// `true` when the unit can use any part of the marine channel band
    pub fn band(&self) -> Option<bool> {
        self.payload.flag(&BAND)
    }

    /// `true` when the unit accepts channel management by message 22
    pub fn accept_message_22(&self) -> Option<bool> {
        self.payload.flag(&ACCEPT_MESSAGE_22)
    }

    /// `true` when the station operates in assigned mode
    pub fn assigned(&self) -> Option<bool> {
        self.payload.flag(&ASSIGNED)
    }

    /// Receiver autonomous integrity monitoring flag
    pub fn raim(&self) -> Option<bool> {
        self.payload.flag(&RAIM)
    }

    /// Raw radio status
    pub fn radio_status(&self) -> Option<u32> {
        self.payload
            .unsigned(&RADIO_STATUS)
            .map(|status| status as u32)
    }
}

impl From<Payload> for ClassBPositionReport {
    fn from(payload: Payload) -> Self {
        ClassBPositionReport { payload }
    }
}

impl VdmMessage for ClassBPositionReport {
    fn payload(&self) -> &Payload {
        &self.payload
    }

    fn schema(&self) -> &'static [Field] {
        Self::SCHEMA
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Sentence, ais::AisMessage};

    #[test]
    fn test_type_18() {
        let sentence = Sentence::parse("!AIVDM,1,1,,B,B5NLCa000>fdwc63f?aBKwPUoP06,0*15").unwrap();
        assert!(sentence.checksum_ok());

        let AisMessage::ClassBPositionReport(report) = sentence.ais().unwrap() else {
            panic!("Unexpected message kind")
        };

        assert_eq!(report.message_type(), 18);
        assert_eq!(report.repeat_indicator(), Some(0));
        assert_eq!(report.source_mmsi(), Some(367465380));
        assert_eq!(report.speed_over_ground(), Some(0.0));
        assert_eq!(report.position_accuracy(), Some(true));
        assert_eq!(report.longitude(), Some(-71.03836333333334));
        assert_eq!(report.latitude(), Some(42.34964333333333));
        assert_eq!(report.course_over_ground(), Some(131.8));
        assert_eq!(report.true_heading(), None);
        assert_eq!(report.time_stamp(), Some(1));
        assert_eq!(report.cs_unit(), Some(true));
        assert_eq!(report.display(), Some(false));
        assert_eq!(report.dsc(), Some(true));
        assert_eq!(report.band(), Some(true));
        assert_eq!(report.accept_message_22(), Some(true));
        assert_eq!(report.assigned(), Some(false));
        assert_eq!(report.raim(), Some(true));
        assert_eq!(report.radio_status(), Some(917510));
    }
}
