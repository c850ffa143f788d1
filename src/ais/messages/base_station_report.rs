#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ais::{
    Field, FieldKind, Payload, VdmMessage,
    messages::{MESSAGE_TYPE, REPEAT_INDICATOR, SOURCE_MMSI, latitude, longitude},
};

const YEAR: Field = Field::new("year", 38, 14, FieldKind::Unsigned);
const MONTH: Field = Field::new("month", 52, 4, FieldKind::Unsigned);
const DAY: Field = Field::new("day", 56, 5, FieldKind::Unsigned);
const HOUR: Field = Field::new("hour", 61, 5, FieldKind::Unsigned);
const MINUTE: Field = Field::new("minute", 66, 6, FieldKind::Unsigned);
const SECOND: Field = Field::new("second", 72, 6, FieldKind::Unsigned);
const POSITION_ACCURACY: Field = Field::new("position_accuracy", 78, 1, FieldKind::Bool);
const LONGITUDE: Field = Field::new("longitude", 79, 28, FieldKind::Custom(longitude));
const LATITUDE: Field = Field::new("latitude", 107, 27, FieldKind::Custom(latitude));
const EPFD_TYPE: Field = Field::new("epfd_type", 134, 4, FieldKind::Unsigned);
const RAIM: Field = Field::new("raim", 148, 1, FieldKind::Bool);
const RADIO_STATUS: Field = Field::new("radio_status", 149, 19, FieldKind::Unsigned);

/// Type 4 - Base Station Report
///
/// <https://gpsd.gitlab.io/gpsd/AIVDM.html#_type_4_base_station_report>
///
/// Date and time parts use 0 (year, month, day), 24 (hour) and 60 (minute,
/// second) for "not available"; the accessors report those as `None`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct BaseStationReport {
    payload: Payload,
}

impl BaseStationReport {
    /// Layout of type 4.
    pub const SCHEMA: &'static [Field] = &[
        MESSAGE_TYPE,
        REPEAT_INDICATOR,
        SOURCE_MMSI,
        YEAR,
        MONTH,
        DAY,
        HOUR,
        MINUTE,
        SECOND,
        POSITION_ACCURACY,
        LONGITUDE,
        LATITUDE,
        EPFD_TYPE,
        RAIM,
        RADIO_STATUS,
    ];

    /// UTC year, 1 to 9999
    pub fn year(&self) -> Option<u16> {
        self.part(&YEAR, 1..=9999).map(|year| year as u16)
    }

    /// UTC month, 1 to 12
    pub fn month(&self) -> Option<u8> {
        self.part(&MONTH, 1..=12).map(|month| month as u8)
    }

    /// UTC day, 1 to 31
    pub fn day(&self) -> Option<u8> {
        self.part(&DAY, 1..=31).map(|day| day as u8)
    }

    /// UTC hour, 0 to 23
    pub fn hour(&self) -> Option<u8> {
        self.part(&HOUR, 0..=23).map(|hour| hour as u8)
    }

    /// UTC minute, 0 to 59
    pub fn minute(&self) -> Option<u8> {
        self.part(&MINUTE, 0..=59).map(|minute| minute as u8)
    }

    /// UTC second, 0 to 59
    pub fn second(&self) -> Option<u8> {
        self.part(&SECOND, 0..=59).map(|second| second as u8)
    }

    /// The reported UTC date and time.
    ///
    /// `None` when any part is not available or the parts do not form a valid
    /// calendar date.
    ///
    /// ```rust
    /// use nmea0183_ais::ais::{AisMessage, BaseStationReport};
    /// use time::macros::datetime;
    ///
    /// let AisMessage::BaseStationReport(report) =
    ///     AisMessage::decode("403OK@Quw35W<rsg:hH:wK70087D", 0).unwrap()
    /// else {
    ///     unreachable!()
    /// };
    /// assert_eq!(report.current_time(), Some(datetime!(2015-12-06 05:39:12 UTC)));
    /// ```
    pub fn current_time(&self) -> Option<time::OffsetDateTime> {
        let month = time::Month::try_from(self.month()?).ok()?;
        let date = time::Date::from_calendar_date(i32::from(self.year()?), month, self.day()?).ok()?;
        let time = time::Time::from_hms(self.hour()?, self.minute()?, self.second()?).ok()?;

        Some(time::PrimitiveDateTime::new(date, time).assume_utc())
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

    /// Type of electronic position fixing device
    pub fn epfd_type(&self) -> Option<u8> {
        self.payload.unsigned(&EPFD_TYPE).map(|epfd| epfd as u8)
    }

    /// Receiver autonomous integrity monitoring flag
    pub fn raim(&self) -> Option<bool> {
        self.payload.flag(&RAIM)
    }

    /// Raw radio status (SOTDMA communication state)
    pub fn radio_status(&self) -> Option<u32> {
        self.payload
            .unsigned(&RADIO_STATUS)
            .map(|status| status as u32)
    }

    fn part(&self, field: &Field, valid: std::ops::RangeInclusive<u64>) -> Option<u64> {
        self.payload
            .unsigned(field)
            .filter(|value| valid.contains(value))
    }
}

impl From<Payload> for BaseStationReport {
    fn from(payload: Payload) -> Self {
        BaseStationReport { payload }
    }
}

impl VdmMessage for BaseStationReport {
    fn payload(&self) -> &Payload {
        &self.payload
    }

    fn schema(&self) -> &'static [Field] {
        Self::SCHEMA
    }
}
