//! # AIS Message Types
//!
//! The message-type registry and the decoded message families.
//!
//! Every message starts with the same three fields (message type, repeat
//! indicator and source MMSI). The message type selects a [`MessageKind`], whose
//! constant layout drives field access through the [`VdmMessage`] trait.
//!
//! ## Supported Message Types
//!
//! | Types   | Kind                                        | Struct                     |
//! |---------|---------------------------------------------|----------------------------|
//! | 1, 2, 3 | Class A position report                     | [`PositionReport`]         |
//! | 4       | Base station report                         | [`BaseStationReport`]      |
//! | 5       | Static and voyage related data              | [`StaticVoyageData`]       |
//! | 8       | Binary broadcast message                    | [`BinaryBroadcast`]        |
//! | 18      | Standard Class B CS position report         | [`ClassBPositionReport`]   |
//! | other   | Only the universal fields                   | [`Undefined`]              |

mod base_station_report;
mod binary_broadcast;
mod class_b_position_report;
mod position_report;
mod static_voyage_data;

pub use base_station_report::BaseStationReport;
pub use binary_broadcast::BinaryBroadcast;
pub use class_b_position_report::ClassBPositionReport;
pub use position_report::PositionReport;
pub use static_voyage_data::StaticVoyageData;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use log::trace;

use crate::{
    PayloadError,
    ais::{BitStream, Field, FieldKind, FieldValue, MmsiCategory, Payload, mmsi},
};

/// Message type, bits 0..6
pub const MESSAGE_TYPE: Field = Field::new("message_type", 0, 6, FieldKind::Unsigned);
/// Repeat indicator, bits 6..8
pub const REPEAT_INDICATOR: Field = Field::new("repeat_indicator", 6, 2, FieldKind::Unsigned);
/// Source MMSI, bits 8..38
pub const SOURCE_MMSI: Field = Field::new("source_mmsi", 8, 30, FieldKind::Unsigned);

/// Layout shared by every AIS message.
pub const UNIVERSAL: &[Field] = &[MESSAGE_TYPE, REPEAT_INDICATOR, SOURCE_MMSI];

/// Field access shared by every decoded AIS message.
///
/// Implementors only provide their payload and layout; everything else is
/// derived from them.
///
/// ```rust
/// use nmea0183_ais::ais::{AisMessage, FieldValue, MmsiCategory, VdmMessage};
///
/// let message = AisMessage::decode("15NO=ndP01JrjhlH@0s;3?vD0L0e", 0).unwrap();
/// assert_eq!(message.message_type(), 1);
/// assert_eq!(message.source_mmsi(), Some(367513050));
/// assert_eq!(message.mmsi_category(), MmsiCategory::IndividualShip);
/// assert_eq!(message.field("speed_over_ground"), Some(FieldValue::Float(0.1)));
/// assert_eq!(message.field("no_such_field"), None);
/// ```
pub trait VdmMessage {
    /// The decoded payload.
    fn payload(&self) -> &Payload;

    /// The layout of this message, universal fields included.
    fn schema(&self) -> &'static [Field];

    /// AIS message type, 0 when the payload is too short to hold one.
    fn message_type(&self) -> u8 {
        self.payload()
            .unsigned(&MESSAGE_TYPE)
            .map_or(0, |value| value as u8)
    }

    /// How many times the message has been repeated, 0 to 3.
    fn repeat_indicator(&self) -> Option<u8> {
        self.payload()
            .unsigned(&REPEAT_INDICATOR)
            .map(|value| value as u8)
    }

    /// MMSI of the transmitting station.
    fn source_mmsi(&self) -> Option<u32> {
        self.payload()
            .unsigned(&SOURCE_MMSI)
            .map(|value| value as u32)
    }

    /// Category of the source MMSI.
    fn mmsi_category(&self) -> MmsiCategory {
        self.source_mmsi()
            .map_or(MmsiCategory::Unknown, |mmsi| {
                MmsiCategory::classify(u64::from(mmsi))
            })
    }

    /// Description of the source MMSI category.
    fn mmsi_category_description(&self) -> &'static str {
        self.mmsi_category().description()
    }

    /// Returns `true` when the source is an auxiliary craft of a parent ship.
    fn auxiliary_craft(&self) -> bool {
        self.source_mmsi()
            .is_some_and(|mmsi| mmsi::is_auxiliary_craft(u64::from(mmsi)))
    }

    /// Reads the layout entry called `name`.
    ///
    /// Returns `None` for names outside the layout and for fields without a
    /// value.
    fn field(&self, name: &str) -> Option<FieldValue> {
        let field = self.schema().iter().find(|field| field.name == name)?;
        self.payload().get(field)
    }

    /// Reads every layout entry, in layout order.
    fn values(&self) -> Vec<(&'static str, Option<FieldValue>)> {
        self.schema()
            .iter()
            .map(|field| (field.name, self.payload().get(field)))
            .collect()
    }
}

/// The message families known to the registry.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    /// Types 1, 2 and 3
    PositionReport,
    /// Type 4
    BaseStationReport,
    /// Type 5
    StaticVoyageData,
    /// Type 8
    BinaryBroadcast,
    /// Type 18
    ClassBPositionReport,
    /// Any other type
    Undefined,
}

impl MessageKind {
    /// Looks up the family of `message_type`.
    pub fn from_message_type(message_type: u8) -> MessageKind {
        match message_type {
            1..=3 => MessageKind::PositionReport,
            4 => MessageKind::BaseStationReport,
            5 => MessageKind::StaticVoyageData,
            8 => MessageKind::BinaryBroadcast,
            18 => MessageKind::ClassBPositionReport,
            _ => MessageKind::Undefined,
        }
    }

    /// The layout of the family.
    pub fn schema(self) -> &'static [Field] {
        match self {
            MessageKind::PositionReport => PositionReport::SCHEMA,
            MessageKind::BaseStationReport => BaseStationReport::SCHEMA,
            MessageKind::StaticVoyageData => StaticVoyageData::SCHEMA,
            MessageKind::BinaryBroadcast => BinaryBroadcast::SCHEMA,
            MessageKind::ClassBPositionReport => ClassBPositionReport::SCHEMA,
            MessageKind::Undefined => UNIVERSAL,
        }
    }
}

/// A decoded AIS message.
///
/// ```rust
/// use nmea0183_ais::ais::{AisMessage, MessageKind, VdmMessage};
///
/// let message = AisMessage::decode("B5NLCa000>fdwc63f?aBKwPUoP06", 0).unwrap();
/// assert_eq!(message.kind(), MessageKind::ClassBPositionReport);
///
/// match message {
///     AisMessage::ClassBPositionReport(report) => {
///         assert_eq!(report.course_over_ground(), Some(131.8));
///         assert_eq!(report.true_heading(), None);
///     }
///     _ => unreachable!(),
/// }
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum AisMessage {
    /// Types 1, 2 and 3
    PositionReport(PositionReport),
    /// Type 4
    BaseStationReport(BaseStationReport),
    /// Type 5
    StaticVoyageData(StaticVoyageData),
    /// Type 8
    BinaryBroadcast(BinaryBroadcast),
    /// Type 18
    ClassBPositionReport(ClassBPositionReport),
    /// Any other type
    Undefined(Undefined),
}

impl AisMessage {
    /// Decodes an assembled armored payload.
    ///
    /// Fails only when the payload cannot be turned into a bit stream; unknown
    /// message types decode to [`AisMessage::Undefined`].
    pub fn decode(armored: &str, fill_bits: u8) -> Result<AisMessage, PayloadError> {
        Payload::new(armored, fill_bits).map(AisMessage::from_payload)
    }

    /// Dispatches a decoded payload to its family.
    pub fn from_payload(payload: Payload) -> AisMessage {
        let message_type = payload.unsigned(&MESSAGE_TYPE);
        let kind = message_type.map_or(MessageKind::Undefined, |message_type| {
            MessageKind::from_message_type(message_type as u8)
        });
        trace!("message type {message_type:?} decodes as {kind:?}");

        match kind {
            MessageKind::PositionReport => AisMessage::PositionReport(payload.into()),
            MessageKind::BaseStationReport => AisMessage::BaseStationReport(payload.into()),
            MessageKind::StaticVoyageData => AisMessage::StaticVoyageData(payload.into()),
            MessageKind::BinaryBroadcast => AisMessage::BinaryBroadcast(payload.into()),
            MessageKind::ClassBPositionReport => AisMessage::ClassBPositionReport(payload.into()),
            MessageKind::Undefined => AisMessage::Undefined(payload.into()),
        }
    }

    /// The family of the message.
    pub fn kind(&self) -> MessageKind {
        match self {
            AisMessage::PositionReport(_) => MessageKind::PositionReport,
            AisMessage::BaseStationReport(_) => MessageKind::BaseStationReport,
            AisMessage::StaticVoyageData(_) => MessageKind::StaticVoyageData,
            AisMessage::BinaryBroadcast(_) => MessageKind::BinaryBroadcast,
            AisMessage::ClassBPositionReport(_) => MessageKind::ClassBPositionReport,
            AisMessage::Undefined(_) => MessageKind::Undefined,
        }
    }

    fn inner(&self) -> &dyn VdmMessage {
        match self {
            AisMessage::PositionReport(message) => message,
            AisMessage::BaseStationReport(message) => message,
            AisMessage::StaticVoyageData(message) => message,
            AisMessage::BinaryBroadcast(message) => message,
            AisMessage::ClassBPositionReport(message) => message,
            AisMessage::Undefined(message) => message,
        }
    }
}

impl VdmMessage for AisMessage {
    fn payload(&self) -> &Payload {
        self.inner().payload()
    }

    fn schema(&self) -> &'static [Field] {
        self.inner().schema()
    }
}

/// A message of a type without a dedicated layout.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Undefined {
    payload: Payload,
}

impl From<Payload> for Undefined {
    fn from(payload: Payload) -> Self {
        Undefined { payload }
    }
}

impl VdmMessage for Undefined {
    fn payload(&self) -> &Payload {
        &self.payload
    }

    fn schema(&self) -> &'static [Field] {
        UNIVERSAL
    }
}

/// Description of a ship and cargo type code.
///
/// ```rust
/// use nmea0183_ais::ais::ship_cargo_type_description;
///
/// assert_eq!(ship_cargo_type_description(69), Some("Passenger, No additional information"));
/// assert_eq!(ship_cargo_type_description(86), Some("Tanker, Reserved for future use"));
/// assert_eq!(ship_cargo_type_description(0), Some("Not available"));
/// assert_eq!(ship_cargo_type_description(100), None);
/// ```
pub fn ship_cargo_type_description(code: u8) -> Option<&'static str> {
    let description = match code {
        0 => "Not available",
        1..=19 => "(future use)",
        20 => "WIG (any)",
        21 => "WIG Hazardous category A",
        22 => "WIG Hazardous category B",
        23 => "WIG Hazardous category C",
        24 => "WIG Hazardous category D",
        25..=29 => "WIG (future use)",
        30 => "Fishing",
        31 => "Towing",
        32 => "Towing (large)",
        33 => "Dredging/underwater ops",
        34 => "Diving ops",
        35 => "Military ops",
        36 => "Sailing",
        37 => "Pleasure craft",
        38 | 39 => "Reserved",
        40 => "High Speed Craft",
        41 => "HSC Hazardous category A",
        42 => "HSC Hazardous category B",
        43 => "HSC Hazardous category C",
        44 => "HSC Hazardous category D",
        45..=48 => "HSC (reserved)",
        49 => "HSC (no additional information)",
        50 => "Pilot Vessel",
        51 => "Search and Rescue Vessel",
        52 => "Tug",
        53 => "Port Tender",
        54 => "Anti-pollution equipment",
        55 => "Law Enforcement",
        56 | 57 => "Spare - Local Vessel",
        58 => "Medical Transport",
        59 => "Noncombatant ship according to RR Resolution No. 18",
        60 => "Passenger",
        61 => "Passenger, Hazardous category A",
        62 => "Passenger, Hazardous category B",
        63 => "Passenger, Hazardous category C",
        64 => "Passenger, Hazardous category D",
        65..=68 => "Passenger, Reserved for future use",
        69 => "Passenger, No additional information",
        70 => "Cargo",
        71 => "Cargo, Hazardous category A",
        72 => "Cargo, Hazardous category B",
        73 => "Cargo, Hazardous category C",
        74 => "Cargo, Hazardous category D",
        75..=78 => "Cargo, Reserved for future use",
        79 => "Cargo, No additional information",
        80 => "Tanker",
        81 => "Tanker, Hazardous category A",
        82 => "Tanker, Hazardous category B",
        83 => "Tanker, Hazardous category C",
        84 => "Tanker, Hazardous category D",
        85..=88 => "Tanker, Reserved for future use",
        89 => "Tanker, No additional information",
        90 => "Other Type",
        91 => "Other Type, Hazardous category A",
        92 => "Other Type, Hazardous category B",
        93 => "Other Type, Hazardous category C",
        94 => "Other Type, Hazardous category D",
        95..=98 => "Other Type, Reserved for future use",
        99 => "Other Type, no additional information",
        _ => return None,
    };

    Some(description)
}

/// Description of a navigational status code.
pub fn navigational_status_description(code: u8) -> Option<&'static str> {
    let description = match code {
        0 => "Under way using engine",
        1 => "At anchor",
        2 => "Not under command",
        3 => "Restricted manoeuverability",
        4 => "Constrained by her draught",
        5 => "Moored",
        6 => "Aground",
        7 => "Engaged in Fishing",
        8 => "Under way sailing",
        14 => "AIS-SART active",
        9..=13 | 15 => "Reserved for future use",
        _ => return None,
    };

    Some(description)
}

// Interpreters shared by the family layouts. Positions are in 1/10000 minute,
// speeds and courses in tenths.

const LONGITUDE_NOT_AVAILABLE: i64 = 181 * 600_000;
const LATITUDE_NOT_AVAILABLE: i64 = 91 * 600_000;

fn minutes_to_degrees(raw: i64) -> f64 {
    raw as f64 / 10_000.0 / 60.0
}

pub(crate) fn longitude(
    bits: &BitStream,
    offset: usize,
    width: usize,
) -> Result<Option<FieldValue>, PayloadError> {
    let raw = bits.extract_signed(offset, width)?;
    Ok((raw != LONGITUDE_NOT_AVAILABLE).then(|| FieldValue::Float(minutes_to_degrees(raw))))
}

pub(crate) fn latitude(
    bits: &BitStream,
    offset: usize,
    width: usize,
) -> Result<Option<FieldValue>, PayloadError> {
    let raw = bits.extract_signed(offset, width)?;
    Ok((raw != LATITUDE_NOT_AVAILABLE).then(|| FieldValue::Float(minutes_to_degrees(raw))))
}

pub(crate) fn speed_over_ground(
    bits: &BitStream,
    offset: usize,
    width: usize,
) -> Result<Option<FieldValue>, PayloadError> {
    let raw = bits.extract_unsigned(offset, width)?;
    Ok((raw != 1023).then(|| FieldValue::Float(raw as f64 / 10.0)))
}

pub(crate) fn course_over_ground(
    bits: &BitStream,
    offset: usize,
    width: usize,
) -> Result<Option<FieldValue>, PayloadError> {
    let raw = bits.extract_unsigned(offset, width)?;
    Ok((raw != 3600).then(|| FieldValue::Float(raw as f64 / 10.0)))
}

pub(crate) fn true_heading(
    bits: &BitStream,
    offset: usize,
    width: usize,
) -> Result<Option<FieldValue>, PayloadError> {
    let raw = bits.extract_unsigned(offset, width)?;
    Ok((raw != 511).then_some(FieldValue::Unsigned(raw)))
}
