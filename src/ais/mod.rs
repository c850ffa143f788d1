//! # AIS Payload Decoding
//!
//! Turns the armored payload of `VDM`/`VDO` sentences into typed messages:
//!
//! 1. [`dearmor_stream`] decodes armored text into a [`BitStream`];
//! 2. [`Field`] descriptors read named bit ranges from a [`Payload`];
//! 3. the message type selects a [`MessageKind`] and its layout, and
//!    [`AisMessage`] wraps the matching family.
//!
//! ```rust
//! use nmea0183_ais::{Sentence, ais::{AisMessage, VdmMessage}};
//!
//! let sentence = Sentence::parse("!AIVDM,1,1,,B,15NO=ndP01JrjhlH@0s;3?vD0L0e,0*77").unwrap();
//! let message = sentence.ais().unwrap();
//!
//! assert_eq!(message.message_type(), 1);
//! if let AisMessage::PositionReport(report) = message {
//!     assert_eq!(report.longitude(), Some(-71.04251666666667));
//!     assert_eq!(report.latitude(), Some(42.380340000000004));
//! }
//! ```

mod armor;
mod field;
mod messages;
mod mmsi;

pub use armor::{BitStream, dearmor, dearmor_checked, dearmor_stream};
pub use field::{Field, FieldKind, FieldValue, Interpreter, Payload, Width};
pub use messages::{
    AisMessage, BaseStationReport, BinaryBroadcast, ClassBPositionReport, MESSAGE_TYPE,
    MessageKind, PositionReport, REPEAT_INDICATOR, SOURCE_MMSI, StaticVoyageData, UNIVERSAL,
    Undefined, VdmMessage, navigational_status_description, ship_cargo_type_description,
};
pub use mmsi::{MmsiCategory, is_auxiliary_craft};

pub use crate::error::PayloadError;
