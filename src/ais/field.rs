//! # Declarative Field Extraction
//!
//! Every AIS message layout is a constant table of [`Field`] descriptors. A
//! descriptor names a bit range of the payload and says how to interpret it; a
//! single generic routine ([`Field::interpret`]) turns a descriptor and a
//! [`BitStream`] into a [`FieldValue`].
//!
//! ```rust
//! use nmea0183_ais::ais::{Field, FieldKind, FieldValue, Payload};
//!
//! const MMSI: Field = Field::new("source_mmsi", 8, 30, FieldKind::Unsigned);
//!
//! let payload = Payload::new("15NO=ndP01JrjhlH@0s;3?vD0L0e", 0).unwrap();
//! assert_eq!(payload.get(&MMSI), Some(FieldValue::Unsigned(367513050)));
//! ```

use std::fmt;

use log::debug;

use crate::{PayloadError, ais::BitStream};

/// A custom field interpreter.
///
/// Receives the bit stream and the resolved `(offset, width)` of the field.
/// Returning `Ok(None)` means the field is well-formed but carries no value
/// (a "not available" sentinel, for instance).
pub type Interpreter = fn(&BitStream, usize, usize) -> Result<Option<FieldValue>, PayloadError>;

/// Width of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
    /// A fixed number of bits, bounds-checked against the whole decoded stream
    Bits(usize),
    /// Everything from the offset to the end of the data, fill bits excluded
    ToEnd,
}

/// How the bits of a field are interpreted.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    /// Big-endian unsigned integer
    Unsigned,
    /// Two's complement integer
    Signed,
    /// AIS six-bit ASCII text
    Text,
    /// Flag, `true` when any bit is set
    Bool,
    /// Scaled or sentinel-aware value computed by a custom function
    Custom(Interpreter),
}

/// One entry of a message layout.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    /// Field name, unique within a layout
    pub name: &'static str,
    /// First bit of the field
    pub offset: usize,
    /// Number of bits
    pub width: Width,
    /// Interpretation of the bits
    pub kind: FieldKind,
}

impl Field {
    /// Creates a fixed-width field.
    pub const fn new(name: &'static str, offset: usize, width: usize, kind: FieldKind) -> Self {
        Field {
            name,
            offset,
            width: Width::Bits(width),
            kind,
        }
    }

    /// Creates a field running from `offset` to the end of the data.
    pub const fn to_end(name: &'static str, offset: usize, kind: FieldKind) -> Self {
        Field {
            name,
            offset,
            width: Width::ToEnd,
            kind,
        }
    }

    /// Resolves the width of the field against a concrete bit stream.
    pub fn resolve_width(&self, bits: &BitStream) -> Result<usize, PayloadError> {
        match self.width {
            Width::Bits(width) => Ok(width),
            Width::ToEnd => {
                bits.data_len()
                    .checked_sub(self.offset)
                    .ok_or(PayloadError::BitRangeOverrun {
                        offset: self.offset,
                        width: 0,
                        length: bits.data_len(),
                    })
            }
        }
    }

    /// Reads the field from `bits`.
    pub fn interpret(&self, bits: &BitStream) -> Result<Option<FieldValue>, PayloadError> {
        let offset = self.offset;
        let width = self.resolve_width(bits)?;

        let value = match self.kind {
            FieldKind::Unsigned => FieldValue::Unsigned(bits.extract_unsigned(offset, width)?),
            FieldKind::Signed => FieldValue::Signed(bits.extract_signed(offset, width)?),
            FieldKind::Text => FieldValue::Text(bits.extract_text(offset, width)?),
            FieldKind::Bool => FieldValue::Bool(bits.extract_unsigned(offset, width)? != 0),
            FieldKind::Custom(interpret) => return interpret(bits, offset, width),
        };

        Ok(Some(value))
    }
}

/// A decoded field value.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Unsigned integer
    Unsigned(u64),
    /// Signed integer
    Signed(i64),
    /// Six-bit text, trailing `@` padding removed
    Text(String),
    /// Flag
    Bool(bool),
    /// Scaled value (knots, degrees, metres, ...)
    Float(f64),
}

impl FieldValue {
    /// Returns the value as an unsigned integer, if it is one.
    pub fn as_unsigned(&self) -> Option<u64> {
        match *self {
            FieldValue::Unsigned(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the value as a signed integer, if it is an integer that fits.
    pub fn as_signed(&self) -> Option<i64> {
        match *self {
            FieldValue::Signed(value) => Some(value),
            FieldValue::Unsigned(value) => i64::try_from(value).ok(),
            _ => None,
        }
    }

    /// Returns the value as a float, if it is numeric.
    pub fn as_float(&self) -> Option<f64> {
        match *self {
            FieldValue::Float(value) => Some(value),
            FieldValue::Unsigned(value) => Some(value as f64),
            FieldValue::Signed(value) => Some(value as f64),
            _ => None,
        }
    }

    /// Returns the value as text, if it is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the value as a flag, if it is one.
    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            FieldValue::Bool(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Unsigned(value) => write!(f, "{value}"),
            FieldValue::Signed(value) => write!(f, "{value}"),
            FieldValue::Text(value) => write!(f, "{value:?}"),
            FieldValue::Bool(value) => write!(f, "{value}"),
            FieldValue::Float(value) => write!(f, "{value}"),
        }
    }
}

/// A decoded AIS payload, ready for schema-driven field access.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Payload {
    bits: BitStream,
}

impl Payload {
    /// Decodes an assembled armored payload.
    pub fn new(armored: &str, fill_bits: u8) -> Result<Self, PayloadError> {
        BitStream::from_armored(armored, fill_bits).map(Payload::from)
    }

    /// The underlying bit stream.
    pub fn bits(&self) -> &BitStream {
        &self.bits
    }

    /// Reads `field`, reporting hard failures.
    pub fn read(&self, field: &Field) -> Result<Option<FieldValue>, PayloadError> {
        field.interpret(&self.bits)
    }

    /// Reads `field`, degrading hard failures to `None`.
    pub fn get(&self, field: &Field) -> Option<FieldValue> {
        self.read(field).unwrap_or_else(|e| {
            debug!("field {} unreadable: {e}", field.name);
            None
        })
    }

    /// Reads `field` as an unsigned integer.
    pub fn unsigned(&self, field: &Field) -> Option<u64> {
        self.get(field)?.as_unsigned()
    }

    /// Reads `field` as a signed integer.
    pub fn signed(&self, field: &Field) -> Option<i64> {
        self.get(field)?.as_signed()
    }

    /// Reads `field` as a float.
    pub fn float(&self, field: &Field) -> Option<f64> {
        self.get(field)?.as_float()
    }

    /// Reads `field` as a flag.
    pub fn flag(&self, field: &Field) -> Option<bool> {
        self.get(field)?.as_bool()
    }

    /// Reads `field` as text.
    pub fn text(&self, field: &Field) -> Option<String> {
        match self.get(field)? {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<BitStream> for Payload {
    fn from(bits: BitStream) -> Self {
        Payload { bits }
    }
}
