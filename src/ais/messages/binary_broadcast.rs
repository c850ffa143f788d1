#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    PayloadError,
    ais::{
        BitStream, Field, FieldKind, FieldValue, Payload, VdmMessage,
        messages::{MESSAGE_TYPE, REPEAT_INDICATOR, SOURCE_MMSI},
    },
};

const DESIGNATED_AREA_CODE: Field =
    Field::new("designated_area_code", 40, 10, FieldKind::Unsigned);
const FUNCTIONAL_ID: Field = Field::new("functional_id", 50, 6, FieldKind::Unsigned);
const APPLICATION_DATA: Field = Field::to_end("application_data", 56, FieldKind::Text);
const APPLICATION_DATA_BITS: Field =
    Field::to_end("application_data_bits", 56, FieldKind::Custom(bit_count));

fn bit_count(
    _bits: &BitStream,
    _offset: usize,
    width: usize,
) -> Result<Option<FieldValue>, PayloadError> {
    Ok(Some(FieldValue::Unsigned(width as u64)))
}

/// Type 8 - Binary Broadcast Message
///
/// <https://gpsd.gitlab.io/gpsd/AIVDM.html#_type_8_binary_broadcast_message>
///
/// The application data is interpreted according to its designated area code
/// and functional id; it is exposed here as six-bit text and as raw bits.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryBroadcast {
    payload: Payload,
}

impl BinaryBroadcast {
    /// Layout of type 8.
    pub const SCHEMA: &'static [Field] = &[
        MESSAGE_TYPE,
        REPEAT_INDICATOR,
        SOURCE_MMSI,
        DESIGNATED_AREA_CODE,
        FUNCTIONAL_ID,
        APPLICATION_DATA,
        APPLICATION_DATA_BITS,
    ];

    /// Designated area code (DAC)
    pub fn designated_area_code(&self) -> Option<u16> {
        self.payload
            .unsigned(&DESIGNATED_AREA_CODE)
            .map(|dac| dac as u16)
    }

    /// Functional id (FID)
    pub fn functional_id(&self) -> Option<u8> {
        self.payload.unsigned(&FUNCTIONAL_ID).map(|fid| fid as u8)
    }

    /// Application data as six-bit text
    pub fn application_data_6b(&self) -> Option<String> {
        self.payload.text(&APPLICATION_DATA)
    }

    /// Number of application data bits, fill bits excluded
    pub fn application_data_len(&self) -> Option<usize> {
        self.payload
            .unsigned(&APPLICATION_DATA_BITS)
            .map(|len| len as usize)
    }

    /// Application data as a bit stream of its own, for DAC/FID specific decoding
    ///
    /// The data is re-aligned to start at bit 0; its last sextet is zero-padded
    /// and the padding reported as fill bits.
    pub fn application_data(&self) -> Option<BitStream> {
        let bits = self.payload.bits();
        let len = self.application_data_len()?;
        let start = APPLICATION_DATA.offset;

        let mut armored = String::with_capacity(len.div_ceil(6));
        let mut offset = start;
        while offset < start + len {
            let group = (start + len - offset).min(6);
            let value = bits.extract_unsigned(offset, group).ok()? << (6 - group);
            armored.push(armor(value as u8));
            offset += group;
        }

        let fill = (armored.len() * 6 - len) as u8;
        BitStream::from_armored(&armored, fill).ok()
    }
}

fn armor(value: u8) -> char {
    let value = value + 48;
    char::from(if value > 87 { value + 8 } else { value })
}

impl From<Payload> for BinaryBroadcast {
    fn from(payload: Payload) -> Self {
        BinaryBroadcast { payload }
    }
}

impl VdmMessage for BinaryBroadcast {
    fn payload(&self) -> &Payload {
        &self.payload
    }

    fn schema(&self) -> &'static [Field] {
        Self::SCHEMA
    }
}
