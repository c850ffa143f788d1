//! # MMSI Categories
//!
//! Classification of Maritime Mobile Service Identities by their digit
//! pattern, after ITU-R M.585.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

macro_rules! described_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => ($symbol:literal, $description:literal)
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $name {
            /// Symbolic name of the category.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $symbol,)*
                }
            }

            /// Human-readable description of the category.
            pub const fn description(self) -> &'static str {
                match self {
                    $(Self::$variant => $description,)*
                }
            }
        }
    };
}

described_enum! {
    /// MMSI category
    pub enum MmsiCategory {
        /// `MIDXXXXXX`, MID starting with 2 to 7
        IndividualShip => ("individual_ship", "Individual ship"),
        /// `00MIDXXXX`
        CoastStation => ("coast_station", "Coast station"),
        /// `00MID2XXX`
        HarborStation => ("harbor_station", "Harbor station"),
        /// `00MID3XXX`
        PilotStation => ("pilot_station", "Pilot station"),
        /// `00MID4XXX`
        AisRepeaterStation => ("ais_repeater_station", "AIS repeater station"),
        /// `111MIDXXX`
        SarAircraft => ("sar_aircraft", "SAR aircraft"),
        /// `111MID1XX`
        SarAircraftFixed => ("sar_aircraft_fixed", "SAR fixed-wing aircraft"),
        /// `111MID5XX`
        SarAircraftHelicopter => ("sar_aircraft_helicopter", "SAR helicopter"),
        /// `8MIDXXXXX`
        Handheld => ("handheld", "Handheld transceiver"),
        /// `98MIDXXXX`
        AuxiliaryCraft => ("auxiliary_craft", "Auxiliary craft"),
        /// `970YYZZZZ`
        SarTransmitter => ("sar_transmitter", "AIS-SART"),
        /// `972YYZZZZ`
        ManOverboard => ("man_overboard", "MOB (Man Overboard)"),
        /// `974YYZZZZ`
        Epirb => ("epirb", "EPIRB"),
        /// `99MID1XXX`
        AtonPhysical => ("aton_physical", "Physical AIS AtoN"),
        /// `99MID6XXX`
        AtonVirtual => ("aton_virtual", "Virtual AIS AtoN"),
        /// `99MIDXXXX`
        Aton => ("aton", "AIS Aid to Navigation"),
        /// Any other identity starting with 9
        FreeForm => ("free_form", "free_form"),
        /// No known pattern matches
        Unknown => ("unknown_mmsi_category", "unknown_mmsi_category"),
    }
}

impl MmsiCategory {
    /// Classifies `mmsi` by the digits of its 9-digit zero-padded form.
    ///
    /// Patterns are tried in a fixed priority order, so the more specific
    /// station kinds win over their generic prefix.
    ///
    /// ```rust
    /// use nmea0183_ais::ais::MmsiCategory;
    ///
    /// assert_eq!(MmsiCategory::classify(367513050), MmsiCategory::IndividualShip);
    /// assert_eq!(MmsiCategory::classify(3660610), MmsiCategory::CoastStation);
    /// assert_eq!(MmsiCategory::classify(985380199), MmsiCategory::AuxiliaryCraft);
    /// assert_eq!(MmsiCategory::classify(972000001).description(), "MOB (Man Overboard)");
    /// ```
    pub fn classify(mmsi: u64) -> MmsiCategory {
        let digits = format!("{mmsi:09}");
        let digits = digits.as_bytes();
        if digits.len() != 9 {
            return MmsiCategory::Unknown;
        }

        match digits {
            [b'2'..=b'7', ..] => MmsiCategory::IndividualShip,
            [b'0', b'0', _, _, _, b'1', ..] => MmsiCategory::CoastStation,
            [b'0', b'0', _, _, _, b'2', ..] => MmsiCategory::HarborStation,
            [b'0', b'0', _, _, _, b'3', ..] => MmsiCategory::PilotStation,
            [b'0', b'0', _, _, _, b'4', ..] => MmsiCategory::AisRepeaterStation,
            [b'0', b'0', ..] => MmsiCategory::CoastStation,
            [b'1', b'1', b'1', _, _, _, b'1', ..] => MmsiCategory::SarAircraftFixed,
            [b'1', b'1', b'1', _, _, _, b'5', ..] => MmsiCategory::SarAircraftHelicopter,
            [b'1', ..] => MmsiCategory::SarAircraft,
            [b'8', ..] => MmsiCategory::Handheld,
            [b'9', b'8', ..] => MmsiCategory::AuxiliaryCraft,
            [b'9', b'7', b'0', ..] => MmsiCategory::SarTransmitter,
            [b'9', b'7', b'2', ..] => MmsiCategory::ManOverboard,
            [b'9', b'7', b'4', ..] => MmsiCategory::Epirb,
            [b'9', b'9', _, _, _, b'1', ..] => MmsiCategory::AtonPhysical,
            [b'9', b'9', _, _, _, b'6', ..] => MmsiCategory::AtonVirtual,
            [b'9', b'9', ..] => MmsiCategory::Aton,
            [b'9', ..] => MmsiCategory::FreeForm,
            _ => MmsiCategory::Unknown,
        }
    }
}

/// Returns `true` for auxiliary craft identities, `98XXXYYYY`.
pub fn is_auxiliary_craft(mmsi: u64) -> bool {
    980_000_000 < mmsi && mmsi < 990_000_000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        let cases = [
            (367513050, MmsiCategory::IndividualShip),
            (603916439, MmsiCategory::IndividualShip),
            (3660610, MmsiCategory::CoastStation),
            (2311000, MmsiCategory::CoastStation),
            (2312000, MmsiCategory::HarborStation),
            (2313000, MmsiCategory::PilotStation),
            (2314000, MmsiCategory::AisRepeaterStation),
            (2319000, MmsiCategory::CoastStation),
            (111232100, MmsiCategory::SarAircraftFixed),
            (111232500, MmsiCategory::SarAircraftHelicopter),
            (111232000, MmsiCategory::SarAircraft),
            (123456789, MmsiCategory::SarAircraft),
            (823456789, MmsiCategory::Handheld),
            (982320001, MmsiCategory::AuxiliaryCraft),
            (970010001, MmsiCategory::SarTransmitter),
            (972010001, MmsiCategory::ManOverboard),
            (974010001, MmsiCategory::Epirb),
            (992321000, MmsiCategory::AtonPhysical),
            (992326000, MmsiCategory::AtonVirtual),
            (992320000, MmsiCategory::Aton),
            (971000000, MmsiCategory::FreeForm),
            (900000000, MmsiCategory::FreeForm),
            (12345678, MmsiCategory::Unknown),
            (0, MmsiCategory::CoastStation),
            (1_000_000_000, MmsiCategory::Unknown),
        ];

        for (mmsi, expected) in cases {
            assert_eq!(MmsiCategory::classify(mmsi), expected, "Failed: {mmsi}");
        }
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(MmsiCategory::IndividualShip.description(), "Individual ship");
        assert_eq!(MmsiCategory::SarTransmitter.description(), "AIS-SART");
        assert_eq!(MmsiCategory::Aton.description(), "AIS Aid to Navigation");
        assert_eq!(MmsiCategory::FreeForm.description(), "free_form");
        assert_eq!(MmsiCategory::Unknown.description(), "unknown_mmsi_category");
        assert_eq!(MmsiCategory::Unknown.as_str(), "unknown_mmsi_category");
        assert_eq!(MmsiCategory::AtonVirtual.as_str(), "aton_virtual");
    }

    #[test]
    fn test_auxiliary_craft_agreement() {
        for mmsi in [980000001, 985380199, 989999999] {
            assert!(is_auxiliary_craft(mmsi), "Failed: {mmsi}");
            assert_eq!(MmsiCategory::classify(mmsi), MmsiCategory::AuxiliaryCraft);
        }

        for mmsi in [980000000, 990000000, 367513050] {
            assert!(!is_auxiliary_craft(mmsi), "Failed: {mmsi}");
        }
    }
}
