//! # NMEA 0183 AIS Decoder
//!
//! This library decodes NMEA 0183 sentences carrying AIS (Automatic
//! Identification System) data, in the form:
//! `!AIVDM,<total>,<number>,<sequence>,<channel>,<payload>,<fill>*CC\r\n`
//!
//! It provides:
//! - A configurable sentence framer (checksum and line ending policies)
//! - Reassembly of AIS messages split over several sentences
//! - The six-bit armor codec and a declarative bit-field extraction engine
//! - Typed accessors for the common AIS message types
//!
//! Malformed input never panics: lines that cannot be framed are rejected with
//! an [`Error`], corrupt checksums and incomplete chains are reported by
//! predicates, and unreadable fields come back as `None`.
//!
//! ## Usage
//!
//! ```rust
//! use nmea0183_ais::{Sentence, ais::{AisMessage, VdmMessage}};
//!
//! let mut head = Sentence::parse("!AIVDM,2,1,3,B,55P5TL01VIaAL@7WKO@mBplU@<PDhh000000001S;AJ::4A80?4i@E53,0*3E").unwrap();
//! assert!(head.checksum_ok());
//! assert!(!head.is_complete());
//!
//! head.add_fragment(Sentence::parse("!AIVDM,2,2,3,B,1@0000000000000,2*55").unwrap());
//! assert!(head.is_complete());
//!
//! match head.ais() {
//!     Ok(AisMessage::StaticVoyageData(data)) => {
//!         assert_eq!(data.source_mmsi(), Some(369190000));
//!         assert_eq!(data.name().as_deref(), Some("MT.MITCHELL"));
//!     }
//!     Ok(other) => println!("message type {}", other.message_type()),
//!     Err(e) => println!("undecodable payload: {e}"),
//! }
//! ```
//!
//! ## Logging
//!
//! The crate emits `debug` and `trace` records through the [`log`] facade
//! (unreadable fields, message dispatch, fragment linking). Install any `log`
//! implementation to see them.

pub mod ais;
pub mod error;
mod nmea0183;
pub mod parsing;
mod sentence;

pub use error::{Error, IResult, PayloadError};
pub use nmea0183::*;
pub use sentence::Sentence;

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct README;
