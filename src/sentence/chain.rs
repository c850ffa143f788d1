//! Multi-part message reassembly.
//!
//! AIS messages longer than one sentence are split into fragments sharing a
//! sequence id. The first fragment heads a singly linked chain owning every
//! following fragment.

use std::iter;

use log::trace;

use super::Sentence;

impl Sentence {
    /// Attaches `fragment` at the tail of the chain headed by `self`.
    ///
    /// Fragments are linked in arrival order; no reordering or validation
    /// happens here. Use [`is_complete`](Self::is_complete) to check the result.
    ///
    /// ```rust
    /// use nmea0183_ais::Sentence;
    ///
    /// let mut head = Sentence::parse("!AIVDM,2,1,3,B,55P5TL01VIaAL@7WKO@mBplU@<PDhh000000001S;AJ::4A80?4i@E53,0*3E").unwrap();
    /// assert!(!head.is_complete());
    ///
    /// head.add_fragment(Sentence::parse("!AIVDM,2,2,3,B,1@0000000000000,2*55").unwrap());
    /// assert!(head.is_complete());
    /// assert_eq!(head.final_fill_bits(), 2);
    /// ```
    pub fn add_fragment(&mut self, fragment: Sentence) {
        trace!(
            "linking fragment {:?} of {:?} (sequence {:?})",
            fragment.message_number(),
            fragment.total_messages(),
            fragment.sequence_id()
        );

        let mut tail = &mut self.next_part;
        while let Some(part) = tail {
            tail = &mut part.next_part;
        }
        *tail = Some(Box::new(fragment));
    }

    /// The fragment linked after this one, if any.
    pub fn next_part(&self) -> Option<&Sentence> {
        self.next_part.as_deref()
    }

    /// Iterates over the chain, starting with `self`.
    pub fn parts(&self) -> impl Iterator<Item = &Sentence> {
        iter::successors(Some(self), |part| part.next_part())
    }

    /// Number of sentences in the chain, `self` included.
    pub fn fragment_count(&self) -> usize {
        self.parts().count()
    }

    /// Returns `true` when the chain holds every fragment of the message.
    ///
    /// The head must be fragment 1, each following fragment must be numbered one
    /// higher than the previous, and the walk must reach a fragment whose number
    /// equals its total. Running out of links first means the message is still
    /// incomplete, and so does any fragment with an unreadable counter.
    pub fn is_complete(&self) -> bool {
        let mut expected = 1u8;
        for part in self.parts() {
            let (Some(number), Some(total)) = (part.message_number(), part.total_messages())
            else {
                return false;
            };
            if number != expected {
                return false;
            }
            if number == total {
                return true;
            }
            match expected.checked_add(1) {
                Some(next) => expected = next,
                None => return false,
            }
        }

        false
    }

    /// Concatenates the armored payloads of every linked fragment, in chain order.
    ///
    /// Works on incomplete chains too; the result then simply lacks the missing
    /// fragments.
    pub fn assembled_armored_payload(&self) -> String {
        self.parts()
            .filter_map(Sentence::armored_payload)
            .collect()
    }

    /// Fill bits of the last linked fragment.
    pub fn final_fill_bits(&self) -> u8 {
        self.parts().last().map_or(0, Sentence::fill_bits)
    }
}

#[cfg(test)]
mod tests {
    use std::fmt::Display;

    use crate::{
        Sentence,
        ais::{AisMessage, VdmMessage},
    };

    const PART_1: &str =
        "!AIVDM,2,1,3,B,55P5TL01VIaAL@7WKO@mBplU@<PDhh000000001S;AJ::4A80?4i@E53,0*3E";
    const PART_2: &str = "!AIVDM,2,2,3,B,1@0000000000000,2*55";

    fn fragment(total: impl Display, number: impl Display) -> Sentence {
        let mut sentence = Sentence::parse("!AIVDM,1,1,,A,0,0").unwrap();
        sentence.set_payload(format!("AIVDM,{total},{number},7,A,0,0"));
        sentence
    }

    #[test]
    fn test_single_fragment() {
        let sentence = Sentence::parse("!AIVDM,1,1,,B,15NO=ndP01JrjhlH@0s;3?vD0L0e,0*77").unwrap();
        assert!(sentence.is_complete());
        assert_eq!(sentence.fragment_count(), 1);
        assert!(sentence.next_part().is_none());
    }

    #[test]
    fn test_completeness() {
        let mut head = fragment(2, 1);
        assert!(!head.is_complete());
        head.add_fragment(fragment(2, 2));
        assert!(head.is_complete());

        let mut head = fragment(3, 1);
        head.add_fragment(fragment(3, 3));
        assert!(!head.is_complete(), "skipped fragment");
        head.add_fragment(fragment(3, 2));
        assert!(!head.is_complete(), "out of order");

        let mut head = fragment(3, 2);
        head.add_fragment(fragment(3, 3));
        assert!(!head.is_complete(), "head is not the first fragment");

        let mut head = fragment(3, 1);
        head.add_fragment(fragment(3, 2));
        head.add_fragment(fragment(3, 3));
        assert!(head.is_complete());
        assert_eq!(head.fragment_count(), 3);

        let numbers: Vec<_> = head.parts().map(Sentence::message_number).collect();
        assert_eq!(numbers, [Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn test_unreadable_fragment_index() {
        let sentence = Sentence::parse("!AIVDM,1,256,,B,15NO=ndP01JrjhlH@0s;3?vD0L0e,0").unwrap();
        assert_eq!(sentence.total_messages(), Some(1));
        assert_eq!(sentence.message_number(), None);
        assert!(!sentence.is_complete());

        let mut head = fragment(2, "x");
        assert_eq!(head.message_number(), None);
        head.add_fragment(fragment(2, 2));
        assert!(!head.is_complete());

        let head = fragment(1, 0);
        assert_eq!(head.message_number(), None);
        assert!(!head.is_complete());

        let head = fragment("x", 1);
        assert_eq!(head.total_messages(), None);
        assert!(!head.is_complete());
    }

    #[test]
    fn test_blank_fragment_index() {
        let head = fragment(1, "");
        assert_eq!(head.message_number(), Some(1));
        assert!(head.is_complete());

        let head = fragment("", "");
        assert_eq!(head.total_messages(), Some(1));
        assert_eq!(head.message_number(), Some(1));
        assert!(head.is_complete());

        let mut head = fragment(2, "");
        assert_eq!(head.message_number(), None);
        head.add_fragment(fragment(2, 2));
        assert!(!head.is_complete());
    }

    #[test]
    fn test_assembled_payload() {
        let mut head = Sentence::parse(PART_1).unwrap();
        assert_eq!(head.final_fill_bits(), 0);
        assert_eq!(
            head.assembled_armored_payload(),
            "55P5TL01VIaAL@7WKO@mBplU@<PDhh000000001S;AJ::4A80?4i@E53"
        );

        head.add_fragment(Sentence::parse(PART_2).unwrap());
        assert!(head.is_complete());
        assert_eq!(
            head.assembled_armored_payload(),
            "55P5TL01VIaAL@7WKO@mBplU@<PDhh000000001S;AJ::4A80?4i@E531@0000000000000"
        );
        assert_eq!(head.final_fill_bits(), 2);

        let message = head.ais().unwrap();
        assert!(matches!(message, AisMessage::StaticVoyageData(_)));
        assert_eq!(message.message_type(), 5);
        assert_eq!(message.repeat_indicator(), Some(0));
    }
}
