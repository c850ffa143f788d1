use nom::{Err, IResult, Parser, error::ErrorKind};

use crate::{
    SentenceParser, SentenceParserBuilder,
    nmea0183::{LineEndingMode, crlf},
};

fn strip(mode: LineEndingMode, tail: &str) -> IResult<&str, ()> {
    crlf(mode).parse(tail)
}

#[test]
fn test_line_endings() {
    let cases = [
        (LineEndingMode::Required, "*77\r\n", Some("*77")),
        (LineEndingMode::Required, "\r\n", Some("")),
        (LineEndingMode::Required, "*77", None),
        (LineEndingMode::Required, "*77\n", None),
        (LineEndingMode::Forbidden, "*77", Some("*77")),
        (LineEndingMode::Forbidden, "", Some("")),
        (LineEndingMode::Forbidden, "*77\r\n", None),
        (LineEndingMode::Optional, "*77", Some("*77")),
    ];

    for (mode, tail, expected) in cases {
        match (strip(mode, tail), expected) {
            (Ok((rest, ())), Some(expected)) => assert_eq!(rest, expected, "{mode:?} {tail:?}"),
            (Err(Err::Error(e)), None) => {
                assert_eq!(e.code, ErrorKind::CrLf, "{mode:?} {tail:?}")
            }
            (result, _) => panic!("{mode:?} {tail:?}: {result:?}"),
        }
    }
}

#[test]
fn test_glued_sentences() {
    let tail = "*77\r\n!AIVDM,1,1,,B,,0*25\r\n";
    assert!(matches!(
        strip(LineEndingMode::Required, tail),
        Err(Err::Error(e)) if e.code == ErrorKind::CrLf
    ));

    let line = "!AIVDM,1,1,,B,15NO=ndP01JrjhlH@0s;3?vD0L0e,0*77\r\n!AIVDM,1,1,,B,,0*25\r\n";
    let strict = SentenceParserBuilder::new()
        .line_ending_mode(LineEndingMode::Required)
        .build();
    assert!(strict.parse(line).is_err());
    assert!(SentenceParser::new().parse(line).is_err());
}
