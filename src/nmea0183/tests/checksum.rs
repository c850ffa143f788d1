use nom::{Err, IResult, Parser, error::ErrorKind};

use crate::nmea0183::{ChecksumMode, LineEndingMode, checksum, checksum_crlf};

#[test]
fn test_checksum_value() {
    assert_eq!(checksum("AIVDM,1,1,,B,15NO=ndP01JrjhlH@0s;3?vD0L0e,0"), 0x77);
    assert_eq!(checksum("AIVDM,2,2,3,B,1@0000000000000,2"), 0x55);
    assert_eq!(checksum(""), 0);
}

#[test]
fn test_checksum_crlf_ok() {
    let res: IResult<_, _> =
        checksum_crlf(ChecksumMode::Required, LineEndingMode::Forbidden).parse("*1F");
    assert_eq!(res.unwrap().1, Some(0x1F));

    let res: IResult<_, _> =
        checksum_crlf(ChecksumMode::Required, LineEndingMode::Required).parse("*1f\r\n");
    assert_eq!(res.unwrap().1, Some(0x1F));
}

#[test]
fn test_checksum_crlf_optional() {
    let res: IResult<_, _> =
        checksum_crlf(ChecksumMode::Optional, LineEndingMode::Forbidden).parse("");
    assert_eq!(res.unwrap().1, None);

    let res: IResult<_, _> =
        checksum_crlf(ChecksumMode::Optional, LineEndingMode::Required).parse("\r\n");
    assert_eq!(res.unwrap().1, None);

    let res: IResult<_, _> =
        checksum_crlf(ChecksumMode::Optional, LineEndingMode::Forbidden).parse("7");
    assert!(res.is_err());
    if let Err::Error(error) = res.unwrap_err() {
        assert_eq!(error.code, ErrorKind::Count)
    } else {
        panic!("Unexpected error")
    }
}

#[test]
fn test_checksum_crlf_large_hex() {
    for (i, le) in [
        ("*1F43", LineEndingMode::Forbidden),
        ("*1F43\r\n", LineEndingMode::Required),
        ("*1Fzz", LineEndingMode::Forbidden),
    ] {
        let res: IResult<_, _> = checksum_crlf(ChecksumMode::Required, le).parse(i);
        assert!(res.is_err(), "Failed: {i:?}");

        if let Err::Error(error) = res.unwrap_err() {
            assert_eq!(error.code, ErrorKind::Count)
        } else {
            panic!("Unexpected error")
        }
    }
}

#[test]
fn test_checksum_crlf_small() {
    let res: IResult<_, _> =
        checksum_crlf(ChecksumMode::Required, LineEndingMode::Required).parse("*1\r\n");
    assert!(res.is_err());

    if let Err::Error(error) = res.unwrap_err() {
        assert_eq!(error.code, ErrorKind::Eof)
    } else {
        panic!("Unexpected error")
    }
}

#[test]
fn test_checksum_crlf_non_hex() {
    let res: IResult<_, _> =
        checksum_crlf(ChecksumMode::Required, LineEndingMode::Forbidden).parse("*1z");
    assert!(res.is_err());

    if let Err::Error(error) = res.unwrap_err() {
        assert_eq!(error.code, ErrorKind::IsA)
    } else {
        panic!("Unexpected error")
    }
}

#[test]
fn test_checksum_crlf_with_crlf() {
    let res: IResult<_, _> =
        checksum_crlf(ChecksumMode::Required, LineEndingMode::Forbidden).parse("*12\r\n");
    assert!(res.is_err());

    if let Err::Error(error) = res.unwrap_err() {
        assert_eq!(error.code, ErrorKind::CrLf)
    } else {
        panic!("Unexpected error")
    }
}

#[test]
fn test_checksum_crlf_no_checksum() {
    let res: IResult<_, _> =
        checksum_crlf(ChecksumMode::Required, LineEndingMode::Forbidden).parse("");
    assert!(res.is_err());
}
