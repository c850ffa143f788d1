//! # Field Conversions
//!
//! Conversions from textual NMEA 0183 fields to typed values.
//!
//! Every conversion takes the field as `Option<&str>` (the field may be missing
//! altogether) and returns `None` when the field is absent, empty or malformed.
//! None of them fail loudly: a noisy feed must keep flowing even when a single
//! field is garbage.

use nom::{
    Parser,
    bytes::complete::take,
    character::complete::{char, digit1, hex_digit1, i64, u8},
    combinator::{all_consuming, opt, recognize},
    number::complete::double,
};

type FieldResult<'a, O> = nom::IResult<&'a str, O>;

/// Returns the field when it is present and non-empty.
///
/// ```rust
/// use nmea0183_ais::parsing::string;
///
/// assert_eq!(string(Some("B")), Some("B"));
/// assert_eq!(string(Some("")), None);
/// assert_eq!(string(None), None);
/// ```
pub fn string(field: Option<&str>) -> Option<&str> {
    field.filter(|f| !f.is_empty())
}

/// Parses a signed decimal integer field.
pub fn integer(field: Option<&str>) -> Option<i64> {
    let field = string(field)?;
    all_consuming(i64::<_, nom::error::Error<&str>>)
        .parse(field)
        .ok()
        .map(|(_, value)| value)
}

/// Parses a decimal floating point field.
///
/// Only finite values are accepted.
pub fn float(field: Option<&str>) -> Option<f64> {
    let field = string(field)?;
    all_consuming(double::<_, nom::error::Error<&str>>)
        .parse(field)
        .ok()
        .map(|(_, value)| value)
        .filter(|value| value.is_finite())
}

/// Parses a hexadecimal field (without any `0x` prefix).
///
/// ```rust
/// use nmea0183_ais::parsing::hex_to_integer;
///
/// assert_eq!(hex_to_integer(Some("3E")), Some(0x3e));
/// assert_eq!(hex_to_integer(Some("zz")), None);
/// ```
pub fn hex_to_integer(field: Option<&str>) -> Option<u64> {
    let field = string(field)?;
    let (_, digits) = all_consuming(hex_digit1::<_, nom::error::Error<&str>>)
        .parse(field)
        .ok()?;
    u64::from_str_radix(digits, 16).ok()
}

/// Converts a `DDDMM.MMM` (or `DMM.MMM`) field into decimal degrees.
///
/// The last two digits before the decimal point are whole minutes, everything
/// before them is whole degrees. The result is negated when `hemisphere` is `S`
/// or `W`.
///
/// ```rust
/// use nmea0183_ais::parsing::degrees_minutes_to_decimal;
///
/// let lat = degrees_minutes_to_decimal(Some("4916.45"), Some("N")).unwrap();
/// assert!((lat - 49.274166666666666).abs() < 1e-12);
///
/// let lon = degrees_minutes_to_decimal(Some("12311.12"), Some("W")).unwrap();
/// assert!((lon + 123.18533333333333).abs() < 1e-12);
///
/// assert_eq!(degrees_minutes_to_decimal(Some("16.45"), Some("N")), None);
/// ```
pub fn degrees_minutes_to_decimal(field: Option<&str>, hemisphere: Option<&str>) -> Option<f64> {
    let field = string(field)?;
    let (_, (whole, _, _)) = all_consuming((
        digit1::<_, nom::error::Error<&str>>,
        char('.'),
        digit1,
    ))
    .parse(field)
    .ok()?;

    if whole.len() < 3 {
        return None;
    }

    let (degrees, minutes) = field.split_at(whole.len() - 2);
    let degrees: f64 = degrees.parse().ok()?;
    let minutes: f64 = minutes.parse().ok()?;

    Some(apply_hemisphere(degrees + (minutes / 60.0), hemisphere))
}

/// Converts a `MM.MMM` field into its decimal value.
///
/// The result is negated when `hemisphere` is `S` or `W`.
pub fn minutes_to_decimal(field: Option<&str>, hemisphere: Option<&str>) -> Option<f64> {
    let field = string(field)?;
    let (_, minutes) = all_consuming(recognize((
        digit1::<_, nom::error::Error<&str>>,
        opt((char('.'), digit1)),
    )))
    .parse(field)
    .ok()?;

    let minutes: f64 = minutes.parse().ok()?;
    Some(apply_hemisphere(minutes, hemisphere))
}

/// Converts an `HHMMSS` or `HHMMSS.ss` field into a date-time anchored to `date`.
///
/// Fields only carry a time of day, so the caller supplies the calendar date
/// (usually the reception date of the sentence).
///
/// ```rust
/// use nmea0183_ais::parsing::utc_time_hms;
/// use time::{Date, Month};
///
/// let date = Date::from_calendar_date(2024, Month::March, 1).unwrap();
/// let at = utc_time_hms(Some("225444.50"), date).unwrap();
/// assert_eq!((at.hour(), at.minute(), at.second()), (22, 54, 44));
/// assert_eq!(at.millisecond(), 500);
/// assert_eq!(at.date(), date);
///
/// assert_eq!(utc_time_hms(Some("25444"), date), None);
/// assert_eq!(utc_time_hms(Some("256000"), date), None);
/// ```
pub fn utc_time_hms(field: Option<&str>, date: time::Date) -> Option<time::PrimitiveDateTime> {
    let field = string(field)?;
    let (_, (hour, minute, second)) = all_consuming((two_digits, two_digits, seconds))
        .parse(field)
        .ok()?;

    let whole = second.trunc();
    let nanoseconds = ((second - whole) * 1_000_000_000.0).round() as u32;
    let time_of_day =
        time::Time::from_hms_nano(hour, minute, whole as u8, nanoseconds.min(999_999_999)).ok()?;

    Some(time::PrimitiveDateTime::new(date, time_of_day))
}

fn apply_hemisphere(value: f64, hemisphere: Option<&str>) -> f64 {
    match hemisphere.map(str::to_ascii_uppercase).as_deref() {
        Some("S" | "W") => -value,
        _ => value,
    }
}

fn two_digits(i: &str) -> FieldResult<'_, u8> {
    take(2u8).and_then(all_consuming(u8)).parse(i)
}

fn seconds(i: &str) -> FieldResult<'_, f64> {
    let (i, text) = recognize((take(2u8).and_then(all_consuming(digit1)), opt((char('.'), digit1))))
        .parse(i)?;

    // `text` is digits with an optional fraction, which always parses
    let value = text.parse::<f64>().unwrap_or_default();
    Ok((i, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_and_empty() {
        assert_eq!(integer(None), None);
        assert_eq!(integer(Some("")), None);
        assert_eq!(float(Some("")), None);
        assert_eq!(hex_to_integer(Some("")), None);
        assert_eq!(degrees_minutes_to_decimal(Some(""), Some("N")), None);
        assert_eq!(minutes_to_decimal(None, None), None);
    }

    #[test]
    fn test_integer() {
        assert_eq!(integer(Some("2")), Some(2));
        assert_eq!(integer(Some("-17")), Some(-17));
        assert_eq!(integer(Some("2a")), None);
        assert_eq!(integer(Some("x")), None);
    }

    #[test]
    fn test_float() {
        assert_eq!(float(Some("13.2")), Some(13.2));
        assert_eq!(float(Some("-0.5")), Some(-0.5));
        assert_eq!(float(Some("1.2.3")), None);
        assert_eq!(float(Some("abc")), None);
        assert_eq!(float(Some("nan")), None);
    }

    #[test]
    fn test_hex() {
        assert_eq!(hex_to_integer(Some("ff")), Some(255));
        assert_eq!(hex_to_integer(Some("0A")), Some(10));
        assert_eq!(hex_to_integer(Some("0x0A")), None);
    }

    #[test]
    fn test_degrees_minutes() {
        let cases = [
            ("4404.14012", "N", 44.0 + 4.14012 / 60.0),
            ("12118.85993", "W", -(121.0 + 18.85993 / 60.0)),
            ("12118.85993", "w", -(121.0 + 18.85993 / 60.0)),
            ("0000.000", "S", 0.0),
            ("530.5", "E", 5.0 + 30.5 / 60.0),
        ];

        for (field, hemisphere, expected) in cases {
            let value = degrees_minutes_to_decimal(Some(field), Some(hemisphere));
            assert_eq!(value, Some(expected), "Failed: {field:?} {hemisphere:?}");
        }

        let value = degrees_minutes_to_decimal(Some("4404.14012"), None);
        assert_eq!(value, Some(44.0 + 4.14012 / 60.0));

        for field in ["4404", "44.5", "ab04.1", "4404.", "4404.1x"] {
            let value = degrees_minutes_to_decimal(Some(field), Some("N"));
            assert_eq!(value, None, "Failed: {field:?}");
        }
    }

    #[test]
    fn test_minutes() {
        assert_eq!(minutes_to_decimal(Some("12.5"), Some("N")), Some(12.5));
        assert_eq!(minutes_to_decimal(Some("12.5"), Some("S")), Some(-12.5));
        assert_eq!(minutes_to_decimal(Some("12"), Some("E")), Some(12.0));
        assert_eq!(minutes_to_decimal(Some("12."), Some("E")), None);
        assert_eq!(minutes_to_decimal(Some("-12"), Some("E")), None);
    }

    #[test]
    fn test_utc_time() {
        let date = time::Date::from_calendar_date(2015, time::Month::December, 6).unwrap();

        let at = utc_time_hms(Some("053912"), date).unwrap();
        let expected = time::PrimitiveDateTime::new(date, time::Time::from_hms(5, 39, 12).unwrap());
        assert_eq!(at, expected);

        let at = utc_time_hms(Some("235959.25"), date).unwrap();
        assert_eq!(at.time(), time::Time::from_hms_milli(23, 59, 59, 250).unwrap());

        let invalid = ["", "1234", "123456.", "12345a", "ab3456", "240000", "126000", "123460"];
        for field in invalid {
            assert_eq!(utc_time_hms(Some(field), date), None, "Failed: {field:?}");
        }
    }
}
