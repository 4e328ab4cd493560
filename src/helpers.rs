use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use encoding_rs::Encoding;
use std::io::Read;
use uuid::Uuid;

use crate::error::{DxfError, DxfResult};
use crate::handle::Handle;

// Converts a numeric value to an enum variant, falling back to a named
// default when the value is out of range.
macro_rules! enum_from_number {
    ($enum:ident, $default:ident, $fun:ident, $expr:expr) => {
        match $enum::$fun($expr) {
            Some(v) => v,
            None => $enum::$default,
        }
    };
}

// Pulls the next pair out of a `CodePairBuffer` inside a custom record
// reader; a `0` code (or exhausted input) ends the record.
macro_rules! next_pair {
    ($iter:expr) => {
        match $iter.next() {
            Some(Ok(pair @ CodePair { code: 0, .. })) => {
                $iter.put_back(Ok(pair));
                return Ok(true);
            }
            Some(Ok(pair)) => pair,
            Some(Err(e)) => return Err(e),
            None => return Ok(true),
        }
    };
}

pub(crate) fn as_bool(v: i16) -> bool {
    v != 0
}

pub(crate) fn as_i16(b: bool) -> i16 {
    i16::from(b)
}

pub(crate) fn parse_handle(s: &str, offset: usize) -> DxfResult<Handle> {
    let s = s.trim();
    if s.is_empty() || s.len() > 16 {
        return Err(DxfError::BadPair(offset));
    }
    match u64::from_str_radix(s, 16) {
        Ok(v) => Ok(Handle(v)),
        Err(_) => Err(DxfError::BadPair(offset)),
    }
}

pub(crate) fn parse_f64(s: &str, offset: usize) -> DxfResult<f64> {
    match s.trim().parse::<f64>() {
        Ok(v) => Ok(v),
        Err(e) => Err(DxfError::ParseFloatError(e, offset)),
    }
}

pub(crate) fn parse_i16(s: &str, offset: usize) -> DxfResult<i16> {
    match s.trim().parse::<i16>() {
        Ok(v) => Ok(v),
        Err(e) => Err(DxfError::ParseIntError(e, offset)),
    }
}

pub(crate) fn parse_i32(s: &str, offset: usize) -> DxfResult<i32> {
    match s.trim().parse::<i32>() {
        Ok(v) => Ok(v),
        Err(e) => Err(DxfError::ParseIntError(e, offset)),
    }
}

pub(crate) fn parse_i64(s: &str, offset: usize) -> DxfResult<i64> {
    match s.trim().parse::<i64>() {
        Ok(v) => Ok(v),
        Err(e) => Err(DxfError::ParseIntError(e, offset)),
    }
}

/// Parses a run of hex digit pairs into `bytes`.
pub(crate) fn parse_hex_string(data: &str, bytes: &mut Vec<u8>, offset: usize) -> DxfResult<()> {
    let data = data.trim();
    if data.len() % 2 != 0 {
        return Err(DxfError::BadPair(offset));
    }
    for chunk in data.as_bytes().chunks(2) {
        let text = std::str::from_utf8(chunk).map_err(|_| DxfError::BadPair(offset))?;
        let byte = u8::from_str_radix(text, 16).map_err(|_| DxfError::BadPair(offset))?;
        bytes.push(byte);
    }

    Ok(())
}

pub(crate) fn as_uuid(s: &str, offset: usize) -> DxfResult<Uuid> {
    match Uuid::parse_str(s.trim().trim_start_matches('{').trim_end_matches('}')) {
        Ok(uuid) => Ok(uuid),
        Err(_) => Err(DxfError::BadPair(offset)),
    }
}

pub(crate) fn uuid_string(u: &Uuid) -> String {
    format!("{{{}}}", u.to_string().to_uppercase())
}

fn f64_to_adjusted_duration(f: f64) -> Duration {
    // dates are fractional Julian days; 2415020.0 is December 31, 1899 12:00AM
    let days_since_dublin = f - 2_415_020.0;
    let seconds = days_since_dublin * 24.0 * 60.0 * 60.0;
    // consumers use 1900/01/01 as the epoch, so counter the extra day and
    // leap second here
    Duration::seconds(seconds as i64) - Duration::days(1) + Duration::seconds(1)
}

pub(crate) fn as_datetime_local(date: f64) -> DateTime<Local> {
    let epoch = Local.with_ymd_and_hms(1900, 1, 1, 0, 0, 0).unwrap();
    if date == 0.0 {
        epoch
    } else {
        epoch + f64_to_adjusted_duration(date)
    }
}

pub(crate) fn as_datetime_utc(date: f64) -> DateTime<Utc> {
    let epoch = Utc.with_ymd_and_hms(1900, 1, 1, 0, 0, 0).unwrap();
    if date == 0.0 {
        epoch
    } else {
        epoch + f64_to_adjusted_duration(date)
    }
}

pub(crate) fn as_double_local(date: DateTime<Local>) -> f64 {
    let epoch = Local.with_ymd_and_hms(1900, 1, 1, 0, 0, 0).unwrap();
    if date == epoch {
        // the inverse of the 0.0 shorthand accepted on read
        return 0.0;
    }
    let duration = date - epoch;
    (duration.num_seconds() as f64 / 24.0 / 60.0 / 60.0) + 2_415_021f64
}

pub(crate) fn as_double_utc(date: DateTime<Utc>) -> f64 {
    let epoch = Utc.with_ymd_and_hms(1900, 1, 1, 0, 0, 0).unwrap();
    if date == epoch {
        return 0.0;
    }
    let duration = date - epoch;
    (duration.num_seconds() as f64 / 24.0 / 60.0 / 60.0) + 2_415_021f64
}

pub(crate) fn as_duration(d: f64) -> Duration {
    Duration::seconds(d as i64)
}

pub(crate) fn duration_as_double(duration: Duration) -> f64 {
    duration.num_seconds() as f64
}

pub(crate) fn default_if_empty(val: &mut String, default: &str) {
    if val.is_empty() {
        *val = String::from(default);
    }
}

pub(crate) fn ensure_positive_or_default(val: &mut f64, default: f64) {
    if *val <= 0.0 {
        *val = default;
    }
}

pub(crate) fn ensure_positive_or_default_i16(val: &mut i16, default: i16) {
    if *val <= 0 {
        *val = default;
    }
}

pub(crate) fn ensure_positive_or_default_i32(val: &mut i32, default: i32) {
    if *val <= 0 {
        *val = default;
    }
}

pub(crate) fn get_writable_linetype_name(val: &str) -> &str {
    if val.is_empty() {
        "CONTINUOUS"
    } else {
        val
    }
}

/// Reads one text line from the byte stream, decoding with `encoding`.
/// Returns `None` at end of input; a trailing `\r` is stripped.
pub(crate) fn read_line<T>(reader: &mut T, encoding: &'static Encoding) -> Option<DxfResult<String>>
where
    T: Read + ?Sized,
{
    let mut bytes = vec![];
    let mut saw_any = false;
    loop {
        let mut buf = [0u8; 1];
        match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(_) => {
                saw_any = true;
                if buf[0] == b'\n' {
                    break;
                }
                bytes.push(buf[0]);
            }
            Err(e) => return Some(Err(DxfError::IoError(e))),
        }
    }

    if !saw_any {
        return None;
    }
    if bytes.last() == Some(&b'\r') {
        bytes.pop();
    }

    let (decoded, _, _) = encoding.decode(&bytes);
    Some(Ok(decoded.into_owned()))
}

/// Recombines the x/y coordinate lists a reader accumulated into points.
pub(crate) fn combine_points_2<P, F>(xs: &mut Vec<f64>, ys: &mut Vec<f64>, result: &mut Vec<P>, comb: F)
where
    F: Fn(f64, f64, f64) -> P,
{
    for (x, y) in xs.iter().zip(ys.iter()) {
        result.push(comb(*x, *y, 0.0));
    }
    xs.clear();
    ys.clear();
}

/// Recombines the x/y/z coordinate lists a reader accumulated into points.
pub(crate) fn combine_points_3<P, F>(
    xs: &mut Vec<f64>,
    ys: &mut Vec<f64>,
    zs: &mut Vec<f64>,
    result: &mut Vec<P>,
    comb: F,
) where
    F: Fn(f64, f64, f64) -> P,
{
    for ((x, y), z) in xs.iter().zip(ys.iter()).zip(zs.iter()) {
        result.push(comb(*x, *y, *z));
    }
    xs.clear();
    ys.clear();
    zs.clear();
}

#[cfg(test)]
#[allow(dead_code)]
pub(crate) mod tests {
    use super::*;
    use crate::code_pair_writer::CodePairWriter;
    use crate::{CodePair, Drawing};

    pub fn unwrap_drawing(result: DxfResult<Drawing>) -> Drawing {
        match result {
            Ok(drawing) => drawing,
            Err(e) => panic!("unable to load drawing: {}", e),
        }
    }

    pub fn parse_drawing(s: &str) -> Drawing {
        unwrap_drawing(Drawing::parse(s))
    }

    pub fn pairs_to_string(pairs: &[CodePair]) -> String {
        let mut buf = Vec::new();
        {
            let mut writer = CodePairWriter::new(&mut buf, true);
            for pair in pairs {
                writer.write_code_pair(pair).unwrap();
            }
        }
        let mut s = String::from_utf8(buf).unwrap();
        // drop the trailing CRLF so the result composes with `contains`
        s.truncate(s.len().saturating_sub(2));
        s
    }

    pub fn drawing_from_pairs(pairs: Vec<CodePair>) -> Drawing {
        parse_drawing(&pairs_to_string(&pairs))
    }

    pub fn to_test_string(drawing: &Drawing) -> String {
        let mut buf = Vec::new();
        drawing.save(&mut buf).unwrap();
        let contents = String::from_utf8(buf).unwrap();
        println!("{}", contents); // only displayed when the test fails
        contents
    }

    pub fn assert_contains(drawing: &Drawing, contents: String) {
        let actual = to_test_string(drawing);
        assert!(actual.contains(&contents), "missing:\n{}", contents);
    }

    pub fn assert_not_contains(drawing: &Drawing, contents: String) {
        let actual = to_test_string(drawing);
        assert!(!actual.contains(&contents), "unexpectedly present:\n{}", contents);
    }

    pub fn assert_contains_pairs(drawing: &Drawing, pairs: Vec<CodePair>) {
        assert_contains(drawing, pairs_to_string(&pairs));
    }

    pub fn assert_not_contains_pairs(drawing: &Drawing, pairs: Vec<CodePair>) {
        assert_not_contains(drawing, pairs_to_string(&pairs));
    }

    #[test]
    fn hex_handles_parse() {
        assert_eq!(Handle(0xABCD), parse_handle("abcd", 0).unwrap());
        assert_eq!(Handle(0xABCD), parse_handle("ABCD", 0).unwrap());
        assert!(parse_handle("xyz", 0).is_err());
        assert!(parse_handle("11112222333344445", 0).is_err()); // 17 digits
    }

    #[test]
    fn hex_strings_parse_to_bytes() {
        let mut bytes = vec![];
        parse_hex_string("012345", &mut bytes, 0).unwrap();
        assert_eq!(vec![0x01, 0x23, 0x45], bytes);
    }

    #[test]
    fn julian_dates_round_trip() {
        let date = as_datetime_utc(2_451_544.91568287);
        assert_eq!(1999, chrono::Datelike::year(&date));
        let raw = as_double_utc(date);
        assert!((raw - 2_451_544.91568287).abs() < 1e-4);
    }

    #[test]
    fn read_line_handles_crlf_and_lf() {
        let mut input = "one\r\ntwo\nthree".as_bytes();
        let enc = encoding_rs::WINDOWS_1252;
        assert_eq!("one", read_line(&mut input, enc).unwrap().unwrap());
        assert_eq!("two", read_line(&mut input, enc).unwrap().unwrap());
        assert_eq!("three", read_line(&mut input, enc).unwrap().unwrap());
        assert!(read_line(&mut input, enc).is_none());
    }
}
