use encoding_rs::Encoding;
use std::io::Read;

use crate::code_pair_value::CodePairValue;
use crate::error::{DxfError, DxfResult};
use crate::expected_type::ExpectedType;
use crate::helpers::{parse_f64, parse_i16, parse_i32, parse_i64, read_line};
use crate::CodePair;

/// Tokenises a text byte stream into code pairs.
///
/// Two physical framings are accepted: the classic two-line form (code on
/// one line, value on the next) and the compact single-line
/// `code<TAB>value` form some writers emit.  Only the classic form is ever
/// written.  `999` comment pairs are swallowed here and never surface to
/// the decoders.
pub(crate) struct CodePairReader<T: Read> {
    reader: T,
    string_encoding: &'static Encoding,
    read_first_line: bool,
    offset: usize,
}

impl<T: Read> CodePairReader<T> {
    pub fn new(reader: T, string_encoding: &'static Encoding) -> Self {
        CodePairReader {
            reader,
            string_encoding,
            read_first_line: false,
            offset: 0,
        }
    }
    /// Switches the remainder of the stream to UTF-8; used once the header
    /// declares a version of R2007 or newer.
    pub fn read_as_utf8(&mut self) {
        self.string_encoding = encoding_rs::UTF_8;
    }
    /// Switches the remainder of the stream to the given encoding; used
    /// when `$DWGCODEPAGE` names a code page.
    pub fn set_encoding(&mut self, encoding: &'static Encoding) {
        self.string_encoding = encoding;
    }
    fn read_code_pair(&mut self) -> Option<DxfResult<CodePair>> {
        // read the code line; no line available means a clean end of input
        let code_line = match read_line(&mut self.reader, encoding_rs::WINDOWS_1252) {
            Some(Ok(line)) => line,
            Some(Err(e)) => return Some(Err(e)),
            None => return None,
        };
        self.offset += 1;
        let code_line = if !self.read_first_line {
            self.read_first_line = true;
            self.strip_byte_order_mark(code_line)
        } else {
            code_line
        };

        // compact framing: the whole pair lives on this line
        if let Some(tab) = code_line.find('\t') {
            let (code_text, value_text) = code_line.split_at(tab);
            let code = match parse_code(code_text, self.offset) {
                Ok(c) => c,
                Err(e) => return Some(Err(e)),
            };
            return Some(self.make_pair(code, value_text[1..].to_string(), self.offset));
        }

        let code_text = code_line.trim();
        if code_text.is_empty() {
            // might be a file ending with an empty line
            return None;
        }

        let code_offset = self.offset;
        let code = match parse_code(code_text, code_offset) {
            Ok(c) => c,
            Err(e) => return Some(Err(e)),
        };

        // read the value line; ending here means the pair is incomplete
        let value_line = match read_line(&mut self.reader, self.string_encoding) {
            Some(Ok(line)) => line,
            Some(Err(e)) => return Some(Err(e)),
            None => return Some(Err(DxfError::UnexpectedEndOfInput)),
        };
        self.offset += 1;

        Some(self.make_pair(code, value_line, code_offset))
    }
    fn make_pair(&self, code: i32, value_line: String, offset: usize) -> DxfResult<CodePair> {
        let expected_type = match ExpectedType::from_code(code) {
            Some(t) => t,
            None => return Err(DxfError::UnexpectedCode(code, offset)),
        };
        let value = match expected_type {
            ExpectedType::Boolean => CodePairValue::Boolean(parse_i16(&value_line, offset)?),
            ExpectedType::Integer => CodePairValue::Integer(parse_i32(&value_line, offset)?),
            ExpectedType::Long => CodePairValue::Long(parse_i64(&value_line, offset)?),
            ExpectedType::Short => CodePairValue::Short(parse_i16(&value_line, offset)?),
            ExpectedType::Double => CodePairValue::Double(parse_f64(&value_line, offset)?),
            ExpectedType::Str => {
                let value_line = if self.string_encoding != encoding_rs::UTF_8 {
                    CodePairValue::un_escape_ascii_to_unicode(&value_line).into_owned()
                } else {
                    value_line
                };
                let value_line = CodePairValue::un_escape_string(&value_line);
                CodePairValue::Str(value_line.into_owned())
            }
        };

        Ok(CodePair::new(code, value, offset))
    }
    fn strip_byte_order_mark(&mut self, line: String) -> String {
        // already decoded as UTF-8
        if let Some(rest) = line.strip_prefix('\u{FEFF}') {
            self.read_as_utf8();
            return rest.to_string();
        }
        // the UTF-8 BOM bytes decoded as WINDOWS_1252
        if let Some(rest) = line.strip_prefix("\u{00EF}\u{00BB}\u{00BF}") {
            self.read_as_utf8();
            return rest.to_string();
        }

        line
    }
}

fn parse_code(text: &str, offset: usize) -> DxfResult<i32> {
    match text.trim().parse::<i32>() {
        Ok(c) => Ok(c),
        Err(_) => Err(DxfError::BadPair(offset)),
    }
}

impl<T: Read> Iterator for CodePairReader<T> {
    type Item = DxfResult<CodePair>;
    fn next(&mut self) -> Option<DxfResult<CodePair>> {
        loop {
            match self.read_code_pair() {
                Some(Ok(CodePair { code: 999, .. })) => (), // comment, try again
                pair => return pair,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_all(content: &str) -> Vec<CodePair> {
        let reader = CodePairReader::new(content.as_bytes(), encoding_rs::WINDOWS_1252);
        reader.map(|p| p.unwrap()).collect()
    }

    #[test]
    fn classic_framing() {
        let pairs = read_all("  0\r\nSECTION\r\n 10\r\n1.5\r\n");
        assert_eq!(
            vec![CodePair::new_str(0, "SECTION"), CodePair::new_f64(10, 1.5)],
            pairs
        );
    }

    #[test]
    fn compact_tab_framing() {
        let pairs = read_all("0\tSECTION\n10\t1.5\n");
        assert_eq!(
            vec![CodePair::new_str(0, "SECTION"), CodePair::new_f64(10, 1.5)],
            pairs
        );
    }

    #[test]
    fn comments_are_swallowed() {
        let pairs = read_all("999\nsome comment\n0\nEOF\n");
        assert_eq!(vec![CodePair::new_str(0, "EOF")], pairs);
    }

    #[test]
    fn offsets_count_lines() {
        let reader = CodePairReader::new(
            "0\nSECTION\n10\n1.5\n".as_bytes(),
            encoding_rs::WINDOWS_1252,
        );
        let pairs = reader.map(|p| p.unwrap()).collect::<Vec<_>>();
        assert_eq!(1, pairs[0].offset);
        assert_eq!(3, pairs[1].offset);
    }

    #[test]
    fn bad_code_line_is_an_error() {
        let mut reader =
            CodePairReader::new("not-a-code\nvalue\n".as_bytes(), encoding_rs::WINDOWS_1252);
        assert!(matches!(
            reader.next(),
            Some(Err(DxfError::BadPair(1)))
        ));
    }

    #[test]
    fn eof_mid_pair_is_an_error() {
        let mut reader = CodePairReader::new("0".as_bytes(), encoding_rs::WINDOWS_1252);
        assert!(matches!(
            reader.next(),
            Some(Err(DxfError::UnexpectedEndOfInput))
        ));
    }

    #[test]
    fn out_of_range_code_is_an_error() {
        let mut reader = CodePairReader::new("5555\nx\n".as_bytes(), encoding_rs::WINDOWS_1252);
        assert!(matches!(
            reader.next(),
            Some(Err(DxfError::UnexpectedCode(5555, 1)))
        ));
    }

    #[test]
    fn trailing_empty_line_is_tolerated() {
        let pairs = read_all("0\nEOF\n\n");
        assert_eq!(vec![CodePair::new_str(0, "EOF")], pairs);
    }
}
