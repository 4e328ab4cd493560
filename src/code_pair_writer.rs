use std::io::Write;

use crate::code_pair_value::CodePairValue;
use crate::error::DxfResult;
use crate::{CodePair, Point, Vector};

/// Serialises code pairs back to the classic two-line text framing.
///
/// Codes are right-justified to three columns and lines end with CRLF.
/// String values have control characters `^`-escaped, and when the target
/// version predates R2007 non-ASCII characters are written as `\U+XXXX`
/// sequences so the output stays ASCII-safe.
pub(crate) struct CodePairWriter<T: Write> {
    writer: T,
    text_as_ascii: bool,
}

impl<T: Write> CodePairWriter<T> {
    pub fn new(writer: T, text_as_ascii: bool) -> Self {
        CodePairWriter {
            writer,
            text_as_ascii,
        }
    }
    pub fn write_code_pair(&mut self, pair: &CodePair) -> DxfResult<()> {
        self.writer.write_fmt(format_args!("{: >3}\r\n", pair.code))?;
        match pair.value {
            CodePairValue::Str(ref s) => {
                let s = CodePairValue::escape_string(s);
                let s = if self.text_as_ascii {
                    CodePairValue::escape_unicode_to_ascii(&s).into_owned()
                } else {
                    s.into_owned()
                };
                self.writer.write_fmt(format_args!("{}\r\n", s))?;
            }
            ref value => self.writer.write_fmt(format_args!("{:?}\r\n", value))?,
        }

        Ok(())
    }
    /// Writes a point as an x/y/z code triple starting at `base`.
    pub fn write_point(&mut self, base: i32, point: &Point) -> DxfResult<()> {
        self.write_code_pair(&CodePair::new_f64(base, point.x))?;
        self.write_code_pair(&CodePair::new_f64(base + 10, point.y))?;
        self.write_code_pair(&CodePair::new_f64(base + 20, point.z))?;
        Ok(())
    }
    /// Writes a point with no z component, e.g. drawing limits.
    pub fn write_point_2d(&mut self, base: i32, point: &Point) -> DxfResult<()> {
        self.write_code_pair(&CodePair::new_f64(base, point.x))?;
        self.write_code_pair(&CodePair::new_f64(base + 10, point.y))?;
        Ok(())
    }
    /// Writes a vector as an x/y/z code triple starting at `base`.
    pub fn write_vector(&mut self, base: i32, vector: &Vector) -> DxfResult<()> {
        self.write_code_pair(&CodePair::new_f64(base, vector.x))?;
        self.write_code_pair(&CodePair::new_f64(base + 10, vector.y))?;
        self.write_code_pair(&CodePair::new_f64(base + 20, vector.z))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_single(pair: CodePair, text_as_ascii: bool) -> String {
        let mut buf = Vec::new();
        {
            let mut writer = CodePairWriter::new(&mut buf, text_as_ascii);
            writer.write_code_pair(&pair).unwrap();
        }
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn codes_are_right_justified() {
        assert_eq!("  0\r\nSECTION\r\n", write_single(CodePair::new_str(0, "SECTION"), false));
        assert_eq!(" 62\r\n     3\r\n", write_single(CodePair::new_i16(62, 3), false));
        assert_eq!("330\r\nAB\r\n", write_single(CodePair::new_str(330, "AB"), false));
    }

    #[test]
    fn doubles_keep_a_trailing_digit() {
        assert_eq!(" 10\r\n11.0\r\n", write_single(CodePair::new_f64(10, 11.0), false));
    }

    #[test]
    fn unicode_is_escaped_only_for_ascii_targets() {
        assert_eq!(
            "  1\r\nRep\\U+00E8re\r\n",
            write_single(CodePair::new_str(1, "Repère"), true)
        );
        assert_eq!(
            "  1\r\nRepère\r\n",
            write_single(CodePair::new_str(1, "Repère"), false)
        );
    }
}
