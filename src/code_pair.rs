use std::fmt;
use std::fmt::{Debug, Formatter};

use crate::error::{DxfError, DxfResult};
use crate::handle::Handle;
use crate::helpers::parse_handle;
use crate::CodePairValue;

/// The atomic unit of a DXF file: a group code describing the role of the
/// value that follows, and the value itself.  `offset` is the 1-based line
/// on which the pair started and is carried into errors.
#[derive(Clone)]
pub struct CodePair {
    pub code: i32,
    pub value: CodePairValue,
    pub offset: usize,
}

impl CodePair {
    pub fn new(code: i32, value: CodePairValue, offset: usize) -> Self {
        CodePair {
            code,
            value,
            offset,
        }
    }
    pub fn new_str(code: i32, val: &str) -> Self {
        CodePair::new(code, CodePairValue::Str(val.to_string()), 0)
    }
    pub fn new_string(code: i32, val: &str) -> Self {
        CodePair::new(code, CodePairValue::Str(val.to_string()), 0)
    }
    pub fn new_i16(code: i32, val: i16) -> Self {
        CodePair::new(code, CodePairValue::Short(val), 0)
    }
    pub fn new_f64(code: i32, val: f64) -> Self {
        CodePair::new(code, CodePairValue::Double(val), 0)
    }
    pub fn new_i64(code: i32, val: i64) -> Self {
        CodePair::new(code, CodePairValue::Long(val), 0)
    }
    pub fn new_i32(code: i32, val: i32) -> Self {
        CodePair::new(code, CodePairValue::Integer(val), 0)
    }
    pub fn new_bool(code: i32, val: bool) -> Self {
        CodePair::new(code, CodePairValue::Boolean(i16::from(val)), 0)
    }
    pub fn assert_bool(&self) -> DxfResult<bool> {
        match self.value {
            CodePairValue::Boolean(b) => Ok(b != 0),
            CodePairValue::Short(s) => Ok(s != 0),
            _ => Err(DxfError::WrongValueType(self.offset)),
        }
    }
    pub fn assert_i64(&self) -> DxfResult<i64> {
        match self.value {
            CodePairValue::Long(l) => Ok(l),
            CodePairValue::Integer(i) => Ok(i64::from(i)),
            CodePairValue::Short(s) => Ok(i64::from(s)),
            _ => Err(DxfError::WrongValueType(self.offset)),
        }
    }
    pub fn assert_i32(&self) -> DxfResult<i32> {
        match self.value {
            CodePairValue::Integer(i) => Ok(i),
            CodePairValue::Short(s) => Ok(i32::from(s)),
            _ => Err(DxfError::WrongValueType(self.offset)),
        }
    }
    pub fn assert_i16(&self) -> DxfResult<i16> {
        match self.value {
            CodePairValue::Boolean(b) => Ok(b),
            CodePairValue::Short(s) => Ok(s),
            _ => Err(DxfError::WrongValueType(self.offset)),
        }
    }
    pub fn assert_f64(&self) -> DxfResult<f64> {
        match self.value {
            CodePairValue::Double(d) => Ok(d),
            _ => Err(DxfError::WrongValueType(self.offset)),
        }
    }
    pub fn assert_string(&self) -> DxfResult<String> {
        match self.value {
            CodePairValue::Str(ref s) => Ok(s.clone()),
            _ => Err(DxfError::WrongValueType(self.offset)),
        }
    }
    pub fn as_handle(&self) -> DxfResult<Handle> {
        parse_handle(&self.assert_string()?, self.offset)
    }
}

impl Debug for CodePair {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{}/{:?}", self.code, &self.value)
    }
}

impl PartialEq for CodePair {
    // the offset doesn't contribute to equality; it's purely diagnostic
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code && self.value == other.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_ignores_offset() {
        let a = CodePair::new(10, CodePairValue::Double(1.5), 3);
        let b = CodePair::new(10, CodePairValue::Double(1.5), 40);
        assert_eq!(a, b);
    }

    #[test]
    fn handles_parse_as_hex() {
        let pair = CodePair::new_str(5, "ABCD");
        assert_eq!(Handle(0xABCD), pair.as_handle().unwrap());
    }

    #[test]
    fn wrong_value_type_is_an_error() {
        let pair = CodePair::new_str(1, "not-a-double");
        assert!(pair.assert_f64().is_err());
    }
}
