use std::error;
use std::fmt;
use std::io;
use std::num;

use crate::CodePair;

/// The result type used throughout the crate.
pub type DxfResult<T> = Result<T, DxfError>;

/// The errors that can occur while reading or writing a DXF file.
///
/// Offsets are 1-based line numbers into the input stream.  Grammatical
/// errors are fatal for the current parse; unknown record kinds, unknown
/// header variables, unknown codes within known records and unknown
/// sections are tolerated without error.
#[derive(Debug)]
pub enum DxfError {
    IoError(io::Error),
    ImageError(image::ImageError),
    ParseFloatError(num::ParseFloatError, usize),
    ParseIntError(num::ParseIntError, usize),
    /// A pair was syntactically malformed, e.g. a code line that is not an
    /// integer or a handle that is not hexadecimal.
    BadPair(usize),
    /// A code outside every known group-code range, or a code forbidden in
    /// the current parser state.
    UnexpectedCode(i32, usize),
    UnexpectedCodePair(CodePair, String),
    /// The stream ended inside a section, entity, or block.
    UnexpectedEndOfInput,
    /// The `$ACADVER` value was not recognized.
    UnknownVersion(String),
    /// A structural rule of the format was broken, e.g. a `BLOCK` with no
    /// matching `ENDBLK`.
    InvariantViolation(String),
    /// A typed accessor was called on a value of a different family.
    WrongValueType(usize),
}

impl From<io::Error> for DxfError {
    fn from(e: io::Error) -> DxfError {
        DxfError::IoError(e)
    }
}

impl From<image::ImageError> for DxfError {
    fn from(e: image::ImageError) -> DxfError {
        DxfError::ImageError(e)
    }
}

impl fmt::Display for DxfError {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DxfError::IoError(e) => write!(formatter, "{}", e),
            DxfError::ImageError(e) => write!(formatter, "{}", e),
            DxfError::ParseFloatError(e, o) => write!(formatter, "{} at line {}", e, o),
            DxfError::ParseIntError(e, o) => write!(formatter, "{} at line {}", e, o),
            DxfError::BadPair(o) => {
                write!(formatter, "the code pair at line {} is malformed", o)
            }
            DxfError::UnexpectedCode(c, o) => {
                write!(formatter, "the code {} was not expected at line {}", c, o)
            }
            DxfError::UnexpectedCodePair(p, s) => write!(
                formatter,
                "the pair '{:?}' at line {} was not expected: {}",
                p, p.offset, s
            ),
            DxfError::UnexpectedEndOfInput => write!(
                formatter,
                "the input ended before the drawing was completely loaded"
            ),
            DxfError::UnknownVersion(v) => {
                write!(formatter, "the drawing version '{}' is not supported", v)
            }
            DxfError::InvariantViolation(s) => write!(formatter, "{}", s),
            DxfError::WrongValueType(o) => write!(
                formatter,
                "the value at line {} does not contain the requested type",
                o
            ),
        }
    }
}

impl error::Error for DxfError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            DxfError::IoError(e) => Some(e),
            DxfError::ImageError(e) => Some(e),
            DxfError::ParseFloatError(e, _) => Some(e),
            DxfError::ParseIntError(e, _) => Some(e),
            _ => None,
        }
    }
}
