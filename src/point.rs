use crate::error::{DxfError, DxfResult};
use crate::CodePair;

/// A point in Cartesian space, read from a 10/20/30 code triple.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    pub fn new(x: f64, y: f64, z: f64) -> Point {
        Point { x, y, z }
    }
    /// The origin, (0, 0, 0).
    pub fn origin() -> Point {
        Point::new(0.0, 0.0, 0.0)
    }
    pub(crate) fn set(&mut self, pair: &CodePair) -> DxfResult<()> {
        match pair.code % 100 {
            10..=19 => self.x = pair.assert_f64()?,
            20..=29 => self.y = pair.assert_f64()?,
            30..=39 => self.z = pair.assert_f64()?,
            _ => {
                return Err(DxfError::UnexpectedCodePair(
                    pair.clone(),
                    String::from("expected a point coordinate code"),
                ))
            }
        }

        Ok(())
    }
}
