/// A line weight as stored on code 370.
///
/// Positive values are hundredths of a millimeter; the negative values are
/// the BYLAYER/BYBLOCK/DEFAULT sentinels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineWeight {
    raw_value: i16,
}

impl LineWeight {
    pub(crate) fn from_raw_value(v: i16) -> LineWeight {
        LineWeight { raw_value: v }
    }
    /// A line weight that defers to the containing block's line weight.
    pub fn by_block() -> LineWeight {
        LineWeight::from_raw_value(-2)
    }
    /// A line weight that defers to the record's layer's line weight.
    pub fn by_layer() -> LineWeight {
        LineWeight::from_raw_value(-1)
    }
    /// The application default line weight.
    pub fn standard() -> LineWeight {
        LineWeight::from_raw_value(-3)
    }
    pub fn raw_value(&self) -> i16 {
        self.raw_value
    }
    pub fn is_by_block(&self) -> bool {
        self.raw_value == -2
    }
    pub fn is_by_layer(&self) -> bool {
        self.raw_value == -1
    }
}

impl Default for LineWeight {
    fn default() -> Self {
        LineWeight::by_layer()
    }
}
