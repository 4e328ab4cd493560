/// A record identifier, unique within a drawing when non-zero.
///
/// Handles are written as upper-case hex strings of up to 16 digits; the
/// value `0` means "unassigned".  Records refer to each other by handle
/// value only, never by pointer.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Handle(pub u64);

impl Handle {
    pub fn empty() -> Self {
        Handle(0)
    }
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
    pub fn next_handle_value(self) -> Self {
        Handle(self.0 + 1)
    }
    pub fn as_string(self) -> String {
        format!("{:X}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Handle;

    #[test]
    fn handles_format_as_upper_hex() {
        assert_eq!("0", Handle::empty().as_string());
        assert_eq!("DEADBEEF", Handle(0xDEAD_BEEF).as_string());
    }
}
