use bitflags::bitflags;

bitflags! {
    /// Compile flags. The bit values are fixed and shared with the
    /// classic `re` flag numbering.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Flags: u32 {
        /// Case-insensitive literal comparison.
        const IGNORECASE = 2;
        /// Recognized, no effect on matching.
        const MULTILINE = 8;
        /// `.` also matches `'\n'`.
        const DOTALL = 16;
        /// Recognized, no effect on matching.
        const VERBOSE = 64;
        /// Dump the compiled nodes and trace every match call.
        const DEBUG = 128;
    }
}

impl Flags {
    pub const I: Flags = Flags::IGNORECASE;
    pub const M: Flags = Flags::MULTILINE;
    pub const S: Flags = Flags::DOTALL;
    pub const X: Flags = Flags::VERBOSE;

    /// Looks up a flag by its long name or one-letter alias.
    pub fn lookup(name: &str) -> Option<Flags> {
        match name {
            "I" => Some(Flags::I),
            "M" => Some(Flags::M),
            "S" => Some(Flags::S),
            "X" => Some(Flags::X),
            _ => Flags::from_name(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_values() {
        assert_eq!(Flags::IGNORECASE.bits(), 2);
        assert_eq!(Flags::MULTILINE.bits(), 8);
        assert_eq!(Flags::DOTALL.bits(), 16);
        assert_eq!(Flags::VERBOSE.bits(), 64);
        assert_eq!(Flags::DEBUG.bits(), 128);
    }

    #[test]
    fn lookup_names_and_aliases() {
        assert_eq!(Flags::lookup("IGNORECASE"), Some(Flags::IGNORECASE));
        assert_eq!(Flags::lookup("I"), Some(Flags::IGNORECASE));
        assert_eq!(Flags::lookup("S"), Some(Flags::DOTALL));
        assert_eq!(Flags::lookup("DEBUG"), Some(Flags::DEBUG));
        assert_eq!(Flags::lookup("LOCALE"), None);
    }

    #[test]
    fn default_is_empty() {
        assert_eq!(Flags::default(), Flags::empty());
    }

    #[test]
    fn unknown_bits_are_dropped() {
        assert_eq!(Flags::from_bits_truncate(2 | 4 | 256), Flags::IGNORECASE);
    }
}
