/// Pattern compilation errors. Matching itself never fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Backslash as the final character of the pattern.
    #[error("bad escape (end of pattern) at position {position}")]
    BadEscape { position: usize },

    /// `\x` or `\X` not followed by two hex digits.
    #[error("invalid hexadecimal literal escape at position {position}")]
    InvalidHexEscape { position: usize },

    /// Quantifier with no atom in front of it.
    #[error("nothing to repeat at position {position}")]
    NothingToRepeat { position: usize },

    /// API misuse, such as passing flags with an already compiled pattern.
    #[error("usage error: {0}")]
    Usage(String),
}

pub type Result<T> = std::result::Result<T, Error>;
