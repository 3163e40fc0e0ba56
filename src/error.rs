use core::fmt;

/// Errors returned by the public big integer operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// Growing limb storage or scratch memory failed.
    OutOfMemory,
    /// Parse input contains something other than `0..=9`.
    InvalidDigit {
        /// Byte offset of the offending character.
        position: usize,
        found: char,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OutOfMemory => write!(f, "out of memory"),
            Error::InvalidDigit { position, found } => {
                write!(f, "invalid digit {found:?} at position {position}")
            }
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = core::result::Result<T, Error>;
