/// Errors that can occur when operating on a ChainMap or a Chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The requested key was not found in the map.
    KeyNotFound,
    /// No element in the chain matched the given predicate.
    NoSuchEntry,
    /// The chain index was past the end of the chain.
    IndexOutOfBounds,
    /// The requested bucket capacity is invalid (must be greater than 0).
    InvalidCapacity,
    /// A load factor was requested against a zero-capacity table.
    ZeroDivision,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::KeyNotFound => write!(f, "key not found"),
            Error::NoSuchEntry => write!(f, "no matching entry in chain"),
            Error::IndexOutOfBounds => write!(f, "chain index out of bounds"),
            Error::InvalidCapacity => write!(f, "capacity must be greater than 0"),
            Error::ZeroDivision => write!(f, "load factor is undefined for zero capacity"),
        }
    }
}

impl std::error::Error for Error {}
