use std::error;
use std::fmt;
use std::result;

/// Convenience `Error` enum for the tree maps.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// A checked lookup was made with a key that is not in the map.
    KeyNotFound,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::KeyNotFound => write!(f, "key does not exist"),
        }
    }
}

/// Convenience `Result` type for the tree maps.
pub type Result<T> = result::Result<T, Error>;
