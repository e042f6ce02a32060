use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A tree needs at least one coordinate.
    EmptyCoordinates,
    /// The key was not declared when the tree was built.
    KeyNotFound { key: i64 },
    LengthMismatch { keys: usize, weights: usize },
    NegativeWeight { index: usize, weight: i64 },
    /// A running total left the `i64` range at `index`.
    Overflow { index: usize },
    /// Malformed driver input; `line` is 1-based.
    Parse { line: usize, message: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCoordinates => write!(f, "cannot build a tree over an empty coordinate set"),
            Self::KeyNotFound { key } => {
                write!(f, "key {} is not part of the tree's coordinate set", key)
            }
            Self::LengthMismatch { keys, weights } => write!(
                f,
                "got {} keys but {} weights; the sequences must pair up",
                keys, weights
            ),
            Self::NegativeWeight { index, weight } => {
                write!(f, "weight {} at index {} is negative", weight, index)
            }
            Self::Overflow { index } => write!(f, "total weight overflows i64 at index {}", index),
            Self::Parse { line, message } => write!(f, "line {}: {}", line, message),
        }
    }
}

impl std::error::Error for Error {}
