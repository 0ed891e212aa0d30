use core::fmt;

/// Errors returned by position/index queries and height reports.
///
/// Scroll operations never return these: they clamp instead.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Error {
    /// A position outside `[0, total_height]` (or NaN, or any position in an empty collection).
    OutOfRange { position: f64, total_height: f64 },
    /// A computed index range came out inverted. This signals a broken invariant, not a
    /// recoverable condition.
    InvertedRange { low: usize, high: usize },
    /// An item index outside `[0, count)`.
    IndexOutOfBounds { index: usize, count: usize },
    /// An item handle that belongs to a different collection.
    ForeignItem { index: usize },
    /// A reported height that is negative, NaN or infinite.
    InvalidHeight { index: usize, height: f64 },
    /// A height report arrived before the collection was initialized.
    NotInitialized,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange {
                position,
                total_height,
            } => write!(
                f,
                "position {position} is outside of the list (total height {total_height})"
            ),
            Self::InvertedRange { low, high } => {
                write!(f, "inverted index range (low={low}, high={high})")
            }
            Self::IndexOutOfBounds { index, count } => {
                write!(f, "item index out of bounds (index={index}, count={count})")
            }
            Self::ForeignItem { index } => {
                write!(f, "item {index} belongs to a different collection")
            }
            Self::InvalidHeight { index, height } => {
                write!(f, "invalid height {height} reported for item {index}")
            }
            Self::NotInitialized => f.write_str("collection is not initialized"),
        }
    }
}

impl core::error::Error for Error {}

pub type Result<T> = core::result::Result<T, Error>;
