//! All kinds of errors in this crate.

use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// Grid size should be positive.
    NonPositiveError,
    /// A grid of size {0} does not fit in memory.
    GridTooLargeError(usize),
    /// The {pattern} pattern needs a grid of size at least {min}, but the size is {size}.
    GridTooSmallError {
        pattern: &'static str,
        size: usize,
        min: usize,
    },
    /// Invalid pattern file: {0}
    FileFormatError(#[from] FileFormatError),
}

impl Error {
    /// Whether the requested grid size is unusable, or cannot host the
    /// selected built-in pattern.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::NonPositiveError | Error::GridTooLargeError(_) | Error::GridTooSmallError { .. }
        )
    }

    /// Whether a pattern file is missing or malformed.
    pub fn is_file_format(&self) -> bool {
        matches!(self, Error::FileFormatError(_))
    }
}

/// Errors when reading a pattern file.
///
/// Rows and columns are 0-indexed and count content lines only,
/// i.e., the size line is not row 0.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum FileFormatError {
    /// Unable to read the file: {0}
    Io(String),
    /// The file is empty; the first line should be the grid size.
    MissingSize,
    /// Invalid grid size {0:?}; it should be a positive integer.
    InvalidSize(String),
    /// Expected {expected} rows, but the file ends at row {found}.
    MissingRow { expected: usize, found: usize },
    /// Row {row} has {found} cells, but it should have {expected}.
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Cell ({row}, {col}) has invalid state {token:?}.
    InvalidCell {
        row: usize,
        col: usize,
        token: String,
    },
    /// Unexpected content after the last row: {0:?}.
    TrailingContent(String),
}

impl From<std::io::Error> for FileFormatError {
    fn from(e: std::io::Error) -> Self {
        FileFormatError::Io(e.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::FileFormatError(e.into())
    }
}
