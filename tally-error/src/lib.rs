#![forbid(unsafe_code)]
#![deny(
    dead_code,
    unused_imports,
    unused_mut,
    missing_docs,
    missing_debug_implementations
)]
//! internal library to provide structures for errors in Tally.
//!
//! # Examples
//! ```rust
//! use tally_error::{Error, ErrorType, RankError};
//!
//! let error = Error::new(
//!     ErrorType::Rank(RankError::OutOfRange),
//!     None,
//!     Some("rank 4 on a list of 2 entries".to_string()),
//! );
//! assert!(error.is_out_of_range());
//! ```

use std::error::Error as StdError;
use std::fmt;

/// Boxed error to bypass specific [Error](StdError).
type BError = Box<dyn StdError + Send + Sync>;
/// Result carrying a Tally [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// The struct that represents an error
#[derive(Debug)]
pub struct Error {
    /// The error type.
    pub etype: ErrorType,
    /// The cause of this error.
    pub cause: Option<BError>,
    /// Explains the context in which the error occurs.
    pub context: Option<String>,
}

impl Error {
    /// Throw an [`Error`].
    pub fn new(
        etype: ErrorType,
        cause: Option<BError>,
        context: Option<String>,
    ) -> Self {
        Error {
            etype,
            cause,
            context,
        }
    }

    /// Whether the error was raised by a rank outside the list.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self.etype, ErrorType::Rank(RankError::OutOfRange))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.context {
            Some(context) => write!(f, "{} ({})", self.etype, context),
            None => write!(f, "{}", self.etype),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause
            .as_ref()
            .map(|cause| cause.as_ref() as &(dyn StdError + 'static))
    }
}

/// Errors in Tally.
#[derive(Debug)]
pub enum ErrorType {
    /// Errors related to rank queries.
    Rank(RankError),
    /// Errors related to linked list manipulation.
    List(ListError),
    /// IO errors, especially due to std::fs.
    InputOutput(IoError),
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorType::Rank(error) => write!(f, "{}", error),
            ErrorType::List(error) => write!(f, "{}", error),
            ErrorType::InputOutput(error) => write!(f, "{}", error),
        }
    }
}
impl StdError for ErrorType {}

/// Errors related to rank queries.
#[derive(Debug, PartialEq, Eq)]
pub enum RankError {
    /// The requested rank is negative or past the last entry.
    OutOfRange,
}

impl fmt::Display for RankError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RankError::OutOfRange => {
                write!(f, "Rank is outside the range of the list.")
            },
        }
    }
}
impl StdError for RankError {}

/// Errors related to linked lists.
#[derive(Debug, PartialEq, Eq)]
pub enum ListError {
    /// Tried to remove a node from an empty list.
    EmptyList,
    /// A node handle does not point to a live node.
    InvalidNode,
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ListError::EmptyList => write!(f, "List is empty."),
            ListError::InvalidNode => {
                write!(f, "Node does not belong to the list.")
            },
        }
    }
}
impl StdError for ListError {}

/// Errors related to [`std`].
#[derive(Debug, PartialEq, Eq)]
pub enum IoError {
    /// Deserialization failed.
    DeserializationError,
    /// Data are corrupted or not in the correct format (UTF-8).
    ReadingError,
}

impl fmt::Display for IoError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            IoError::DeserializationError => {
                write!(f, "Deserialization failed.")
            },
            IoError::ReadingError => write!(
                f,
                "Data are corrupted or not in the correct format (UTF-8)."
            ),
        }
    }
}
impl StdError for IoError {}
