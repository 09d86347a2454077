//! # Errors
//! Errors emitted by this crate.

use chrono::ParseError;
use std::{error, fmt};

/// Crate specific result.
pub type OrreryResult<T> = Result<T, Error>;

/// Possible Errors which may be raised by this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input or variable exceeded expected or allowed bounds.
    ValueError(String),
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::ValueError(s) => {
                write!(f, "{}", s)
            }
        }
    }
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Error::ValueError(error.to_string())
    }
}
