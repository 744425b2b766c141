//! This module contains all custom errors used in this library.

use std::fmt;
use std::error::Error;

#[derive(Debug)]
pub enum ImportError {
    IoError(std::io::Error),
    InputMalformedError,
    BadIntError(std::num::ParseIntError),
    /// The character after an opening parenthesis was neither `L`, `P` nor `S`.
    UnknownTag(char),
}

impl From<std::io::Error> for ImportError {
    fn from(e: std::io::Error) -> ImportError {
        ImportError::IoError(e)
    }
}

impl From<std::num::ParseIntError> for ImportError {
    fn from(e: std::num::ParseIntError) -> ImportError {
        ImportError::BadIntError(e)
    }
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IoError(_) => write!(f, "Import: IoError"),
            Self::InputMalformedError => write!(f, "Import: Input is malformed."),
            Self::BadIntError(_) => write!(f, "Import: Integer is malformed."),
            Self::UnknownTag(tag) => write!(f, "Import: Unknown composition tag '{}'.", tag),
        }
    }
}

impl Error for ImportError {}

#[derive(Debug)]
pub enum ProcessingError {
    InvalidParameter(String),
    InvalidSolution(String),
}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            Self::InvalidSolution(msg) => write!(f, "InvalidSolution: {}", msg),
        }
    }
}

impl Error for ProcessingError {}
