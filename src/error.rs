//! Error type for storage, configuration and collaborator failures.
//!
//! Tokenizing, classifying and ranking never fail; only the code around
//! them (files, translation backends) does.

use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// Reading or writing a file failed
    Io(std::io::Error),
    /// The workbook snapshot could not be encoded or decoded
    Snapshot(String),
    /// Configuration could not be located or parsed
    Config(String),
    /// A JSON payload was malformed
    Json(serde_json::Error),
    /// The translation collaborator failed
    Translation(String),
    /// No phrase with the given id exists
    PhraseNotFound(u64),
    /// The word is too short to be tracked
    InvalidWord(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {}", e),
            Error::Snapshot(msg) => write!(f, "Snapshot error: {}", msg),
            Error::Config(msg) => write!(f, "Config error: {}", msg),
            Error::Json(e) => write!(f, "JSON error: {}", e),
            Error::Translation(msg) => write!(f, "Translation failed: {}", msg),
            Error::PhraseNotFound(id) => write!(f, "Phrase {} not found", id),
            Error::InvalidWord(word) => write!(f, "Invalid word: '{}'", word),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<tempfile::PersistError> for Error {
    fn from(err: tempfile::PersistError) -> Self {
        Error::Io(err.error)
    }
}

impl From<bincode::Error> for Error {
    fn from(err: bincode::Error) -> Self {
        Error::Snapshot(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
