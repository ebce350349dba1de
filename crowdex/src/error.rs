//! All error types for the crowdex crate.
//!
//! These are returned from all fallible operations (archive reading, literal
//! parsing, rendering, file I/O).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("no app locale mapped for vendor locale `{0}`")]
    MissingMapping(String),

    #[error("archive entry `{0}` is not valid UTF-8")]
    Decode(String),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("literal parse error at byte {offset}: {message}")]
    Literal { offset: usize, message: String },

    #[error("marker `{0}` not found in generated source")]
    MarkerNotFound(&'static str),

    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("unknown quote style `{0}`")]
    UnknownStyle(String),

    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates a new literal parse error at the given byte offset.
    pub fn literal_error(offset: usize, message: impl Into<String>) -> Self {
        Error::Literal {
            offset,
            message: message.into(),
        }
    }

    /// Creates a new invalid-catalog error.
    pub fn invalid_catalog(message: impl Into<String>) -> Self {
        Error::InvalidCatalog(message.into())
    }
}
