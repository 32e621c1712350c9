use std::{io, path::PathBuf};

/// Shared error type for directory decoding and form submission.
#[derive(thiserror::Error, Debug)]
pub enum CoreError {
    /// An extension string could not be turned into an internal code.
    #[error("invalid extension `{input}`")]
    InvalidExtension {
        input: String,
        #[source]
        source: ExtensionParseError,
    },

    /// A parsed extension lies outside the valid code range.
    #[error("extension code {0} is outside 0..=110")]
    ExtensionOutOfRange(i64),

    /// A directory timestamp cannot be represented as a calendar date.
    #[error("directory timestamp {0} is out of range")]
    TimestampOutOfRange(i64),

    /// A required input is missing.
    #[error("missing required value: {0}")]
    MissingValue(String),

    /// File system I/O failure.
    #[error("I/O error while accessing {0}")]
    Io(PathBuf, #[source] io::Error),

    /// A localization table could not be decoded.
    #[error("malformed localization table {0}")]
    Localization(String, #[source] serde_json::Error),
}

impl CoreError {
    pub fn invalid_extension(input: impl Into<String>, source: ExtensionParseError) -> Self {
        Self::InvalidExtension {
            input: input.into(),
            source,
        }
    }

    pub fn missing(message: impl Into<String>) -> Self {
        Self::MissingValue(message.into())
    }

    pub fn io(path: impl Into<PathBuf>, error: io::Error) -> Self {
        Self::Io(path.into(), error)
    }
}

/// Why a free-form extension string was rejected.
///
/// This is the "malformed" outcome of encoding, kept apart from the blank
/// input that legitimately means "no extension".
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtensionParseError {
    /// The input does not start with a decimal number.
    #[error("not a number")]
    NotANumber,

    /// The digits do not fit into an integer.
    #[error("number too large")]
    Overflow,
}

/// Shared result alias for the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;
