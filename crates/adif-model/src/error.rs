//! Error types for ADIF field conversion.
//!
//! Callers branch on one of three kinds; nothing is wrapped.

use thiserror::Error;

/// Errors returned by the frequency and coordinate converters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdifError {
    /// Input has the wrong number of characters.
    #[error("invalid length: expected {expected} characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Input is structurally malformed (e.g. wrong number of dots).
    #[error("invalid syntax: {message}")]
    Syntax { message: String },

    /// Input could not be parsed as a number.
    #[error("cannot parse {input:?} as a number")]
    Parse { input: String },
}

/// Discriminant of an [`AdifError`], for callers that only need the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidLength,
    SyntaxError,
    ParseError,
}

impl AdifError {
    pub fn syntax(message: impl Into<String>) -> Self {
        Self::Syntax {
            message: message.into(),
        }
    }

    pub fn parse(input: impl Into<String>) -> Self {
        Self::Parse {
            input: input.into(),
        }
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidLength { .. } => ErrorKind::InvalidLength,
            Self::Syntax { .. } => ErrorKind::SyntaxError,
            Self::Parse { .. } => ErrorKind::ParseError,
        }
    }
}

pub type Result<T> = std::result::Result<T, AdifError>;
