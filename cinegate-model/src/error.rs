use std::fmt::{self, Display};

/// Errors produced by model constructors and validation routines.
#[derive(Debug)]
pub enum ModelError {
    /// A numeric field fell outside its allowed range.
    OutOfRange(String),
    /// A string field did not name a known enum member.
    UnknownVariant(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::OutOfRange(msg) => write!(f, "out of range: {msg}"),
            ModelError::UnknownVariant(msg) => {
                write!(f, "unknown variant: {msg}")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
