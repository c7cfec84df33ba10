//! Error types for codec operations

/// Errors that can occur while validating, encoding or decoding state
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// A value violates a field invariant
    #[error("Validation error: {0}")]
    Validation(String),

    /// A payload could not be decoded into a valid value
    #[error("Failed to deserialize message: {0}")]
    Decoding(String),

    /// Dynamic input is not shaped like a status message
    #[error("Invalid input type: {0}")]
    InputType(String),

    /// IO error during read/write
    #[error("IO error: {0}")]
    Io(String),
}

impl CodecError {
    /// Wrap any displayable cause as a decoding failure
    pub fn decoding(cause: impl core::fmt::Display) -> Self {
        CodecError::Decoding(cause.to_string())
    }
}

impl From<std::io::Error> for CodecError {
    fn from(err: std::io::Error) -> Self {
        CodecError::Io(err.to_string())
    }
}
