//! Error types for parameter validation and settings loading

use thiserror::Error;

use crate::consts::{MAX_DEPTH, MAX_LENGTH};

/// Rejected user input. Display strings are shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    /// Length or depth text is not a number
    #[error("Please enter valid numbers.")]
    NotANumber,

    #[error("Length L must be between 1 and {max}.", max = MAX_LENGTH)]
    LengthOutOfRange(i64),

    #[error("Levels h should be between 1 and {max}.", max = MAX_DEPTH)]
    DepthOutOfRange(i64),

    /// Anchor geometry with a zero-length span
    #[error("Ruler geometry is degenerate: {0}")]
    Degenerate(&'static str),

    #[error("unknown ruler shape: {0}")]
    UnknownShape(String),

    #[error("unknown ruler color: {0}")]
    UnknownColor(String),
}

/// Failure loading a settings file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure of the command-line tool
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Param(#[from] ParamError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Param(_) => 2,
            CliError::Config(_) => 3,
            CliError::Encode(_) | CliError::Io(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::from(ParamError::NotANumber).exit_code(), 2);
        let io = std::io::Error::other("closed");
        assert_eq!(CliError::from(ConfigError::from(io)).exit_code(), 3);
    }

    #[test]
    fn test_transparent_message() {
        let err = CliError::from(ParamError::DepthOutOfRange(11));
        assert_eq!(err.to_string(), "Levels h should be between 1 and 10.");
    }
}
