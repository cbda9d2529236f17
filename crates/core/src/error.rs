//! Error types for DeckLoad.

use thiserror::Error;

/// Result type alias for DeckLoad operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building containers or planning a deck load.
#[derive(Debug, Error)]
pub enum Error {
    /// A value lies outside its permitted range (cargo weight, placement quota).
    #[error("Value out of range for '{parameter}': {message}")]
    OutOfRange {
        /// Name of the offending parameter.
        parameter: String,
        /// What was wrong with it.
        message: String,
    },

    /// Grid access outside the deck dimensions.
    #[error(
        "Coordinate ({x}, {y}, {z}) is outside the deck ({length} x {width} x {height})"
    )]
    IndexOutOfBounds {
        x: usize,
        y: usize,
        z: usize,
        length: usize,
        width: usize,
        height: usize,
    },

    /// Invalid deck dimensions.
    #[error("Invalid deck: {0}")]
    InvalidDeck(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// An operation that needs at least one item received none.
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// A program was run before its setup step.
    #[error("Setup has not run; call setup() before run()")]
    SetupNotRun,

    /// Serialization error.
    #[cfg(feature = "serde")]
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl Error {
    /// Builds an [`Error::OutOfRange`] for the named parameter.
    pub fn out_of_range(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        Self::OutOfRange {
            parameter: parameter.into(),
            message: message.into(),
        }
    }

    /// Returns the parameter name if this is an out-of-range error.
    pub fn parameter(&self) -> Option<&str> {
        match self {
            Self::OutOfRange { parameter, .. } => Some(parameter),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = Error::out_of_range("min_general", "requested 5 but only 3 supplied");
        assert_eq!(err.parameter(), Some("min_general"));
        assert_eq!(
            err.to_string(),
            "Value out of range for 'min_general': requested 5 but only 3 supplied"
        );
    }

    #[test]
    fn test_index_message() {
        let err = Error::IndexOutOfBounds {
            x: 6,
            y: 0,
            z: 0,
            length: 6,
            width: 5,
            height: 5,
        };
        assert!(err.to_string().contains("(6, 0, 0)"));
        assert_eq!(err.parameter(), None);
    }
}
