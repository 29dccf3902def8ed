//! Error types for the automaton.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Invalid seed: {0}")]
    InvalidSeed(String),

    #[error("Invalid rule: {0}")]
    InvalidRule(String),

    #[error("Unknown pattern: {0}")]
    UnknownPattern(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::InvalidDimensions { width: 0, height: 4 };
        assert_eq!(err.to_string(), "Invalid dimensions: 0x4");

        let err = Error::UnknownPattern("spaceship".to_string());
        assert_eq!(err.to_string(), "Unknown pattern: spaceship");
    }

    #[test]
    fn test_from_serde_json() {
        let json_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Serialization(_)));
    }
}
