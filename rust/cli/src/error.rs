//! Error types for the CLI application.
//!
//! Engine and configuration failures are folded into [`CliError`] so that
//! command handlers can propagate everything with `?`.

use std::fmt;

use arcana_engine::errors::{DeckError, GeneratorError, LoadError, SpreadError};

use crate::config::ConfigError;

/// Custom error type for CLI operations.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (stdout/stderr writes, etc.)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// Engine-related error (deck construction, spreads, generator setup)
    Engine(String),

    /// A requested card is not in the deck
    NotFound(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(msg) => write!(f, "Engine error: {}", msg),
            CliError::NotFound(msg) => write!(f, "Not found: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(error: serde_json::Error) -> Self {
        CliError::Io(std::io::Error::other(error))
    }
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        CliError::Config(error.to_string())
    }
}

impl From<DeckError> for CliError {
    fn from(error: DeckError) -> Self {
        CliError::Engine(error.to_string())
    }
}

impl From<LoadError> for CliError {
    fn from(error: LoadError) -> Self {
        CliError::Engine(error.to_string())
    }
}

impl From<GeneratorError> for CliError {
    fn from(error: GeneratorError) -> Self {
        CliError::Config(error.to_string())
    }
}

impl From<SpreadError> for CliError {
    fn from(error: SpreadError) -> Self {
        match error {
            SpreadError::UnknownSpread(_) => CliError::InvalidInput(error.to_string()),
            other => CliError::Engine(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_spread_is_user_error() {
        let err: CliError = SpreadError::UnknownSpread("pyramid".into()).into();
        assert!(matches!(err, CliError::InvalidInput(_)));
        assert_eq!(err.to_string(), "Invalid input: unknown spread: pyramid");
    }

    #[test]
    fn load_failures_keep_their_message() {
        let err: CliError = DeckError::Load(LoadError::NotFound {
            what: "cups.json".into(),
        })
        .into();
        assert_eq!(
            err.to_string(),
            "Engine error: card data not found: cups.json"
        );
    }
}
