use std::path::PathBuf;

use thiserror::Error;

use crate::cards::CardId;

/// Failure reported by a [`CardSource`](crate::loader::CardSource).
/// Callers can tell a missing data set apart from a present but invalid one.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("card data not found: {what}")]
    NotFound { what: String },
    #[error("malformed card data in {what}: {reason}")]
    Malformed { what: String, reason: String },
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    pub(crate) fn malformed(what: impl Into<String>, reason: impl Into<String>) -> Self {
        LoadError::Malformed {
            what: what.into(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum DeckError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("duplicate card identity: {0}")]
    DuplicateCard(CardId),
    #[error("card {id} does not belong to the {expected} arcana")]
    Misfiled { id: CardId, expected: &'static str },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpreadError {
    #[error("spread must declare at least one position")]
    NoPositions,
    #[error("position declared at slot {slot} carries index {index}")]
    PositionIndex { slot: usize, index: usize },
    #[error("deal order {deal_order} is used by more than one position")]
    DuplicateDealOrder { deal_order: usize },
    #[error("layout entry references unknown position {position}")]
    UnknownLayoutPosition { position: usize },
    #[error("unknown spread: {0}")]
    UnknownSpread(String),
}

/// A reading whose drawn cards do not fit its spread.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReadingError {
    #[error("{drawn} drawn cards exceed the spread's {positions} positions")]
    TooManyCards { drawn: usize, positions: usize },
    #[error("drawn card {slot} does not sit in the spread's position {slot}")]
    PositionMismatch { slot: usize },
}

#[derive(Debug, Error, PartialEq)]
pub enum GeneratorError {
    #[error("reversal probability must be within [0, 1], got {0}")]
    InvalidReversalProbability(f64),
}
