//! Error types for the readability engine

use thiserror::Error;

/// Errors returned to callers of the readability engine.
///
/// None of these are fatal: counts and scores that were already computed
/// stay valid when a later step fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReadabilityError {
    #[error("No such index: '{0}'. Valid metrics: ARI, FK, SMOG, CL, all")]
    UnknownMetric(String),

    #[error("Unknown age policy '{0}'. Valid policies: round, ceiling")]
    UnknownPolicy(String),

    #[error("Input is not valid UTF-8 text: {0}")]
    InvalidInput(#[from] std::str::Utf8Error),
}

pub type ReadabilityResult<T> = Result<T, ReadabilityError>;
