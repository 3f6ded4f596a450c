//! Error types for the Food actor.

use thiserror::Error;

/// Errors that can occur during food store operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FoodError {
    /// A draft could not be priced against the stored item.
    #[error("Quote rejected: {0}")]
    QuoteRejected(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for FoodError {
    fn from(msg: String) -> Self {
        FoodError::ActorCommunicationError(msg)
    }
}
