//! Error types for the food details screen.

use crate::clients::ApiError;
use crate::model::ExtraId;
use thiserror::Error;

/// Errors surfaced by the food details screen. None of them leave the screen in a
/// broken state: local edits are rejected whole and remote failures are reported
/// per operation.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DetailsError {
    /// The extra is not part of the loaded food.
    #[error("Extra not found: {0}")]
    ExtraNotFound(ExtraId),

    /// The action needs a loaded food.
    #[error("No food loaded")]
    NotLoaded,

    #[error("Failed to load food: {0}")]
    LoadFailed(#[source] ApiError),

    /// The favorite call failed; the flag was rolled back.
    #[error("Failed to toggle favorite: {0}")]
    FavoriteToggleFailed(#[source] ApiError),

    #[error("Failed to submit order: {0}")]
    OrderSubmitFailed(#[source] ApiError),

    /// The screen's favorite worker is gone.
    #[error("Favorite worker stopped")]
    WorkerStopped,
}
