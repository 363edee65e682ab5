//! Error types for levels, HUD and progress.

use thiserror::Error;
use wg_core::CoreError;
use wg_interaction::InteractionError;

use crate::level::LevelId;

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// Errors raised while loading content, switching levels or touching the HUD.
#[derive(Debug, Error)]
pub enum SceneError {
    /// The requested level is not part of the loaded content.
    #[error("level {0} not found")]
    LevelNotFound(LevelId),

    /// Two levels share an id.
    #[error("duplicate level {0}")]
    DuplicateLevel(LevelId),

    /// A HUD slot index is past the slot capacity.
    #[error("inventory slot {index} out of range (capacity {capacity})")]
    SlotOutOfRange {
        /// The requested slot.
        index: usize,
        /// Number of slots.
        capacity: usize,
    },

    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Content or progress JSON was malformed.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Item or interactable resolution failed.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The interaction controller rejected an operation.
    #[error(transparent)]
    Interaction(#[from] InteractionError),
}
