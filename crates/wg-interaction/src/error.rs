use wg_core::{CoreError, InteractableId};

/// Result alias for interaction operations.
pub type InteractionResult<T> = Result<T, InteractionError>;

/// Errors raised by the interaction state machine.
#[derive(Debug, thiserror::Error)]
pub enum InteractionError {
    /// A finish was requested while nothing is being viewed.
    #[error("no item is being viewed")]
    NotViewing,

    /// The session's interactable is no longer in the registry.
    #[error("interactable not found: {0}")]
    InteractableNotFound(InteractableId),

    /// A core data error.
    #[error(transparent)]
    Core(#[from] CoreError),
}
