use crate::interactable::InteractableId;
use crate::item::ItemId;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when loading or manipulating authored data.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Two catalog entries share the same item ID.
    #[error("duplicate item id: \"{0}\"")]
    DuplicateItem(ItemId),

    /// An item ID referenced by authored data is not in the catalog.
    #[error("unknown item \"{item}\" referenced by {referenced_by}")]
    UnknownItem {
        /// The unresolved item ID.
        item: ItemId,
        /// Human-readable description of the referencing record.
        referenced_by: String,
    },

    /// An interactable with the same name is already registered.
    #[error("interactable already exists: \"{0}\"")]
    DuplicateInteractable(String),

    /// The requested interactable ID is not registered.
    #[error("interactable not found: {0}")]
    InteractableNotFound(InteractableId),

    /// Authored data could not be parsed.
    #[error("invalid content: {0}")]
    Json(#[from] serde_json::Error),
}
