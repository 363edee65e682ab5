//! Core types for Wandelgang: items, the inventory, and interactables.
//!
//! This crate holds the authored data model that the interaction state
//! machine operates on. It knows nothing about frames, timers, or
//! presentation. You can build a catalog programmatically or load one
//! from JSON.

/// Immutable item catalog keyed by item ID.
pub mod catalog;
/// Error types used throughout the crate.
pub mod error;
/// Interactable objects and their previous-item rules.
pub mod interactable;
/// The player's ordered, duplicate-free inventory.
pub mod inventory;
/// Item records and identifiers.
pub mod item;
/// Per-level registry of interactables.
pub mod registry;
/// Position and rotation of scene objects.
pub mod transform;

/// Re-export catalog type.
pub use catalog::ItemCatalog;
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export interactable types.
pub use interactable::{Interactable, InteractableDef, InteractableId, PreviousItemRule, RuleDef};
/// Re-export inventory types.
pub use inventory::{Inventory, InventoryObserver};
/// Re-export item types.
pub use item::{AudioClip, Item, ItemId};
/// Re-export registry type.
pub use registry::InteractableRegistry;
/// Re-export transform type.
pub use transform::Transform;
