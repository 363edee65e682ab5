use std::sync::Arc;

use wg_core::{InteractableId, Item, Transform};

use crate::timer::OneShotTimer;

/// Transient state of one interact → view → finish cycle.
#[derive(Debug, Clone)]
pub struct Session {
    /// The interactable being viewed.
    pub interactable: InteractableId,
    /// The item being presented (after any rule substitution).
    pub item: Arc<Item>,
    /// True once the finish timer has fired.
    pub can_finish: bool,
    /// Transform saved before a grabbable item was moved to the viewer.
    pub origin: Option<Transform>,
    /// Pending finish timer; `None` once it fired.
    pub finish_timer: Option<OneShotTimer>,
}

impl Session {
    /// Start a session for `item` shown by `interactable`.
    pub fn new(interactable: InteractableId, item: Arc<Item>) -> Self {
        Self {
            interactable,
            item,
            can_finish: false,
            origin: None,
            finish_timer: None,
        }
    }
}
