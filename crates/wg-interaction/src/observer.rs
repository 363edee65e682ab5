use wg_core::{InteractableId, Item, PreviousItemRule};

use crate::event::HookPoint;

/// Receives interaction callbacks. Every method defaults to a no-op, so
/// implementors override only what they listen to.
pub trait InteractionObserver {
    /// The player interacted with an interactable.
    fn on_interact(&mut self, _interactable: InteractableId) {}

    /// A view session started.
    fn on_view(&mut self, _interactable: InteractableId) {}

    /// A previous-item rule was applied.
    fn on_rule_applied(&mut self, _interactable: InteractableId, _rule: &PreviousItemRule) {}

    /// The viewed item was collected.
    fn on_collect(&mut self, _interactable: InteractableId, _item: &Item) {}

    /// A view session ended.
    fn on_finish_view(&mut self, _interactable: InteractableId) {}

    /// An authored hook tag fired.
    fn on_hook(&mut self, _interactable: InteractableId, _point: HookPoint, _tag: &str) {}
}
