use wg_core::InventoryObserver;

/// Presentation collaborator: everything the player sees.
///
/// Inventory notifications arrive through the [`InventoryObserver`]
/// supertrait. Calls are fire-and-forget.
pub trait PresentationGateway: InventoryObserver {
    /// Show or hide the "this can be interacted with" cursor.
    fn set_hand_cursor(&mut self, visible: bool);

    /// Show or hide the "ready to finish" affordance.
    fn set_back_affordance(&mut self, visible: bool);

    /// Replace the caption text. An empty string clears it.
    fn set_caption(&mut self, text: &str);

    /// Show an image.
    fn set_image(&mut self, image: &str);
}

/// A gateway that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullGateway;

impl InventoryObserver for NullGateway {}

impl PresentationGateway for NullGateway {
    fn set_hand_cursor(&mut self, _visible: bool) {}
    fn set_back_affordance(&mut self, _visible: bool) {}
    fn set_caption(&mut self, _text: &str) {}
    fn set_image(&mut self, _image: &str) {}
}
