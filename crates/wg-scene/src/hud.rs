//! A headless heads-up display.
//!
//! [`Hud`] is the concrete [`PresentationGateway`] used by the game: it keeps
//! the cursor hint, caption, interaction image, back affordance, inventory
//! slots and the fading info line as plain state that a renderer (or a test)
//! can read back.

use std::sync::Arc;

use tracing::warn;
use wg_core::{InventoryObserver, Item};
use wg_interaction::{InputState, PresentationGateway};

use crate::error::{SceneError, SceneResult};

/// Number of inventory slots when content does not say otherwise.
pub const DEFAULT_SLOTS: usize = 8;

const INFO_HOLD_SECONDS: f32 = 2.0;

/// One inventory slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Slot {
    /// Collect message of the item in this slot.
    pub text: String,
    /// Icon of the item in this slot.
    pub icon: Option<String>,
    /// Whether the icon is shown.
    pub icon_visible: bool,
}

impl Slot {
    fn fill(item: &Item) -> Self {
        Self {
            text: item.collect_message.clone(),
            icon: item.icon.clone(),
            icon_visible: true,
        }
    }

    /// Returns true if nothing is shown in this slot.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && !self.icon_visible
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum FadePhase {
    In,
    Hold(f32),
    Out,
}

/// Info line that fades in, holds, then fades out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FadingText {
    text: String,
    alpha: f32,
    phase: Option<FadePhase>,
}

impl FadingText {
    /// Show `text`, fading in from the current alpha.
    ///
    /// Restarting while a fade is running starts over from the fade-in.
    pub fn start(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.phase = Some(FadePhase::In);
    }

    /// Advance the fade by `delta` seconds.
    pub fn tick(&mut self, delta: f32) {
        let Some(phase) = self.phase else {
            return;
        };
        self.phase = match phase {
            FadePhase::In => {
                self.alpha += delta;
                if self.alpha >= 1.0 {
                    self.alpha = 1.0;
                    Some(FadePhase::Hold(INFO_HOLD_SECONDS))
                } else {
                    Some(FadePhase::In)
                }
            }
            FadePhase::Hold(remaining) => {
                let remaining = remaining - delta;
                if remaining <= 0.0 {
                    Some(FadePhase::Out)
                } else {
                    Some(FadePhase::Hold(remaining))
                }
            }
            FadePhase::Out => {
                self.alpha -= delta;
                if self.alpha <= 0.0 {
                    self.alpha = 0.0;
                    None
                } else {
                    Some(FadePhase::Out)
                }
            }
        };
    }

    /// Current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Current opacity in `0.0..=1.0`.
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Returns true while a fade is in progress.
    pub fn is_active(&self) -> bool {
        self.phase.is_some()
    }
}

/// The heads-up display state.
#[derive(Debug, Clone, PartialEq)]
pub struct Hud {
    hand_cursor: bool,
    back: bool,
    caption: String,
    image: Option<String>,
    image_visible: bool,
    inventory_open: bool,
    slots: Vec<Slot>,
    info: FadingText,
}

impl Default for Hud {
    fn default() -> Self {
        Self::new(DEFAULT_SLOTS)
    }
}

impl Hud {
    /// Create a HUD with `capacity` inventory slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            hand_cursor: false,
            back: false,
            caption: String::new(),
            image: None,
            image_visible: false,
            inventory_open: false,
            slots: vec![Slot::default(); capacity],
            info: FadingText::default(),
        }
    }

    /// Per-frame update: advances the info fade and handles the inventory toggle.
    pub fn tick(&mut self, delta: f32, input: &InputState) {
        if input.toggle_inventory {
            self.toggle_inventory();
        }
        self.info.tick(delta);
    }

    /// Show or hide the inventory panel.
    pub fn toggle_inventory(&mut self) {
        self.inventory_open = !self.inventory_open;
    }

    /// Clear one inventory slot.
    pub fn remove_slot(&mut self, index: usize) -> SceneResult<()> {
        let capacity = self.slots.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(SceneError::SlotOutOfRange { index, capacity })?;
        *slot = Slot::default();
        Ok(())
    }

    /// Whether the hand cursor is shown.
    pub fn hand_cursor(&self) -> bool {
        self.hand_cursor
    }

    /// Whether the back affordance is shown.
    pub fn back_affordance(&self) -> bool {
        self.back
    }

    /// Current caption.
    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// The interaction image, if one is shown.
    pub fn image(&self) -> Option<&str> {
        if self.image_visible {
            self.image.as_deref()
        } else {
            None
        }
    }

    /// Whether the inventory panel is open.
    pub fn inventory_open(&self) -> bool {
        self.inventory_open
    }

    /// Inventory slots in order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// The fading info line.
    pub fn info(&self) -> &FadingText {
        &self.info
    }
}

impl InventoryObserver for Hud {
    fn item_added(&mut self, item: &Item, index: usize) {
        let capacity = self.slots.len();
        let Some(slot) = self.slots.get_mut(index) else {
            warn!(item = %item.id, index, capacity, "no inventory slot for item");
            return;
        };
        *slot = Slot::fill(item);
        self.info.start(item.collect_message.clone());
    }

    fn inventory_changed(&mut self, items: &[Arc<Item>]) {
        for (i, slot) in self.slots.iter_mut().enumerate() {
            *slot = items.get(i).map(|item| Slot::fill(item)).unwrap_or_default();
        }
    }
}

impl PresentationGateway for Hud {
    fn set_hand_cursor(&mut self, visible: bool) {
        self.hand_cursor = visible;
    }

    fn set_back_affordance(&mut self, visible: bool) {
        self.back = visible;
        if !visible {
            self.image_visible = false;
        }
    }

    fn set_caption(&mut self, text: &str) {
        self.caption = text.to_string();
    }

    fn set_image(&mut self, image: &str) {
        self.image = Some(image.to_string());
        self.image_visible = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter() -> Item {
        let mut item = Item::new("letter").with_collect_message("Picked up a letter");
        item.icon = Some("letter_icon".into());
        item
    }

    #[test]
    fn item_added_fills_slot_and_starts_info() {
        let mut hud = Hud::new(2);
        hud.item_added(&letter(), 1);
        assert!(hud.slots()[0].is_empty());
        assert_eq!(hud.slots()[1].text, "Picked up a letter");
        assert_eq!(hud.slots()[1].icon.as_deref(), Some("letter_icon"));
        assert!(hud.slots()[1].icon_visible);
        assert_eq!(hud.info().text(), "Picked up a letter");
        assert!(hud.info().is_active());
    }

    #[test]
    fn out_of_range_slot_is_ignored() {
        let mut hud = Hud::new(1);
        hud.item_added(&letter(), 3);
        assert!(hud.slots()[0].is_empty());
        assert!(!hud.info().is_active());
    }

    #[test]
    fn inventory_changed_refreshes_every_slot() {
        let mut hud = Hud::new(3);
        hud.item_added(&letter(), 0);
        hud.item_added(&Item::new("key").with_collect_message("Key"), 1);

        hud.inventory_changed(&[Arc::new(Item::new("key").with_collect_message("Key"))]);

        assert_eq!(hud.slots()[0].text, "Key");
        assert!(hud.slots()[1].is_empty());
        assert!(hud.slots()[2].is_empty());
    }

    #[test]
    fn remove_slot_bounds() {
        let mut hud = Hud::new(2);
        hud.item_added(&letter(), 0);
        hud.remove_slot(0).unwrap();
        assert!(hud.slots()[0].is_empty());
        assert!(matches!(
            hud.remove_slot(2),
            Err(SceneError::SlotOutOfRange {
                index: 2,
                capacity: 2
            })
        ));
    }

    #[test]
    fn hiding_back_affordance_hides_image() {
        let mut hud = Hud::default();
        hud.set_image("photo.png");
        hud.set_back_affordance(true);
        assert_eq!(hud.image(), Some("photo.png"));
        hud.set_back_affordance(false);
        assert_eq!(hud.image(), None);
        assert!(!hud.back_affordance());
    }

    #[test]
    fn toggle_input_flips_inventory_panel() {
        let mut hud = Hud::default();
        let toggle = InputState {
            toggle_inventory: true,
            ..InputState::idle()
        };
        hud.tick(0.1, &toggle);
        assert!(hud.inventory_open());
        hud.tick(0.1, &InputState::idle());
        assert!(hud.inventory_open());
        hud.tick(0.1, &toggle);
        assert!(!hud.inventory_open());
    }

    #[test]
    fn info_fades_in_holds_and_fades_out() {
        let mut info = FadingText::default();
        info.start("hello");

        for _ in 0..4 {
            info.tick(0.25);
        }
        assert_eq!(info.alpha(), 1.0);

        // Two seconds of hold.
        for _ in 0..8 {
            info.tick(0.25);
            assert_eq!(info.alpha(), 1.0);
        }

        info.tick(0.5);
        assert_eq!(info.alpha(), 0.5);
        info.tick(0.5);
        assert_eq!(info.alpha(), 0.0);
        assert!(!info.is_active());
    }
}
