use glam::Vec3;
use wg_core::InteractableId;

/// A world-space ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Ray origin.
    pub origin: Vec3,
    /// Normalized ray direction.
    pub direction: Vec3,
}

/// Answers "which interactable is under the crosshair?".
///
/// Implemented by the host's physics or picking layer.
pub trait Targeting {
    /// Return the interactable hit by `ray` within `max_distance`, if any.
    fn pick(&mut self, ray: &Ray, max_distance: f32) -> Option<InteractableId>;
}

/// Targeting that always reports the same object, set by the host.
///
/// Used by headless hosts that already know what the player looks at.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedTarget {
    target: Option<InteractableId>,
}

impl FixedTarget {
    /// Target the given interactable.
    pub fn new(target: Option<InteractableId>) -> Self {
        Self { target }
    }

    /// Change the targeted interactable.
    pub fn set(&mut self, target: Option<InteractableId>) {
        self.target = target;
    }

    /// The currently targeted interactable.
    pub fn get(&self) -> Option<InteractableId> {
        self.target
    }
}

impl Targeting for FixedTarget {
    fn pick(&mut self, _ray: &Ray, _max_distance: f32) -> Option<InteractableId> {
        self.target
    }
}
