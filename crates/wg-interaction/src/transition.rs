use glam::Vec3;
use tracing::debug;
use wg_core::{InteractableId, InteractableRegistry};

/// Moves one interactable toward a destination with exponential smoothing.
///
/// Each step moves a `delta * rate` fraction of the remaining distance.
/// Once `duration` seconds have accumulated the position snaps to the
/// destination. The ease is smooth but not frame-rate independent.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveTransition {
    /// The interactable being moved.
    pub interactable: InteractableId,
    /// Where the interactable ends up.
    pub destination: Vec3,
    elapsed: f32,
    duration: f32,
    rate: f32,
}

impl MoveTransition {
    /// Create a transition toward `destination`.
    pub fn new(interactable: InteractableId, destination: Vec3, duration: f32, rate: f32) -> Self {
        Self {
            interactable,
            destination,
            elapsed: 0.0,
            duration,
            rate,
        }
    }

    /// Advance by `delta` seconds, updating `position`. Returns true once finished.
    pub fn step(&mut self, delta: f32, position: &mut Vec3) -> bool {
        *position = position.lerp(self.destination, (delta * self.rate).clamp(0.0, 1.0));
        self.elapsed += delta;
        if self.elapsed >= self.duration {
            *position = self.destination;
            return true;
        }
        false
    }

    /// Seconds accumulated so far.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}

/// The set of running move transitions, at most one per interactable.
#[derive(Debug, Clone, Default)]
pub struct MoveTransitions {
    active: Vec<MoveTransition>,
}

impl MoveTransitions {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start moving an interactable and mark it as moving.
    ///
    /// A transition already running for the same interactable is replaced.
    pub fn start(&mut self, transition: MoveTransition, registry: &mut InteractableRegistry) {
        let id = transition.interactable;
        let Some(interactable) = registry.get_mut(id) else {
            return;
        };
        interactable.is_moving = true;
        self.active.retain(|t| t.interactable != id);
        debug!(interactable = %id, destination = %transition.destination, "move started");
        self.active.push(transition);
    }

    /// Advance every transition. Returns the interactables that arrived.
    ///
    /// Transitions whose interactable left the registry are dropped.
    pub fn step(&mut self, delta: f32, registry: &mut InteractableRegistry) -> Vec<InteractableId> {
        let mut arrived = Vec::new();
        self.active.retain_mut(|transition| {
            let Some(interactable) = registry.get_mut(transition.interactable) else {
                return false;
            };
            if transition.step(delta, &mut interactable.transform.position) {
                interactable.is_moving = false;
                arrived.push(transition.interactable);
                return false;
            }
            true
        });
        arrived
    }

    /// Returns true if the interactable has a running transition.
    pub fn is_moving(&self, id: InteractableId) -> bool {
        self.active.iter().any(|t| t.interactable == id)
    }

    /// Stop every transition, clearing the moving flags.
    pub fn cancel_all(&mut self, registry: &mut InteractableRegistry) {
        for transition in self.active.drain(..) {
            if let Some(interactable) = registry.get_mut(transition.interactable) {
                interactable.is_moving = false;
            }
        }
    }

    /// Number of running transitions.
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Returns true if nothing is moving.
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
