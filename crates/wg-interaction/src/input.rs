use glam::{Vec2, Vec3};

use crate::targeting::Ray;

/// Input polled for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputState {
    /// Primary action went down this frame.
    pub primary_pressed: bool,
    /// Primary action is held.
    pub primary_held: bool,
    /// Secondary action is held.
    pub secondary_held: bool,
    /// Pointer movement since the last frame.
    pub pointer_delta: Vec2,
    /// The toggle-inventory key went down this frame.
    pub toggle_inventory: bool,
}

impl InputState {
    /// A frame with no input.
    pub fn idle() -> Self {
        Self::default()
    }

    /// A frame where the primary action goes down.
    pub fn click() -> Self {
        Self {
            primary_pressed: true,
            primary_held: true,
            ..Self::default()
        }
    }

    /// A frame where the secondary action is held.
    pub fn back() -> Self {
        Self {
            secondary_held: true,
            ..Self::default()
        }
    }

    /// A frame where the primary action is held while the pointer moves.
    pub fn drag(delta: Vec2) -> Self {
        Self {
            primary_held: true,
            pointer_delta: delta,
            ..Self::default()
        }
    }
}

/// The viewer's camera basis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// World-space position.
    pub position: Vec3,
    /// Normalized viewing direction.
    pub forward: Vec3,
    /// Normalized right axis.
    pub right: Vec3,
    /// Normalized up axis.
    pub up: Vec3,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            forward: Vec3::Z,
            right: Vec3::X,
            up: Vec3::Y,
        }
    }
}

impl Camera {
    /// The ray through the center of the view.
    pub fn center_ray(&self) -> Ray {
        Ray {
            origin: self.position,
            direction: self.forward,
        }
    }
}

/// Everything the controller needs to advance one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Frame {
    /// Frame length in seconds.
    pub delta: f32,
    /// Input polled this frame.
    pub input: InputState,
    /// Camera this frame.
    pub camera: Camera,
}

impl Frame {
    /// A frame of `delta` seconds with the given input and the default camera.
    pub fn new(delta: f32, input: InputState) -> Self {
        Self {
            delta,
            input,
            camera: Camera::default(),
        }
    }
}
