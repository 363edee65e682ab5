use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// World-space position and rotation of a scene object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// World-space position.
    #[serde(default)]
    pub position: Vec3,
    /// World-space rotation.
    #[serde(default = "identity")]
    pub rotation: Quat,
}

fn identity() -> Quat {
    Quat::IDENTITY
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl Transform {
    /// A transform at `position` with no rotation.
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Rotate around a world-space axis by `radians`.
    ///
    /// `axis` must be normalized.
    pub fn rotate_world(&mut self, axis: Vec3, radians: f32) {
        self.rotation = (Quat::from_axis_angle(axis, radians) * self.rotation).normalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn default_is_origin_identity() {
        let t = Transform::default();
        assert_eq!(t.position, Vec3::ZERO);
        assert_eq!(t.rotation, Quat::IDENTITY);
    }

    #[test]
    fn rotate_world_quarter_turn_about_up() {
        let mut t = Transform::default();
        t.rotate_world(Vec3::Y, FRAC_PI_2);
        let forward = t.rotation * Vec3::Z;
        assert!((forward - Vec3::X).length() < EPSILON, "{forward}");
    }

    #[test]
    fn rotations_apply_in_world_space() {
        let mut t = Transform::default();
        t.rotate_world(Vec3::X, FRAC_PI_2);
        t.rotate_world(Vec3::Y, FRAC_PI_2);
        // Local up goes to world +Z after the X turn, then to world +X after the Y turn.
        let up = t.rotation * Vec3::Y;
        assert!((up - Vec3::X).length() < EPSILON, "{up}");
    }

    #[test]
    fn missing_fields_default_in_json() {
        let t: Transform = serde_json::from_str(r#"{ "position": [1.0, 2.0, 3.0] }"#).unwrap();
        assert_eq!(t.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(t.rotation, Quat::IDENTITY);
    }
}
