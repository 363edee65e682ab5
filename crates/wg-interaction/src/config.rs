use glam::Vec3;
use serde::{Deserialize, Serialize};
use wg_core::AudioClip;

/// Configuration for the interaction controller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Maximum targeting distance.
    pub ray_distance: f32,
    /// Degrees of rotation per unit of pointer movement while inspecting.
    pub rotate_speed: f32,
    /// Seconds added to the narration length before the view can be finished.
    pub finish_padding: f32,
    /// Seconds before the view can be finished when the item has no narration.
    pub fallback_delay: f32,
    /// Smoothing rate of move transitions, per second.
    pub move_rate: f32,
    /// Nominal length of a move transition in seconds.
    pub move_duration: f32,
    /// Where grabbable objects are held while inspected.
    pub viewer_position: Vec3,
    /// Played when an item is added to the inventory.
    pub confirm_sound: Option<AudioClip>,
    /// Maximum event log size (oldest events dropped when exceeded). 0 = unlimited.
    pub max_events: usize,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            ray_distance: 2.0,
            rotate_speed: 200.0,
            finish_padding: 0.5,
            fallback_delay: 1.0,
            move_rate: 5.0,
            move_duration: 1.0,
            viewer_position: Vec3::new(0.0, 0.0, 0.5),
            confirm_sound: None,
            max_events: 0,
        }
    }
}

impl InteractionConfig {
    /// Set the maximum targeting distance.
    pub fn with_ray_distance(mut self, distance: f32) -> Self {
        self.ray_distance = distance;
        self
    }

    /// Set the inspection rotation speed in degrees per pointer unit.
    pub fn with_rotate_speed(mut self, speed: f32) -> Self {
        self.rotate_speed = speed;
        self
    }

    /// Set the delay used when an item has no narration.
    pub fn with_fallback_delay(mut self, seconds: f32) -> Self {
        self.fallback_delay = seconds;
        self
    }

    /// Set where grabbable objects are held while inspected.
    pub fn with_viewer_position(mut self, position: Vec3) -> Self {
        self.viewer_position = position;
        self
    }

    /// Set the sound played when an item is collected.
    pub fn with_confirm_sound(mut self, clip: AudioClip) -> Self {
        self.confirm_sound = Some(clip);
        self
    }

    /// Set the maximum event log size (0 = unlimited).
    pub fn with_max_events(mut self, max: usize) -> Self {
        self.max_events = max;
        self
    }

    /// Seconds until a view of an item with the given narration length can be finished.
    pub fn finish_delay(&self, audio_duration: Option<f32>) -> f32 {
        match audio_duration {
            Some(duration) => duration + self.finish_padding,
            None => self.fallback_delay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let config = InteractionConfig::default();
        assert!((config.ray_distance - 2.0).abs() < f32::EPSILON);
        assert!((config.rotate_speed - 200.0).abs() < f32::EPSILON);
        assert!((config.move_rate - 5.0).abs() < f32::EPSILON);
        assert!(config.confirm_sound.is_none());
        assert_eq!(config.max_events, 0);
    }

    #[test]
    fn config_builder_chain() {
        let config = InteractionConfig::default()
            .with_ray_distance(3.0)
            .with_rotate_speed(90.0)
            .with_max_events(100)
            .with_confirm_sound(AudioClip::new("pen", 0.4));
        assert!((config.ray_distance - 3.0).abs() < f32::EPSILON);
        assert!((config.rotate_speed - 90.0).abs() < f32::EPSILON);
        assert_eq!(config.max_events, 100);
        assert_eq!(config.confirm_sound.unwrap().name, "pen");
    }

    #[test]
    fn finish_delay_pads_audio_or_falls_back() {
        let config = InteractionConfig::default();
        assert!((config.finish_delay(Some(2.0)) - 2.5).abs() < f32::EPSILON);
        assert!((config.finish_delay(Some(0.0)) - 0.5).abs() < f32::EPSILON);
        assert!((config.finish_delay(None) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: InteractionConfig =
            serde_json::from_str(r#"{ "rotate_speed": 120.0, "viewer_position": [0.0, 1.5, 0.4] }"#)
                .unwrap();
        assert!((config.rotate_speed - 120.0).abs() < f32::EPSILON);
        assert_eq!(config.viewer_position, Vec3::new(0.0, 1.5, 0.4));
        assert!((config.fallback_delay - 1.0).abs() < f32::EPSILON);
    }
}
