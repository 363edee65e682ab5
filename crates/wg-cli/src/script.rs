//! Input scripts for headless replay.
//!
//! A script is a JSON document listing steps. Each step may aim the
//! crosshair, enter a zone, and then hold a set of inputs for a number of
//! frames.

use std::path::Path;

use glam::Vec2;
use serde::Deserialize;
use wg_interaction::InputState;

/// How the game is started before the first step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Start {
    /// Clear progress and load the first level.
    #[default]
    NewGame,
    /// Resume from recorded progress.
    Continue,
}

/// State of the primary action during a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Primary {
    /// Goes down on the first frame and stays held.
    Click,
    /// Held for every frame without a fresh press.
    Held,
}

fn one() -> u32 {
    1
}

/// One scripted step.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Step {
    /// Aim at the interactable with this name from now on.
    pub target: Option<String>,
    /// Stop aiming at anything.
    pub look_away: bool,
    /// Zone entered before the step's frames run.
    pub enter_zone: Option<String>,
    /// Primary action.
    pub primary: Option<Primary>,
    /// Hold the secondary action.
    pub secondary: bool,
    /// Pointer movement per frame.
    pub pointer: Option<[f32; 2]>,
    /// Press the inventory toggle on the first frame.
    pub toggle_inventory: bool,
    /// Number of frames to run.
    #[serde(default = "one")]
    pub frames: u32,
}

impl Step {
    /// Input for the `index`-th frame of this step.
    pub fn input(&self, index: u32) -> InputState {
        let first = index == 0;
        let [x, y] = self.pointer.unwrap_or_default();
        InputState {
            primary_pressed: first && self.primary == Some(Primary::Click),
            primary_held: self.primary.is_some(),
            secondary_held: self.secondary,
            pointer_delta: Vec2::new(x, y),
            toggle_inventory: first && self.toggle_inventory,
        }
    }
}

fn default_frame_delta() -> f32 {
    0.1
}

/// A complete input script.
#[derive(Debug, Clone, Deserialize)]
pub struct Script {
    /// Seconds per frame.
    #[serde(default = "default_frame_delta")]
    pub frame_delta: f32,
    /// How the game starts.
    #[serde(default)]
    pub start: Start,
    /// Steps in order.
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Script {
    /// Read and parse a script file.
    pub fn load(path: &Path) -> Result<Self, String> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
        serde_json::from_str(&json).map_err(|e| format!("invalid script {}: {e}", path.display()))
    }
}
