//! Levels, HUD, progress and menu for Wandelgang.
//!
//! This crate turns the interaction state machine into a playable game:
//! [`GameContent`] is loaded from JSON, [`Game`] loads levels into an
//! interactable registry and drives the [`InteractionController`] with a
//! headless [`Hud`] as its presentation gateway. Level progress is kept
//! under a single key in a [`KeyValueStore`].
//!
//! [`InteractionController`]: wg_interaction::InteractionController

/// Error types for scene operations.
pub mod error;
/// The game orchestrator.
pub mod game;
/// Headless heads-up display.
pub mod hud;
/// Authored content and level definitions.
pub mod level;
/// Main menu.
pub mod menu;
/// Persisted level progress.
pub mod progress;
/// Zone triggers.
pub mod triggers;

/// Re-export error types.
pub use error::{SceneError, SceneResult};
/// Re-export game types.
pub use game::{Game, parse_level_tag};
/// Re-export HUD types.
pub use hud::{DEFAULT_SLOTS, FadingText, Hud, Slot};
/// Re-export content types.
pub use level::{ContentSummary, ExitDef, FIRST_LEVEL, GameContent, LevelDef, LevelId, ScareDef};
/// Re-export menu types.
pub use menu::{MainMenu, MenuAction};
/// Re-export progress types.
pub use progress::{CURRENT_LEVEL_KEY, JsonFileStore, KeyValueStore, LevelProgress, MemoryStore};
/// Re-export trigger types.
pub use triggers::{ExitTrigger, ScareTrigger, Triggers, ZoneOutcome};
