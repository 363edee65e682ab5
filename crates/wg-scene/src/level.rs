//! Authored game content: items, levels and their triggers.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use wg_core::{AudioClip, InteractableDef, InteractableRegistry, Item, ItemCatalog};
use wg_interaction::InteractionConfig;

use crate::error::{SceneError, SceneResult};
use crate::hud::DEFAULT_SLOTS;

/// Numeric level identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelId(pub u32);

impl fmt::Display for LevelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Level loaded by a new game.
pub const FIRST_LEVEL: LevelId = LevelId(1);

/// Entering `zone` loads level `go_to`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExitDef {
    /// Zone name reported by the host.
    pub zone: String,
    /// Level to load.
    pub go_to: LevelId,
}

/// The first entry into `zone` fires the `on_scare` hook tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScareDef {
    /// Zone name reported by the host.
    pub zone: String,
    /// Hook tags fired on the first entry.
    #[serde(default)]
    pub on_scare: Vec<String>,
}

/// One level of authored content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelDef {
    /// Level number.
    pub id: LevelId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Interactables placed in the level.
    #[serde(default)]
    pub interactables: Vec<InteractableDef>,
    /// Zone exits.
    #[serde(default)]
    pub exits: Vec<ExitDef>,
    /// One-shot scare zones.
    #[serde(default)]
    pub scares: Vec<ScareDef>,
}

impl LevelDef {
    /// Build the level's interactable registry.
    pub fn build_registry(&self, catalog: &ItemCatalog) -> SceneResult<InteractableRegistry> {
        Ok(InteractableRegistry::from_defs(&self.interactables, catalog)?)
    }
}

fn default_slots() -> usize {
    DEFAULT_SLOTS
}

/// Everything a game needs, as loaded from a content file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameContent {
    /// Interaction tuning.
    #[serde(default)]
    pub config: InteractionConfig,
    /// Number of HUD inventory slots.
    #[serde(default = "default_slots")]
    pub inventory_slots: usize,
    /// Sound played when a menu action starts the game.
    #[serde(default)]
    pub click_sound: Option<AudioClip>,
    /// Item catalog.
    #[serde(default)]
    pub items: Vec<Item>,
    /// Levels in authoring order.
    #[serde(default)]
    pub levels: Vec<LevelDef>,
}

/// Counts reported after validating content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentSummary {
    /// Number of catalog items.
    pub items: usize,
    /// Number of levels.
    pub levels: usize,
    /// Interactables across every level.
    pub interactables: usize,
}

impl GameContent {
    /// Parse content from JSON.
    pub fn from_json(json: &str) -> SceneResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a content file.
    pub fn load(path: &Path) -> SceneResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Build the item catalog.
    pub fn catalog(&self) -> SceneResult<ItemCatalog> {
        Ok(ItemCatalog::from_items(self.items.iter().cloned())?)
    }

    /// Look up a level.
    pub fn level(&self, id: LevelId) -> SceneResult<&LevelDef> {
        self.levels
            .iter()
            .find(|level| level.id == id)
            .ok_or(SceneError::LevelNotFound(id))
    }

    /// Check every cross-reference: item ids, interactable names, level ids
    /// and exit targets.
    pub fn validate(&self) -> SceneResult<ContentSummary> {
        let catalog = self.catalog()?;

        let mut seen = HashSet::new();
        for level in &self.levels {
            if !seen.insert(level.id) {
                return Err(SceneError::DuplicateLevel(level.id));
            }
        }

        let mut interactables = 0;
        for level in &self.levels {
            interactables += level.build_registry(&catalog)?.len();
            for exit in &level.exits {
                if !seen.contains(&exit.go_to) {
                    return Err(SceneError::LevelNotFound(exit.go_to));
                }
            }
        }

        Ok(ContentSummary {
            items: catalog.len(),
            levels: self.levels.len(),
            interactables,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wg_core::CoreError;

    const CONTENT: &str = r#"{
        "inventory_slots": 4,
        "items": [
            { "id": "key", "collectible": true, "collect_message": "Found a key" },
            { "id": "locked", "text": "Locked." },
            { "id": "open", "text": "It opens." }
        ],
        "levels": [
            {
                "id": 1,
                "name": "Hallway",
                "interactables": [
                    { "name": "Key", "item": "key" },
                    {
                        "name": "Door",
                        "item": "locked",
                        "rules": [{ "required": "key", "replacement": "open" }]
                    }
                ],
                "exits": [{ "zone": "stairs", "go_to": 2 }],
                "scares": [{ "zone": "closet", "on_scare": ["whisper"] }]
            },
            { "id": 2, "name": "Attic" }
        ]
    }"#;

    #[test]
    fn parses_with_defaults() {
        let content = GameContent::from_json(CONTENT).unwrap();
        assert_eq!(content.inventory_slots, 4);
        assert!((content.config.ray_distance - 2.0).abs() < f32::EPSILON);
        assert!(content.click_sound.is_none());
        assert_eq!(content.level(LevelId(2)).unwrap().name, "Attic");

        let empty = GameContent::from_json("{}").unwrap();
        assert_eq!(empty.inventory_slots, DEFAULT_SLOTS);
    }

    #[test]
    fn validate_counts_everything() {
        let summary = GameContent::from_json(CONTENT).unwrap().validate().unwrap();
        assert_eq!(
            summary,
            ContentSummary {
                items: 3,
                levels: 2,
                interactables: 2
            }
        );
    }

    #[test]
    fn missing_level_is_an_error() {
        let content = GameContent::from_json(CONTENT).unwrap();
        assert!(matches!(
            content.level(LevelId(9)),
            Err(SceneError::LevelNotFound(LevelId(9)))
        ));
    }

    #[test]
    fn validate_rejects_dangling_exit() {
        let mut content = GameContent::from_json(CONTENT).unwrap();
        content.levels.pop();
        assert!(matches!(
            content.validate(),
            Err(SceneError::LevelNotFound(LevelId(2)))
        ));
    }

    #[test]
    fn validate_rejects_duplicate_level() {
        let mut content = GameContent::from_json(CONTENT).unwrap();
        let copy = content.levels[1].clone();
        content.levels.push(copy);
        assert!(matches!(
            content.validate(),
            Err(SceneError::DuplicateLevel(LevelId(2)))
        ));
    }

    #[test]
    fn validate_rejects_unknown_item() {
        let mut content = GameContent::from_json(CONTENT).unwrap();
        content.items.retain(|item| item.id.as_str() != "open");
        assert!(matches!(
            content.validate(),
            Err(SceneError::Core(CoreError::UnknownItem { .. }))
        ));
    }

    #[test]
    fn malformed_json_is_reported() {
        assert!(matches!(
            GameContent::from_json("{ \"levels\": 3 }"),
            Err(SceneError::Json(_))
        ));
    }
}
