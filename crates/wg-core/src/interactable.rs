use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::ItemCatalog;
use crate::error::CoreResult;
use crate::inventory::{Inventory, InventoryObserver};
use crate::item::{Item, ItemId};
use crate::transform::Transform;

/// Unique identifier for every interactable in a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InteractableId(pub Uuid);

impl InteractableId {
    /// Generate a new random interactable ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for InteractableId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for InteractableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// Conditional substitution: if `required` is held, it is consumed and the
/// interactable's item becomes `replacement`.
#[derive(Debug, Clone)]
pub struct PreviousItemRule {
    /// Item that must be in the inventory for the rule to match.
    pub required: Arc<Item>,
    /// Item the interactable switches to when the rule matches.
    pub replacement: Arc<Item>,
    /// Hook tags fired when the rule is applied.
    pub on_interact: Vec<String>,
}

/// An object in the level that can be targeted and interacted with.
#[derive(Debug, Clone)]
pub struct Interactable {
    /// Unique identifier.
    pub id: InteractableId,
    /// Display name, unique within a level (case-insensitive).
    pub name: String,
    /// The item presented when interacting, if any.
    pub item: Option<Arc<Item>>,
    /// Previous-item rules, evaluated in declaration order.
    pub rules: Vec<PreviousItemRule>,
    /// Hook tags fired on every interaction.
    pub on_interact: Vec<String>,
    /// Hook tags fired when the presented item is collected.
    pub on_collect: Vec<String>,
    /// Current world-space transform.
    pub transform: Transform,
    /// True while a move transition owns the transform.
    pub is_moving: bool,
}

impl Interactable {
    /// Create an interactable with a random ID and no item.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: InteractableId::new(),
            name: name.into(),
            item: None,
            rules: Vec::new(),
            on_interact: Vec::new(),
            on_collect: Vec::new(),
            transform: Transform::default(),
            is_moving: false,
        }
    }

    /// Set the presented item.
    pub fn with_item(mut self, item: Arc<Item>) -> Self {
        self.item = Some(item);
        self
    }

    /// Append a previous-item rule.
    pub fn with_rule(mut self, rule: PreviousItemRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Set the transform.
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Index of the first rule whose required item is held.
    pub fn matching_rule(&self, inventory: &Inventory) -> Option<usize> {
        self.rules
            .iter()
            .position(|rule| inventory.contains(&rule.required.id))
    }

    /// Apply the first matching rule: consume the required item and switch
    /// to the replacement. Later matching rules are ignored.
    ///
    /// Returns the index of the applied rule.
    pub fn apply_first_rule(
        &mut self,
        inventory: &mut Inventory,
        observer: &mut dyn InventoryObserver,
    ) -> Option<usize> {
        let index = self.matching_rule(inventory)?;
        let rule = &self.rules[index];
        inventory.remove(&rule.required.id, observer);
        self.item = Some(Arc::clone(&rule.replacement));
        Some(index)
    }

    /// Resolve an authored definition against the catalog.
    pub fn from_def(def: &InteractableDef, catalog: &ItemCatalog) -> CoreResult<Self> {
        let owner = format!("interactable \"{}\"", def.name);
        let item = def
            .item
            .as_ref()
            .map(|id| catalog.require(id, owner.as_str()))
            .transpose()?;
        let rules = def
            .rules
            .iter()
            .map(|rule| -> CoreResult<PreviousItemRule> {
                Ok(PreviousItemRule {
                    required: catalog.require(&rule.required, owner.as_str())?,
                    replacement: catalog.require(&rule.replacement, owner.as_str())?,
                    on_interact: rule.on_interact.clone(),
                })
            })
            .collect::<CoreResult<Vec<_>>>()?;

        Ok(Self {
            id: InteractableId::new(),
            name: def.name.clone(),
            item,
            rules,
            on_interact: def.on_interact.clone(),
            on_collect: def.on_collect.clone(),
            transform: def.transform,
            is_moving: false,
        })
    }
}

/// Authored form of a previous-item rule, referencing items by ID.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleDef {
    /// ID of the item that must be held.
    pub required: ItemId,
    /// ID of the item to switch to.
    pub replacement: ItemId,
    /// Hook tags fired when the rule is applied.
    #[serde(default)]
    pub on_interact: Vec<String>,
}

/// Authored form of an interactable, referencing items by ID.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractableDef {
    /// Display name.
    pub name: String,
    /// ID of the presented item.
    #[serde(default)]
    pub item: Option<ItemId>,
    /// Previous-item rules in evaluation order.
    #[serde(default)]
    pub rules: Vec<RuleDef>,
    /// Hook tags fired on every interaction.
    #[serde(default)]
    pub on_interact: Vec<String>,
    /// Hook tags fired when the item is collected.
    #[serde(default)]
    pub on_collect: Vec<String>,
    /// Initial transform.
    #[serde(default)]
    pub transform: Transform,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use proptest::prelude::*;

    fn item(id: &str) -> Arc<Item> {
        Arc::new(Item::new(id))
    }

    fn rule(required: &str, replacement: &str) -> PreviousItemRule {
        PreviousItemRule {
            required: item(required),
            replacement: item(replacement),
            on_interact: vec![format!("{required}->{replacement}")],
        }
    }

    #[test]
    fn interactable_id_display_shows_short_form() {
        let id = InteractableId(Uuid::parse_str("a3f2b1c8-1234-5678-9abc-def012345678").unwrap());
        assert_eq!(id.to_string(), "a3f2b1c8");
    }

    #[test]
    fn no_rule_matches_on_empty_inventory() {
        let door = Interactable::new("Door")
            .with_item(item("locked_door"))
            .with_rule(rule("key", "open_door"));
        assert_eq!(door.matching_rule(&Inventory::new()), None);
    }

    #[test]
    fn rule_consumes_required_and_swaps_item() {
        let mut inv = Inventory::new();
        inv.add(item("key"), &mut ());
        let mut door = Interactable::new("Door")
            .with_item(item("locked_door"))
            .with_rule(rule("key", "open_door"));

        assert_eq!(door.apply_first_rule(&mut inv, &mut ()), Some(0));
        assert!(inv.is_empty());
        assert_eq!(door.item.as_ref().unwrap().id.as_str(), "open_door");

        // The key is gone, so the rule cannot match a second time.
        assert_eq!(door.apply_first_rule(&mut inv, &mut ()), None);
    }

    #[test]
    fn from_def_resolves_items() {
        let catalog = ItemCatalog::from_items(vec![
            Item::new("locked_door"),
            Item::new("key"),
            Item::new("open_door"),
        ])
        .unwrap();
        let def: InteractableDef = serde_json::from_str(
            r#"{
                "name": "Door",
                "item": "locked_door",
                "rules": [{ "required": "key", "replacement": "open_door", "on_interact": ["unlock"] }],
                "on_collect": ["collected"]
            }"#,
        )
        .unwrap();
        let door = Interactable::from_def(&def, &catalog).unwrap();
        assert_eq!(door.name, "Door");
        assert_eq!(door.rules.len(), 1);
        assert_eq!(door.rules[0].on_interact, vec!["unlock".to_string()]);
        assert_eq!(door.on_collect, vec!["collected".to_string()]);
        assert!(!door.is_moving);
    }

    #[test]
    fn from_def_rejects_unknown_rule_item() {
        let catalog = ItemCatalog::from_items(vec![Item::new("locked_door")]).unwrap();
        let def: InteractableDef = serde_json::from_str(
            r#"{ "name": "Door", "item": "locked_door", "rules": [{ "required": "key", "replacement": "locked_door" }] }"#,
        )
        .unwrap();
        let err = Interactable::from_def(&def, &catalog).unwrap_err();
        assert!(matches!(err, CoreError::UnknownItem { item, .. } if item.as_str() == "key"));
    }

    proptest! {
        #[test]
        fn first_matching_rule_wins(
            rule_keys in proptest::collection::vec(0u8..6, 1..8),
            held in proptest::collection::btree_set(0u8..6, 0..6),
        ) {
            let mut inv = Inventory::new();
            for key in &held {
                inv.add(item(&format!("k{key}")), &mut ());
            }
            let mut target = Interactable::new("Target").with_item(item("initial"));
            for (i, key) in rule_keys.iter().enumerate() {
                target = target.with_rule(rule(&format!("k{key}"), &format!("r{i}")));
            }

            let expected = rule_keys.iter().position(|k| held.contains(k));
            let applied = target.apply_first_rule(&mut inv, &mut ());
            prop_assert_eq!(applied, expected);

            match expected {
                Some(i) => {
                    let replacement = format!("r{i}");
                    let consumed = ItemId::new(format!("k{}", rule_keys[i]));
                    prop_assert_eq!(target.item.as_ref().unwrap().id.as_str(), replacement.as_str());
                    prop_assert!(!inv.contains(&consumed));
                    prop_assert_eq!(inv.len(), held.len() - 1);
                }
                None => {
                    prop_assert_eq!(target.item.as_ref().unwrap().id.as_str(), "initial");
                    prop_assert_eq!(inv.len(), held.len());
                }
            }
        }
    }
}
