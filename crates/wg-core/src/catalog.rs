use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::item::{Item, ItemId};

/// The static set of authored items. Built once at load time, never mutated.
///
/// Items are handed out as `Arc<Item>` so the inventory and interactables can
/// hold references without copying the records.
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    items: Vec<Arc<Item>>,
    by_id: HashMap<ItemId, usize>,
}

impl ItemCatalog {
    /// Build a catalog from a list of items. Fails on duplicate IDs.
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> CoreResult<Self> {
        let mut catalog = Self::default();
        for item in items {
            if catalog.by_id.contains_key(&item.id) {
                return Err(CoreError::DuplicateItem(item.id));
            }
            catalog.by_id.insert(item.id.clone(), catalog.items.len());
            catalog.items.push(Arc::new(item));
        }
        Ok(catalog)
    }

    /// Parse a JSON array of items.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let items: Vec<Item> = serde_json::from_str(json)?;
        Self::from_items(items)
    }

    /// Look up an item by ID.
    pub fn get(&self, id: &ItemId) -> Option<Arc<Item>> {
        self.by_id.get(id).map(|&i| Arc::clone(&self.items[i]))
    }

    /// Look up an item that authored data refers to.
    ///
    /// `referenced_by` names the referencing record in the error message.
    pub fn require(&self, id: &ItemId, referenced_by: impl Into<String>) -> CoreResult<Arc<Item>> {
        self.get(id).ok_or_else(|| CoreError::UnknownItem {
            item: id.clone(),
            referenced_by: referenced_by.into(),
        })
    }

    /// Returns true if an item with this ID exists.
    pub fn contains(&self, id: &ItemId) -> bool {
        self.by_id.contains_key(id)
    }

    /// Iterate over items in authored order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Item>> {
        self.items.iter()
    }

    /// Number of items in the catalog.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the catalog holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_items_preserves_order() {
        let catalog =
            ItemCatalog::from_items(vec![Item::new("b"), Item::new("a"), Item::new("c")]).unwrap();
        let ids: Vec<_> = catalog.iter().map(|i| i.id.as_str().to_string()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn duplicate_ids_rejected() {
        let result = ItemCatalog::from_items(vec![Item::new("key"), Item::new("key")]);
        assert!(matches!(result, Err(CoreError::DuplicateItem(id)) if id.as_str() == "key"));
    }

    #[test]
    fn get_returns_shared_record() {
        let catalog = ItemCatalog::from_items(vec![Item::new("key")]).unwrap();
        let a = catalog.get(&ItemId::new("key")).unwrap();
        let b = catalog.get(&ItemId::new("key")).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert!(catalog.get(&ItemId::new("door")).is_none());
    }

    #[test]
    fn require_reports_referencing_record() {
        let catalog = ItemCatalog::default();
        let err = catalog
            .require(&ItemId::new("ghost"), "interactable \"Desk\"")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown item \"ghost\" referenced by interactable \"Desk\""
        );
    }

    #[test]
    fn from_json_parses_array() {
        let catalog = ItemCatalog::from_json(
            r#"[{ "id": "key", "collectible": true }, { "id": "door" }]"#,
        )
        .unwrap();
        assert!(catalog.contains(&ItemId::new("key")));
        assert!(catalog.get(&ItemId::new("key")).unwrap().collectible);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn from_json_rejects_garbage() {
        assert!(matches!(
            ItemCatalog::from_json("{ not json"),
            Err(CoreError::Json(_))
        ));
    }
}
