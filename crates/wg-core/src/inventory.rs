//! The player's inventory.

use std::sync::Arc;

use crate::item::{Item, ItemId};

/// Receives inventory change notifications.
///
/// The presentation layer implements this to keep its slots in sync.
pub trait InventoryObserver {
    /// An item was appended at `index`.
    fn item_added(&mut self, _item: &Item, _index: usize) {}

    /// The inventory changed in a way that invalidates slot positions.
    fn inventory_changed(&mut self, _items: &[Arc<Item>]) {}
}

/// Discards every notification.
impl InventoryObserver for () {}

/// Ordered collection of collected items. Insertion order is collection
/// order, and an item is never held twice.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    items: Vec<Arc<Item>>,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the inventory holds the item with this ID.
    pub fn contains(&self, id: &ItemId) -> bool {
        self.items.iter().any(|item| &item.id == id)
    }

    /// Add an item. Returns the slot index, or `None` if it was already held.
    pub fn add(&mut self, item: Arc<Item>, observer: &mut dyn InventoryObserver) -> Option<usize> {
        if self.contains(&item.id) {
            return None;
        }
        let index = self.items.len();
        observer.item_added(&item, index);
        self.items.push(item);
        Some(index)
    }

    /// Remove an item. Returns false if it was not held.
    pub fn remove(&mut self, id: &ItemId, observer: &mut dyn InventoryObserver) -> bool {
        let Some(pos) = self.items.iter().position(|item| &item.id == id) else {
            return false;
        };
        self.items.remove(pos);
        observer.inventory_changed(&self.items);
        true
    }

    /// Drop every item.
    pub fn clear(&mut self, observer: &mut dyn InventoryObserver) {
        self.items.clear();
        observer.inventory_changed(&self.items);
    }

    /// Items in collection order.
    pub fn items(&self) -> &[Arc<Item>] {
        &self.items
    }

    /// IDs in collection order.
    pub fn ids(&self) -> Vec<ItemId> {
        self.items.iter().map(|item| item.id.clone()).collect()
    }

    /// Number of held items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing is held.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Default)]
    struct Recorder {
        added: Vec<(ItemId, usize)>,
        refreshed: Vec<Vec<ItemId>>,
    }

    impl InventoryObserver for Recorder {
        fn item_added(&mut self, item: &Item, index: usize) {
            self.added.push((item.id.clone(), index));
        }

        fn inventory_changed(&mut self, items: &[Arc<Item>]) {
            self.refreshed
                .push(items.iter().map(|i| i.id.clone()).collect());
        }
    }

    fn item(id: &str) -> Arc<Item> {
        Arc::new(Item::new(id))
    }

    #[test]
    fn add_appends_and_notifies_index() {
        let mut inv = Inventory::new();
        let mut rec = Recorder::default();
        assert_eq!(inv.add(item("a"), &mut rec), Some(0));
        assert_eq!(inv.add(item("b"), &mut rec), Some(1));
        assert_eq!(inv.ids(), vec![ItemId::new("a"), ItemId::new("b")]);
        assert_eq!(
            rec.added,
            vec![(ItemId::new("a"), 0), (ItemId::new("b"), 1)]
        );
    }

    #[test]
    fn add_duplicate_is_silent() {
        let mut inv = Inventory::new();
        let mut rec = Recorder::default();
        inv.add(item("a"), &mut rec);
        assert_eq!(inv.add(item("a"), &mut rec), None);
        assert_eq!(inv.len(), 1);
        assert_eq!(rec.added.len(), 1);
    }

    #[test]
    fn remove_notifies_refreshed_list() {
        let mut inv = Inventory::new();
        let mut rec = Recorder::default();
        inv.add(item("a"), &mut ());
        inv.add(item("b"), &mut ());
        assert!(inv.remove(&ItemId::new("a"), &mut rec));
        assert_eq!(rec.refreshed, vec![vec![ItemId::new("b")]]);
    }

    #[test]
    fn remove_absent_is_silent() {
        let mut inv = Inventory::new();
        let mut rec = Recorder::default();
        inv.add(item("a"), &mut ());
        assert!(!inv.remove(&ItemId::new("zzz"), &mut rec));
        assert_eq!(inv.len(), 1);
        assert!(rec.refreshed.is_empty());
    }

    #[test]
    fn clear_empties_and_notifies() {
        let mut inv = Inventory::new();
        let mut rec = Recorder::default();
        inv.add(item("a"), &mut ());
        inv.clear(&mut rec);
        assert!(inv.is_empty());
        assert_eq!(rec.refreshed, vec![Vec::<ItemId>::new()]);
    }

    proptest! {
        #[test]
        fn add_is_idempotent(ids in proptest::collection::vec("[a-e]", 0..20)) {
            let mut inv = Inventory::new();
            for id in &ids {
                inv.add(item(id), &mut ());
            }
            let before = inv.ids();
            for id in &ids {
                prop_assert_eq!(inv.add(item(id), &mut ()), None);
            }
            prop_assert_eq!(inv.ids(), before.clone());

            let mut unique = before.clone();
            unique.sort();
            unique.dedup();
            prop_assert_eq!(unique.len(), before.len());
        }

        #[test]
        fn remove_absent_leaves_inventory_unchanged(
            ids in proptest::collection::vec("[a-e]", 0..10),
            absent in "[f-j]",
        ) {
            let mut inv = Inventory::new();
            for id in &ids {
                inv.add(item(id), &mut ());
            }
            let before = inv.ids();
            prop_assert!(!inv.remove(&ItemId::new(absent), &mut ()));
            prop_assert_eq!(inv.ids(), before);
        }
    }
}
