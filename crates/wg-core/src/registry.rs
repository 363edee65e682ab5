use std::collections::HashMap;

use crate::catalog::ItemCatalog;
use crate::error::{CoreError, CoreResult};
use crate::interactable::{Interactable, InteractableDef, InteractableId};

/// Owns the interactables of the loaded level.
#[derive(Debug, Clone, Default)]
pub struct InteractableRegistry {
    interactables: HashMap<InteractableId, Interactable>,

    // Indexes
    order: Vec<InteractableId>,
    by_name_lower: HashMap<String, InteractableId>,
}

impl InteractableRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Instantiate every definition against the catalog.
    pub fn from_defs(defs: &[InteractableDef], catalog: &ItemCatalog) -> CoreResult<Self> {
        let mut registry = Self::new();
        for def in defs {
            registry.add(Interactable::from_def(def, catalog)?)?;
        }
        Ok(registry)
    }

    /// Register an interactable. Names must be unique (case-insensitive).
    pub fn add(&mut self, interactable: Interactable) -> CoreResult<InteractableId> {
        let name_lower = interactable.name.to_lowercase();
        if self.by_name_lower.contains_key(&name_lower) {
            return Err(CoreError::DuplicateInteractable(interactable.name.clone()));
        }

        let id = interactable.id;
        self.order.push(id);
        self.by_name_lower.insert(name_lower, id);
        self.interactables.insert(id, interactable);
        Ok(id)
    }

    /// Get an interactable by ID.
    pub fn get(&self, id: InteractableId) -> Option<&Interactable> {
        self.interactables.get(&id)
    }

    /// Get a mutable interactable by ID.
    pub fn get_mut(&mut self, id: InteractableId) -> Option<&mut Interactable> {
        self.interactables.get_mut(&id)
    }

    /// Find an interactable by name (case-insensitive).
    pub fn find_by_name(&self, name: &str) -> Option<&Interactable> {
        self.find_id_by_name(name)
            .and_then(|id| self.interactables.get(&id))
    }

    /// Find an interactable ID by name (case-insensitive).
    pub fn find_id_by_name(&self, name: &str) -> Option<InteractableId> {
        self.by_name_lower.get(&name.to_lowercase()).copied()
    }

    /// Remove an interactable.
    pub fn remove(&mut self, id: InteractableId) -> CoreResult<Interactable> {
        let interactable = self
            .interactables
            .remove(&id)
            .ok_or(CoreError::InteractableNotFound(id))?;
        self.by_name_lower.remove(&interactable.name.to_lowercase());
        self.order.retain(|&other| other != id);
        Ok(interactable)
    }

    /// Iterate in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Interactable> {
        self.order
            .iter()
            .filter_map(|id| self.interactables.get(id))
    }

    /// Number of registered interactables.
    pub fn len(&self) -> usize {
        self.interactables.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.interactables.is_empty()
    }
}
