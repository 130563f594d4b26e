use std::fmt::{Debug, Display};

use crate::error::StoreError;

// =============================================================================
// 1. THE ABSTRACTION (Trait with Hooks and Actions)
// =============================================================================

/// Trait that any domain entity must implement to be managed by a [`ResourceStore`].
pub trait Entity: Debug + Sized {
    type Id: Eq + Clone + Display + Debug;
    type CreateParams: Debug;

    type Action: Debug;
    type ActionResult: Debug;

    /// Get the ID of the entity
    fn id(&self) -> &Self::Id;

    /// Construct the full Entity from the freshly allocated ID and the params
    fn from_create(id: Self::Id, params: Self::CreateParams) -> Self;

    // --- Lifecycle Hooks ---

    fn on_create(&mut self) {}
    fn on_delete(&self) {}

    /// Handle a custom domain-specific action
    fn handle_action(&mut self, action: Self::Action) -> Self::ActionResult;
}

// =============================================================================
// 2. THE GENERIC STORE
// =============================================================================

/// Insertion-ordered, single-owner collection of entities.
///
/// The store owns its id generator. Ids are drawn from it exactly once per
/// `create`, so deleting an entity never frees its id for reuse.
pub struct ResourceStore<T: Entity> {
    items: Vec<T>,
    next_id_fn: Box<dyn FnMut() -> T::Id>,
}

impl<T: Entity> ResourceStore<T> {
    pub fn new(next_id_fn: impl FnMut() -> T::Id + 'static) -> Self {
        Self {
            items: Vec::new(),
            next_id_fn: Box::new(next_id_fn),
        }
    }

    pub fn create(&mut self, params: T::CreateParams) -> T::Id {
        let id = (self.next_id_fn)();
        let mut item = T::from_create(id.clone(), params);
        item.on_create();
        self.items.push(item);
        id
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn get_mut(&mut self, id: &T::Id) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    pub fn delete(&mut self, id: &T::Id) -> Result<T, StoreError> {
        let position = self
            .items
            .iter()
            .position(|item| item.id() == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        self.items[position].on_delete();
        Ok(self.items.remove(position))
    }

    pub fn perform_action(&mut self, id: &T::Id, action: T::Action) -> Result<T::ActionResult, StoreError> {
        match self.get_mut(id) {
            Some(item) => Ok(item.handle_action(action)),
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

// =============================================================================
// 3. EXAMPLE USAGE (Test)
// =============================================================================
