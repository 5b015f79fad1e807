//! # Component Storage
//!
//! Sparse-set storage for a single component type.
//!
//! The storage keeps three collections in lockstep:
//! - `values`: the dense, gap-free array of components (cache-friendly iteration)
//! - `ids`: the owning entity of each dense slot, parallel to `values`
//! - `index`: entity id -> dense slot, for O(1) point access
//!
//! ```text
//!   index:  { 7 -> 0, 3 -> 1, 9 -> 2 }
//!   ids:    [ 7 | 3 | 9 ]
//!   values: [ a | b | c ]
//!
//!   delete(7): slot 0 takes the last entry, index[9] = 0
//!   ids:    [ 9 | 3 ]
//!   values: [ c | b ]
//! ```
//!
//! Deletion is a swap-remove: O(1), but the previously last entry moves into
//! the freed slot, so iteration order is insertion order perturbed by every
//! delete that did not hit the tail.

use std::any::Any;
use std::collections::HashMap;

use super::component::Component;
use super::entity::EntityId;

/// Dense storage for one component type.
///
/// # Type Parameters
///
/// * `C` - The component type to store
///
/// # Example
///
/// ```rust
/// use sparse_ecs::{ComponentStorage, EntityId};
///
/// let mut storage: ComponentStorage<f32> = ComponentStorage::new();
/// storage.write(EntityId::new(4), 1.5);
/// assert_eq!(storage.get(EntityId::new(4)), Some(&1.5));
/// ```
#[derive(Clone, Debug)]
pub struct ComponentStorage<C> {
    /// The dense array of components.
    values: Vec<C>,
    /// Owner of each dense slot.
    ids: Vec<EntityId>,
    /// Entity id to dense slot.
    index: HashMap<EntityId, usize>,
}

impl<C: Component> Default for ComponentStorage<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Component> ComponentStorage<C> {
    /// Creates an empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            ids: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Creates an empty storage with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
            ids: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Returns the number of live components.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no entity has this component.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns `true` if `id` has a component in this storage.
    #[inline]
    #[must_use]
    pub fn contains(&self, id: EntityId) -> bool {
        self.index.contains_key(&id)
    }

    /// Gets the component for `id`.
    #[inline]
    #[must_use]
    pub fn get(&self, id: EntityId) -> Option<&C> {
        self.index.get(&id).map(|&slot| &self.values[slot])
    }

    /// Gets the component for `id` mutably.
    #[inline]
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut C> {
        let slot = *self.index.get(&id)?;
        Some(&mut self.values[slot])
    }

    /// Reads a copy of the component for `id`.
    ///
    /// # Returns
    ///
    /// `(value, true)` if present, `(C::default(), false)` otherwise.
    #[inline]
    #[must_use]
    pub fn read(&self, id: EntityId) -> (C, bool)
    where
        C: Clone + Default,
    {
        match self.get(id) {
            Some(component) => (component.clone(), true),
            None => (C::default(), false),
        }
    }

    /// Inserts or overwrites the component for `id`.
    ///
    /// An existing component is replaced in place and keeps its slot. A new
    /// one is appended to the end of the dense array.
    ///
    /// # Returns
    ///
    /// The previous component, if `id` already had one.
    pub fn write(&mut self, id: EntityId, component: C) -> Option<C> {
        if let Some(&slot) = self.index.get(&id) {
            return Some(std::mem::replace(&mut self.values[slot], component));
        }

        self.index.insert(id, self.values.len());
        self.values.push(component);
        self.ids.push(id);
        None
    }

    /// Removes the component for `id` by swap-remove.
    ///
    /// A no-op if `id` has no component. Otherwise the last dense entry is
    /// moved into the freed slot, which changes iteration order.
    ///
    /// # Returns
    ///
    /// The removed component, if there was one.
    pub fn delete(&mut self, id: EntityId) -> Option<C> {
        let slot = self.index.remove(&id)?;

        let removed = self.values.swap_remove(slot);
        self.ids.swap_remove(slot);

        // Unless we removed the tail, the old last entry now sits at `slot`.
        if let Some(&moved) = self.ids.get(slot) {
            self.index.insert(moved, slot);
        }

        Some(removed)
    }

    /// Calls `f` once per live component, front to back in dense order.
    ///
    /// The storage is borrowed for the whole pass, so `f` cannot mutate it.
    #[inline]
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(EntityId, &C),
    {
        for (&id, component) in self.ids.iter().zip(&self.values) {
            f(id, component);
        }
    }

    /// Iterates over `(id, component)` pairs in dense order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &C)> {
        self.ids.iter().copied().zip(self.values.iter())
    }

    /// Iterates mutably over `(id, component)` pairs in dense order.
    #[inline]
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (EntityId, &mut C)> {
        self.ids.iter().copied().zip(self.values.iter_mut())
    }

    /// Returns the owning ids, parallel to [`ComponentStorage::as_slice`].
    #[inline]
    #[must_use]
    pub fn ids(&self) -> &[EntityId] {
        &self.ids
    }

    /// Returns the dense component array.
    ///
    /// Useful for batch processing.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[C] {
        &self.values
    }

    /// Returns the dense component array mutably.
    ///
    /// Values can be changed but not added or removed, so the id mapping
    /// stays valid.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [C] {
        &mut self.values
    }

    /// Removes every component, keeping allocated capacity.
    pub fn clear(&mut self) {
        self.values.clear();
        self.ids.clear();
        self.index.clear();
    }

    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        assert_eq!(self.values.len(), self.ids.len());
        assert_eq!(self.index.len(), self.ids.len());
        for (&id, &slot) in &self.index {
            assert_eq!(self.ids[slot], id, "index entry for {id} points at wrong slot");
        }
        for (slot, id) in self.ids.iter().enumerate() {
            assert_eq!(self.index.get(id), Some(&slot), "slot {slot} missing from index");
        }
    }
}

/// Type-erased view of a [`ComponentStorage`].
///
/// Every storage exposes these operations regardless of its component type,
/// which lets the registry delete an entity from all stores without knowing
/// which types exist. The typed storage is recovered through
/// [`ErasedStorage::as_any`] / [`ErasedStorage::as_any_mut`].
pub trait ErasedStorage: Any + Send + Sync {
    /// Removes the component for `id`, if any.
    ///
    /// Returns `true` if a component was removed.
    fn delete_by_id(&mut self, id: EntityId) -> bool;

    /// Returns `true` if `id` has a component in this storage.
    fn contains_id(&self, id: EntityId) -> bool;

    /// Returns the number of live components.
    fn len(&self) -> usize;

    /// Returns `true` if the storage holds no components.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every component.
    fn clear(&mut self);

    /// Name of the stored component type, for diagnostics.
    fn component_name(&self) -> &'static str;

    /// Upcast for downcasting to the typed storage.
    fn as_any(&self) -> &dyn Any;

    /// Mutable upcast for downcasting to the typed storage.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<C: Component> ErasedStorage for ComponentStorage<C> {
    #[inline]
    fn delete_by_id(&mut self, id: EntityId) -> bool {
        self.delete(id).is_some()
    }

    #[inline]
    fn contains_id(&self, id: EntityId) -> bool {
        self.contains(id)
    }

    #[inline]
    fn len(&self) -> usize {
        self.values.len()
    }

    fn clear(&mut self) {
        ComponentStorage::clear(self);
    }

    fn component_name(&self) -> &'static str {
        C::type_name()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
