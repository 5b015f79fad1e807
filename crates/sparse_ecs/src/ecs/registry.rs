//! # ECS Registry
//!
//! The owner of every component store plus the entity id allocator.
//!
//! Stores are keyed by the component's `TypeId` and created lazily the first
//! time any operation names their type. They live as long as the registry
//! and are never removed.
//!
//! ## Dispatch
//!
//! ```text
//!   write::<Position>(id, p) ──► TypeId::of::<Position>() ──► downcast ──► ComponentStorage<Position>
//!
//!   delete_all(id) ──► for every Box<dyn ErasedStorage> ──► delete_by_id(id)
//! ```
//!
//! Typed operations downcast once to the concrete storage. `delete_all` never
//! needs the concrete type and goes through the erased trait object instead.
//!
//! ## Threading
//!
//! A `Registry` has no internal synchronization. Every mutating method takes
//! `&mut self`, so sharing one across threads needs an external lock such as
//! [`SharedRegistry`](crate::SharedRegistry).

use std::any::TypeId;
use std::collections::HashMap;

use super::component::Component;
use super::entity::{EntityAllocator, EntityId};
use super::storage::{ComponentStorage, ErasedStorage};
use crate::config::RegistryConfig;
use crate::error::EcsResult;

/// Type-keyed collection of component stores.
///
/// # Example
///
/// ```rust
/// use sparse_ecs::Registry;
///
/// #[derive(Clone, Copy, Debug, Default, PartialEq)]
/// struct Position { x: f32, y: f32 }
///
/// #[derive(Clone, Copy, Debug, Default, PartialEq)]
/// struct Velocity { x: f32, y: f32 }
///
/// let mut registry = Registry::new();
/// let e = registry.new_id();
/// registry.write(e, Position { x: 0.0, y: 0.0 });
/// registry.write(e, Velocity { x: 1.0, y: 2.0 });
///
/// registry.delete_all(e);
/// assert!(!registry.read::<Position>(e).1);
/// ```
pub struct Registry {
    /// One store per component type.
    stores: HashMap<TypeId, Box<dyn ErasedStorage>>,
    /// Entity id counter.
    entities: EntityAllocator,
    /// Sizing hints for new stores.
    config: RegistryConfig,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Creates an empty registry with default sizing.
    #[must_use]
    pub fn new() -> Self {
        Self::from_valid_config(RegistryConfig::default())
    }

    /// Creates an empty registry using the given sizing hints.
    ///
    /// # Errors
    ///
    /// Returns [`EcsError::InvalidConfig`](crate::EcsError::InvalidConfig) if
    /// the hints fail [`RegistryConfig::validate`].
    pub fn with_config(config: RegistryConfig) -> EcsResult<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: RegistryConfig) -> Self {
        Self {
            stores: HashMap::with_capacity(config.expected_types),
            entities: EntityAllocator::new(),
            config,
        }
    }

    /// Returns the configuration this registry was created with.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &RegistryConfig {
        &self.config
    }

    // =========================================================================
    // Entity ids
    // =========================================================================

    /// Issues a fresh entity id: 0, 1, 2, ...
    ///
    /// Ids are never reused, even after all of an entity's components are
    /// deleted.
    ///
    /// # Panics
    ///
    /// Panics once all 2^32 ids have been issued. Use
    /// [`Registry::try_new_id`] to handle that case.
    #[inline]
    pub fn new_id(&mut self) -> EntityId {
        self.entities.allocate()
    }

    /// Issues a fresh entity id.
    ///
    /// # Errors
    ///
    /// Returns [`EcsError::IdsExhausted`](crate::EcsError::IdsExhausted) once
    /// all 2^32 ids have been issued.
    #[inline]
    pub fn try_new_id(&mut self) -> EcsResult<EntityId> {
        self.entities.try_allocate()
    }

    /// Returns how many entity ids have been issued.
    #[inline]
    #[must_use]
    pub const fn issued_ids(&self) -> u64 {
        self.entities.issued()
    }

    // =========================================================================
    // Store resolution
    // =========================================================================

    /// Returns the store for `C`, creating an empty one on first use.
    ///
    /// Creation is idempotent: later calls return the same store.
    pub fn storage<C: Component>(&mut self) -> &mut ComponentStorage<C> {
        let capacity = self.config.store_capacity;
        self.stores
            .entry(C::type_key())
            .or_insert_with(|| -> Box<dyn ErasedStorage> {
                tracing::debug!(component = C::type_name(), capacity, "creating component store");
                Box::new(ComponentStorage::<C>::with_capacity(capacity))
            })
            .as_any_mut()
            .downcast_mut::<ComponentStorage<C>>()
            .unwrap_or_else(|| unreachable!("store keyed by TypeId holds another type"))
    }

    /// Returns the store for `C` if one has been created.
    ///
    /// Unlike [`Registry::storage`] this never creates a store, so it only
    /// needs `&self`.
    #[must_use]
    pub fn try_storage<C: Component>(&self) -> Option<&ComponentStorage<C>> {
        self.stores
            .get(&C::type_key())
            .and_then(|store| store.as_any().downcast_ref::<ComponentStorage<C>>())
    }

    /// Returns `true` if a store for `C` exists.
    #[inline]
    #[must_use]
    pub fn has_storage<C: Component>(&self) -> bool {
        self.stores.contains_key(&C::type_key())
    }

    /// Returns the number of stores created so far.
    #[inline]
    #[must_use]
    pub fn storage_count(&self) -> usize {
        self.stores.len()
    }

    // =========================================================================
    // Typed component access
    // =========================================================================

    /// Reads a copy of `id`'s `C` component.
    ///
    /// # Returns
    ///
    /// `(value, true)` if present, `(C::default(), false)` otherwise. Creates
    /// the store for `C` if it does not exist yet.
    pub fn read<C: Component + Clone + Default>(&mut self, id: EntityId) -> (C, bool) {
        self.storage::<C>().read(id)
    }

    /// Borrows `id`'s `C` component without creating a store.
    #[must_use]
    pub fn get<C: Component>(&self, id: EntityId) -> Option<&C> {
        self.try_storage::<C>()?.get(id)
    }

    /// Mutably borrows `id`'s `C` component.
    pub fn get_mut<C: Component>(&mut self, id: EntityId) -> Option<&mut C> {
        self.storage::<C>().get_mut(id)
    }

    /// Returns `true` if `id` has a `C` component.
    #[must_use]
    pub fn contains<C: Component>(&self, id: EntityId) -> bool {
        self.try_storage::<C>()
            .is_some_and(|storage| storage.contains(id))
    }

    /// Inserts or overwrites `id`'s `C` component.
    ///
    /// # Returns
    ///
    /// The previous component, if any.
    pub fn write<C: Component>(&mut self, id: EntityId, component: C) -> Option<C> {
        self.storage::<C>().write(id, component)
    }

    /// Removes `id`'s `C` component. A no-op if there is none.
    ///
    /// # Returns
    ///
    /// The removed component, if any.
    pub fn delete<C: Component>(&mut self, id: EntityId) -> Option<C> {
        self.storage::<C>().delete(id)
    }

    /// Calls `f` for every live `C` component in dense order.
    ///
    /// If no `C` component was ever written, an empty store is created and
    /// `f` is simply never called.
    pub fn for_each<C, F>(&mut self, f: F)
    where
        C: Component,
        F: FnMut(EntityId, &C),
    {
        self.storage::<C>().for_each(f);
    }

    // =========================================================================
    // Cross-type operations
    // =========================================================================

    /// Removes `id`'s component from every store, whatever its type.
    ///
    /// Stores are visited in no particular order; per-type deletes are
    /// independent so the result does not depend on it.
    ///
    /// # Returns
    ///
    /// How many stores actually held a component for `id`.
    pub fn delete_all(&mut self, id: EntityId) -> usize {
        let removed = self
            .stores
            .values_mut()
            .map(|store| store.delete_by_id(id))
            .filter(|&hit| hit)
            .count();
        tracing::trace!(entity = id.raw(), removed, "deleted entity from all stores");
        removed
    }

    /// Returns how many stores hold a component for `id`.
    #[must_use]
    pub fn component_count(&self, id: EntityId) -> usize {
        self.stores
            .values()
            .filter(|store| store.contains_id(id))
            .count()
    }

    /// Empties every store. Stores and the id counter are kept.
    pub fn clear(&mut self) {
        for store in self.stores.values_mut() {
            store.clear();
        }
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut stores: Vec<_> = self
            .stores
            .values()
            .map(|store| (store.component_name(), store.len()))
            .collect();
        stores.sort_unstable();
        f.debug_struct("Registry")
            .field("stores", &stores)
            .field("issued_ids", &self.entities.issued())
            .field("config", &self.config)
            .finish()
    }
}
