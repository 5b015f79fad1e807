//! # Entity Identifiers
//!
//! Entities are bare 32-bit ids handed out by a monotonic counter. There is
//! no generation tag and no recycling: an id retired by
//! [`Registry::delete_all`](crate::Registry::delete_all) is never issued again.

use std::fmt;

use crate::error::{EcsError, EcsResult};

/// Opaque identifier for an entity.
///
/// Carries no data of its own; it is only a key into component stores.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct EntityId(u32);

impl EntityId {
    /// Wraps a raw id.
    #[inline]
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw id.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for EntityId {
    #[inline]
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<EntityId> for u32 {
    #[inline]
    fn from(id: EntityId) -> Self {
        id.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic entity id counter.
///
/// Issues 0, 1, 2, ... and never reuses an id. The counter is kept as a
/// `u64` so that running past `u32::MAX` is reported instead of wrapping
/// back onto live ids.
#[derive(Clone, Debug, Default)]
pub struct EntityAllocator {
    next: u64,
}

impl EntityAllocator {
    /// Creates an allocator whose first id is 0.
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 0 }
    }

    /// Issues the next id.
    ///
    /// # Errors
    ///
    /// Returns [`EcsError::IdsExhausted`] once all 2^32 ids have been issued.
    #[inline]
    pub fn try_allocate(&mut self) -> EcsResult<EntityId> {
        let Ok(raw) = u32::try_from(self.next) else {
            tracing::warn!(issued = self.next, "entity id space exhausted");
            return Err(EcsError::IdsExhausted { issued: self.next });
        };
        self.next += 1;
        Ok(EntityId(raw))
    }

    /// Issues the next id.
    ///
    /// # Panics
    ///
    /// Panics if all 2^32 ids have been issued. Use
    /// [`EntityAllocator::try_allocate`] to handle that case.
    #[inline]
    pub fn allocate(&mut self) -> EntityId {
        match self.try_allocate() {
            Ok(id) => id,
            Err(err) => panic!("{err}"),
        }
    }

    /// Returns the id the next allocation will produce, if any remain.
    #[inline]
    #[must_use]
    pub fn peek(&self) -> Option<EntityId> {
        u32::try_from(self.next).ok().map(EntityId)
    }

    /// Returns how many ids have been issued so far.
    #[inline]
    #[must_use]
    pub const fn issued(&self) -> u64 {
        self.next
    }

    #[cfg(test)]
    pub(crate) fn starting_at(next: u64) -> Self {
        Self { next }
    }
}
