//! # Shared Registry
//!
//! A cloneable, mutex-guarded handle for callers that need one registry on
//! several threads. Every access takes the lock for its whole duration, so
//! a `for_each` pass runs without interleaved writes from other threads.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::config::RegistryConfig;
use crate::ecs::{EntityId, Registry};
use crate::error::EcsResult;

/// Thread-safe handle to a [`Registry`].
///
/// Cloning the handle shares the same registry.
///
/// ## Usage
///
/// ```rust
/// use sparse_ecs::SharedRegistry;
///
/// let shared = SharedRegistry::new();
/// let worker = shared.clone();
///
/// std::thread::spawn(move || {
///     let id = worker.new_id();
///     worker.with(|registry| registry.write(id, 3_u32));
/// })
/// .join()
/// .unwrap();
///
/// assert_eq!(shared.lock().storage::<u32>().len(), 1);
/// ```
#[derive(Clone, Default)]
pub struct SharedRegistry {
    inner: Arc<Mutex<Registry>>,
}

impl SharedRegistry {
    /// Creates a handle to a new, empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::from_registry(Registry::new())
    }

    /// Creates a handle to a new registry using the given sizing hints.
    ///
    /// # Errors
    ///
    /// Returns any error from [`Registry::with_config`].
    pub fn with_config(config: RegistryConfig) -> EcsResult<Self> {
        Registry::with_config(config).map(Self::from_registry)
    }

    /// Wraps an existing registry.
    #[must_use]
    pub fn from_registry(registry: Registry) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }

    /// Locks the registry until the guard is dropped.
    #[must_use]
    pub fn lock(&self) -> MutexGuard<'_, Registry> {
        self.inner.lock()
    }

    /// Runs `f` with the registry locked.
    pub fn with<R>(&self, f: impl FnOnce(&mut Registry) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// Issues a fresh entity id under the lock.
    ///
    /// # Panics
    ///
    /// Panics once all 2^32 ids have been issued, like [`Registry::new_id`].
    #[must_use]
    pub fn new_id(&self) -> EntityId {
        self.inner.lock().new_id()
    }

    /// Removes `id` from every store under the lock.
    pub fn delete_all(&self, id: EntityId) -> usize {
        self.inner.lock().delete_all(id)
    }
}

impl std::fmt::Debug for SharedRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.inner.try_lock() {
            Some(registry) => f.debug_tuple("SharedRegistry").field(&*registry).finish(),
            None => f.write_str("SharedRegistry(<locked>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_handles_share_state() {
        let shared = SharedRegistry::new();
        let other = shared.clone();

        let id = shared.new_id();
        other.with(|registry| registry.write(id, 7_i64));

        assert_eq!(shared.lock().get::<i64>(id), Some(&7));
        assert_eq!(shared.delete_all(id), 1);
        assert!(!other.lock().contains::<i64>(id));
    }

    #[test]
    fn test_with_config_validates() {
        let config = RegistryConfig {
            store_capacity: 8,
            expected_types: 2,
        };
        let shared = SharedRegistry::with_config(config).unwrap();
        assert_eq!(shared.lock().config(), &config);

        let oversized = RegistryConfig {
            store_capacity: usize::MAX,
            expected_types: 2,
        };
        assert!(SharedRegistry::with_config(oversized).is_err());
    }

    #[test]
    fn test_concurrent_writers() {
        let shared = SharedRegistry::new();

        let workers: Vec<_> = (0..4)
            .map(|_| {
                let handle = shared.clone();
                thread::spawn(move || {
                    for _ in 0..250 {
                        let id = handle.new_id();
                        handle.with(|registry| registry.write(id, id.raw()));
                    }
                })
            })
            .collect();
        for worker in workers {
            worker.join().unwrap();
        }

        let mut registry = shared.lock();
        assert_eq!(registry.issued_ids(), 1000);
        assert_eq!(registry.storage::<u32>().len(), 1000);
        registry.for_each::<u32, _>(|id, &value| assert_eq!(id.raw(), value));
    }
}
