//! # Sparse ECS
//!
//! A minimal Entity Component System data layer:
//! - One sparse-set store per component type
//! - O(1) read, write and delete by entity id
//! - Dense, gap-free iteration per component type
//!
//! ## Architecture Rules
//!
//! 1. **Dense storage** - Components of one type live in a contiguous array
//! 2. **Swap-remove** - Deleting moves the last entry into the hole; order is not preserved
//! 3. **No reflection** - Stores are keyed by `TypeId` and erased behind [`ErasedStorage`]
//! 4. **Single-threaded core** - Share across threads only through [`SharedRegistry`]
//! 5. **Thread-safe component types** - Components must be `Send + Sync + 'static`,
//!    so `Rc<_>` and `Cell<_>` are not accepted even on one thread
//!
//! ## Example
//!
//! ```rust
//! use sparse_ecs::Registry;
//!
//! #[derive(Clone, Copy, Debug, Default, PartialEq)]
//! struct Position { x: f64, y: f64 }
//!
//! let mut registry = Registry::new();
//! let id = registry.new_id();
//! registry.write(id, Position { x: 1.0, y: 2.0 });
//!
//! let (position, found) = registry.read::<Position>(id);
//! assert!(found);
//! assert_eq!(position, Position { x: 1.0, y: 2.0 });
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod ecs;
pub mod error;
pub mod sync;

pub use config::{RegistryConfig, MAX_EXPECTED_TYPES, MAX_STORE_CAPACITY};
pub use ecs::{
    Component, ComponentStorage, EntityAllocator, EntityId, ErasedStorage, Registry,
};
pub use error::{EcsError, EcsResult};
pub use sync::SharedRegistry;
