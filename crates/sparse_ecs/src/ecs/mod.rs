//! # Entity Component System
//!
//! Sparse-set component stores behind a type-keyed registry.
//!
//! ## Design Philosophy
//!
//! - One dense store per component type, created on first use
//! - Point access is O(1) through an id -> slot map
//! - Deletion is a swap-remove, so stores never contain gaps
//! - Entity ids are plain monotonic counters, never recycled

mod component;
mod entity;
mod registry;
mod storage;

pub use component::Component;
pub use entity::{EntityAllocator, EntityId};
pub use registry::Registry;
pub use storage::{ComponentStorage, ErasedStorage};
