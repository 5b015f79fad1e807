//! # Shared Access
//!
//! The ECS core has no internal locking. A registry touched from more than
//! one thread goes behind a single mutex:
//!
//! ```text
//! Thread 1:  lock ─► write / delete ─► unlock
//! Thread 2:          (waits)           lock ─► for_each ─► unlock
//! ```
//!
//! Operations from different threads never interleave inside one call.

mod shared;

pub use shared::SharedRegistry;
