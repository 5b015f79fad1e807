//! # Component System
//!
//! Components are plain values with no behavior. Any `Send + Sync + 'static`
//! type can be a component; each distinct type gets its own store, keyed by
//! its `TypeId`.

use std::any::TypeId;

/// Marker trait for ECS components.
///
/// Blanket-implemented for every `Send + Sync + 'static` type, so user types
/// need no registration step. The thread bounds keep a whole
/// [`Registry`](crate::Registry) `Send + Sync`, so it can sit behind a lock.
/// Types like `Rc<_>` or `Cell<_>` are therefore not components; wrap shared
/// state in `Arc<_>` and interior mutability in a lock or atomic instead.
///
/// # Example
///
/// ```rust
/// use sparse_ecs::Registry;
///
/// #[derive(Clone, Copy, Debug, Default, PartialEq)]
/// struct Health(i32);
///
/// let mut registry = Registry::new();
/// let id = registry.new_id();
/// registry.write(id, Health(100));
/// assert_eq!(registry.get::<Health>(id), Some(&Health(100)));
/// ```
pub trait Component: Send + Sync + 'static {
    /// Identity of this component type, used as the store key.
    #[inline]
    #[must_use]
    fn type_key() -> TypeId
    where
        Self: Sized,
    {
        TypeId::of::<Self>()
    }

    /// Human-readable type name. Diagnostics only, never a lookup key.
    #[inline]
    #[must_use]
    fn type_name() -> &'static str
    where
        Self: Sized,
    {
        std::any::type_name::<Self>()
    }
}

impl<T: Send + Sync + 'static> Component for T {}

#[cfg(test)]
mod tests {
    use super::*;

    mod a {
        pub struct Marker;
    }

    mod b {
        pub struct Marker;
    }

    #[test]
    fn test_same_name_distinct_keys() {
        let _ = (a::Marker, b::Marker);
        assert_ne!(a::Marker::type_key(), b::Marker::type_key());
        assert_eq!(a::Marker::type_key(), TypeId::of::<a::Marker>());
    }

    #[test]
    fn test_type_name() {
        assert!(<u32 as Component>::type_name().ends_with("u32"));
    }
}
