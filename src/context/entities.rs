//! Entities for context propagation
//!
//! This module provides the [`Context`] entity: an immutable, chainable
//! key-value carrier that scopes an in-flight operation (a request, a task)
//! and travels explicitly through call chains.
//!
//! # Overview
//!
//! A context is never mutated. [`Context::with_value`] returns a *derived*
//! context that shares its parent chain, so deriving is cheap and concurrent
//! readers of the same chain are race-free by construction:
//!
//! - [`Context::background`] is the empty root.
//! - Lookup walks from the newest entry toward the root and returns the
//!   nearest match, so a derived context shadows its ancestors for the same
//!   key.
//! - Values are heterogeneous; the typed accessor [`Context::get`] yields
//!   `None` when the slot is empty *or* holds a value of another type.
//!
//! # Example
//!
//! ```
//! use ctxlog::{Context, ContextKey};
//!
//! const TENANT: ContextKey = ContextKey::new("myapp.tenant");
//!
//! let root = Context::background();
//! let parent = root.with_value(TENANT, "acme".to_string());
//! let child = parent.with_value(TENANT, "globex".to_string());
//!
//! // The parent is unchanged; the child shadows it.
//! assert_eq!(parent.get::<String>(TENANT).map(String::as_str), Some("acme"));
//! assert_eq!(child.get::<String>(TENANT).map(String::as_str), Some("globex"));
//! ```

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use super::value_objects::ContextKey;

/// An immutable, hierarchical key-value carrier for request-scoped values.
///
/// `Context` is `Clone + Send + Sync`; clones share the underlying chain.
/// There is no interior mutability anywhere, so a context may be read from
/// arbitrarily many threads without synchronization.
#[derive(Clone, Default)]
pub struct Context {
    head: Option<Arc<Entry>>,
}

/// One link in the chain. Each `with_value` call prepends exactly one.
struct Entry {
    key: ContextKey,
    value: Arc<dyn Any + Send + Sync>,
    parent: Option<Arc<Entry>>,
}

impl Context {
    /// The empty root context.
    ///
    /// Conventionally created once at a process or request boundary and
    /// derived from thereafter.
    pub fn background() -> Self {
        Self { head: None }
    }

    /// Derive a context carrying `value` under `key`.
    ///
    /// The receiver is unchanged. The new entry shadows any entry for the
    /// same key further down the chain.
    #[must_use]
    pub fn with_value<V>(&self, key: ContextKey, value: V) -> Context
    where
        V: Any + Send + Sync,
    {
        Context {
            head: Some(Arc::new(Entry {
                key,
                value: Arc::new(value),
                parent: self.head.clone(),
            })),
        }
    }

    /// Look up the nearest value stored under `key`, untyped.
    ///
    /// Most callers want the typed accessor [`Context::get`] instead.
    pub fn value(&self, key: ContextKey) -> Option<&(dyn Any + Send + Sync)> {
        let mut entry = self.head.as_deref();
        while let Some(e) = entry {
            if e.key == key {
                return Some(e.value.as_ref());
            }
            entry = e.parent.as_deref();
        }
        None
    }

    /// Look up the nearest value stored under `key` as a `V`.
    ///
    /// Returns `None` when no entry exists for `key` or when the stored
    /// value is not a `V`. Absence and type mismatch are deliberately not
    /// distinguished; callers fold both into their fallback path.
    pub fn get<V: Any>(&self, key: ContextKey) -> Option<&V> {
        self.value(key)?.downcast_ref::<V>()
    }

    /// Whether this context carries no entries at all.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys = Vec::new();
        let mut entry = self.head.as_deref();
        while let Some(e) = entry {
            keys.push(e.key.name());
            entry = e.parent.as_deref();
        }
        f.debug_struct("Context").field("keys", &keys).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: ContextKey = ContextKey::new("test.key");
    const OTHER: ContextKey = ContextKey::new("test.other");

    #[test]
    fn test_background_is_empty() {
        let ctx = Context::background();
        assert!(ctx.is_empty());
        assert!(ctx.value(KEY).is_none());
    }

    #[test]
    fn test_with_value_and_get() {
        let ctx = Context::background().with_value(KEY, 7_u32);
        assert!(!ctx.is_empty());
        assert_eq!(ctx.get::<u32>(KEY), Some(&7));
        assert!(ctx.get::<u32>(OTHER).is_none());
    }

    #[test]
    fn test_get_with_wrong_type_is_none() {
        let ctx = Context::background().with_value(KEY, "seven");
        assert!(ctx.get::<u32>(KEY).is_none());
        assert_eq!(ctx.get::<&str>(KEY), Some(&"seven"));
    }

    #[test]
    fn test_nearest_entry_shadows_ancestors() {
        let parent = Context::background().with_value(KEY, 1_u32);
        let child = parent.with_value(KEY, 2_u32);
        assert_eq!(parent.get::<u32>(KEY), Some(&1));
        assert_eq!(child.get::<u32>(KEY), Some(&2));
    }

    #[test]
    fn test_lookup_walks_to_the_root() {
        let ctx = Context::background()
            .with_value(KEY, 1_u32)
            .with_value(OTHER, 2_u32);
        assert_eq!(ctx.get::<u32>(KEY), Some(&1));
        assert_eq!(ctx.get::<u32>(OTHER), Some(&2));
    }

    #[test]
    fn test_shadowing_survives_a_wrong_typed_entry() {
        // The nearest entry wins even when an ancestor held the right type.
        let ctx = Context::background()
            .with_value(KEY, 1_u32)
            .with_value(KEY, "not a number");
        assert!(ctx.get::<u32>(KEY).is_none());
    }

    #[test]
    fn test_clones_share_the_chain() {
        let ctx = Context::background().with_value(KEY, 5_u32);
        let clone = ctx.clone();
        assert_eq!(clone.get::<u32>(KEY), Some(&5));
    }

    #[test]
    fn test_context_crosses_threads() {
        let ctx = Context::background().with_value(KEY, 11_u32);
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let ctx = ctx.clone();
                std::thread::spawn(move || *ctx.get::<u32>(KEY).unwrap())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 11);
        }
    }

    #[test]
    fn test_debug_lists_keys_newest_first() {
        let ctx = Context::background()
            .with_value(KEY, 1_u32)
            .with_value(OTHER, 2_u32);
        let debug = format!("{ctx:?}");
        assert!(debug.contains("test.other"));
        assert!(debug.contains("test.key"));
    }
}
