//! Value objects for context propagation
//!
//! This module provides [`ContextKey`], the distinguished identifier type
//! used to store and retrieve values in a [`Context`](super::Context).
//!
//! # Why not bare strings?
//!
//! Several subsystems may stash values in the same context chain. A
//! dedicated key type forces each of them to mint an explicit, namespaced
//! identifier instead of colliding on ad-hoc string literals.
//!
//! # Example
//!
//! ```
//! use ctxlog::{Context, ContextKey};
//!
//! const REQUEST_ID: ContextKey = ContextKey::new("myapp.request_id");
//!
//! let ctx = Context::background().with_value(REQUEST_ID, "req-42".to_string());
//! assert_eq!(ctx.get::<String>(REQUEST_ID).map(String::as_str), Some("req-42"));
//! ```

use std::fmt;

/// A distinguished key identifying one kind of value stored in a context.
///
/// Keys compare by name, so the name is the identity. Pick namespaced names
/// (`"crate.purpose"`) to stay collision-resistant across subsystems.
///
/// Keys are process-wide constant data with no state of their own; define
/// them once as `const` items and export them wherever external code needs
/// to attach the corresponding value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContextKey {
    name: &'static str,
}

impl ContextKey {
    /// Create a key with the given namespaced name.
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }

    /// The key's name.
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for ContextKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_compare_by_name() {
        const A: ContextKey = ContextKey::new("test.a");
        const B: ContextKey = ContextKey::new("test.b");
        assert_eq!(A, ContextKey::new("test.a"));
        assert_ne!(A, B);
    }

    #[test]
    fn test_key_display_is_name() {
        let key = ContextKey::new("myapp.request_id");
        assert_eq!(key.to_string(), "myapp.request_id");
        assert_eq!(key.name(), "myapp.request_id");
    }
}
