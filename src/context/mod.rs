//! Context module for request-scoped value propagation
//!
//! This module provides the execution-context carrier: an immutable,
//! chainable key-value store threaded explicitly through call chains so
//! that code deep in a chain can reach values configured by a distant
//! ancestor without widening every signature in between.
//!
//! # Key Types
//!
//! - [`Context`] - The immutable, chainable carrier
//! - [`ContextKey`] - Distinguished key type for collision-free slots
//!
//! The carrier is general purpose; the logging slot and its well-known key
//! live in [`crate::logging`].

pub mod entities;
pub mod value_objects;

pub use entities::Context;
pub use value_objects::ContextKey;
