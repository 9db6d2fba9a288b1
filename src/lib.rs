//! Context-scoped structured logging.
//!
//! This crate answers one question: given an execution context, *which*
//! logger should this code use? A logger attached to the context travels
//! with it through the call chain; code that never saw the logger being
//! configured still finds it, and code handed a context with no logger (or
//! a broken one) falls back to structured standard-output logging instead
//! of failing.
//!
//! # Core Concepts
//!
//! ## Context
//!
//! An immutable, chainable key-value carrier ([`Context`]) threaded
//! explicitly through calls. Deriving ([`Context::with_value`]) is cheap
//! and never mutates the parent; lookups shadow toward the newest entry.
//!
//! ## Resolution
//!
//! [`Logger::from_context`] (or [`Context::logger`]) reads the well-known
//! [`LOGGER_KEY`] slot:
//!
//! - slot holds a [`Logger`] - that exact handle is returned
//! - slot is empty - fresh [`Logger::stdout`]
//! - slot holds anything else - fresh [`Logger::stdout`], silently
//!
//! Resolution is total: it never fails and never returns an absent handle.
//!
//! # Example
//!
//! ```
//! use ctxlog::{Context, Logger};
//! use serde_json::json;
//!
//! let ctx = Context::background().with_logger(Logger::discard());
//!
//! // Deep in the call chain, resolve and log.
//! let log = ctx.logger();
//! log.info("cache warmed", json!({"entries": 128}));
//! ```

pub mod context;
pub mod logging;

// Re-export commonly used types
pub use context::{Context, ContextKey};
pub use logging::{Destination, LOGGER_KEY, Level, Logger, ParseLevelError, Record, RecordSink};
