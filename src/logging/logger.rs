//! Logger handle and context resolution.
//!
//! # Overview
//!
//! A [`Logger`] is a shareable handle to a [`RecordSink`]. The handle is
//! immutable after creation; [`Logger::with_fields`] derives a new handle
//! rather than mutating the receiver, so a handle may be cloned into any
//! number of threads.
//!
//! Resolution is the one non-trivial policy in this crate: a logger attached
//! to a [`Context`] under [`LOGGER_KEY`] is returned as-is, and *everything
//! else* - an empty slot, or a slot holding some other type - falls back to
//! a fresh standard-output logger. Resolution never fails and never returns
//! an absent handle; a caller misconfiguring the slot logs to stdout instead
//! of not logging at all.
//!
//! # Example
//!
//! ```
//! use ctxlog::{Context, Logger};
//! use serde_json::json;
//!
//! // Code deep in a call chain only needs the context.
//! fn handle(ctx: &Context) {
//!     let log = ctx.logger();
//!     log.info("handling request", json!({"route": "/health"}));
//! }
//!
//! // Callers that want silence attach a discarding logger up front.
//! let ctx = Context::background().with_logger(Logger::discard());
//! handle(&ctx);
//! ```

use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};

use super::record::{Level, Record};
use super::sink::{Destination, DiscardSink, RecordSink, StdoutSink};
use crate::context::{Context, ContextKey};

/// The well-known key under which a [`Logger`] travels in a [`Context`].
///
/// Exported so that external code can attach a custom handle by hand via
/// [`Context::with_value`]; [`Context::with_logger`] is sugar for exactly
/// that. Storing anything that is not a `Logger` under this key is not an
/// error - resolution quietly ignores it and falls back to stdout.
pub const LOGGER_KEY: ContextKey = ContextKey::new("ctxlog.logger");

/// Shareable handle to a structured-logging sink.
///
/// Cheap to clone; clones share the sink. A handle created by one of the
/// factories ([`Logger::stdout`], [`Logger::discard`]) or found in a context
/// is ready to use with no further setup.
#[derive(Clone)]
pub struct Logger {
    sink: Arc<dyn RecordSink>,
    bound: Map<String, Value>,
}

impl Logger {
    /// Wrap an application-provided sink.
    pub fn new(sink: Arc<dyn RecordSink>) -> Self {
        Self {
            sink,
            bound: Map::new(),
        }
    }

    /// Fresh handle writing one JSON line per record to standard output.
    ///
    /// Two calls return behaviorally equivalent but distinct handles; do
    /// not rely on identity between them.
    pub fn stdout() -> Self {
        Self::new(Arc::new(StdoutSink))
    }

    /// Fresh handle that drops every record.
    ///
    /// Suitable for tests and for contexts where logging must be
    /// syntactically present but produce no observable output. Never errors
    /// or blocks regardless of volume.
    pub fn discard() -> Self {
        Self::new(Arc::new(DiscardSink))
    }

    /// Resolve the logger scoped to `ctx`.
    ///
    /// Returns the handle attached under [`LOGGER_KEY`], or a fresh
    /// [`Logger::stdout`] when the slot is empty or holds a value that is
    /// not a `Logger`. The mismatch case is a silent fallback, not an
    /// error: availability wins over strictness, and the practical symptom
    /// of a misconfigured slot is stdout logging rather than a failure.
    pub fn from_context(ctx: &Context) -> Self {
        match ctx.get::<Logger>(LOGGER_KEY) {
            Some(logger) => logger.clone(),
            None => Logger::stdout(),
        }
    }

    /// Destination class of the underlying sink.
    pub fn destination(&self) -> Destination {
        self.sink.destination()
    }

    /// Whether two handles share one sink instance.
    pub fn same_sink(&self, other: &Logger) -> bool {
        Arc::ptr_eq(&self.sink, &other.sink)
    }

    /// Derive a handle whose bound fields are merged into every record.
    ///
    /// Bound fields accumulate across calls; call-site fields win over
    /// bound fields of the same name. Non-object `fields` are ignored.
    #[must_use]
    pub fn with_fields(&self, fields: Value) -> Logger {
        let mut bound = self.bound.clone();
        if let Value::Object(map) = fields {
            bound.extend(map);
        }
        Logger {
            sink: Arc::clone(&self.sink),
            bound,
        }
    }

    /// Emit one record at `level`.
    ///
    /// `fields` is conventionally a JSON object and is merged over the
    /// handle's bound fields. A non-object payload is nested under a
    /// `data` key instead of being rejected.
    pub fn log(&self, level: Level, message: &str, fields: Value) {
        let mut merged = self.bound.clone();
        match fields {
            Value::Object(map) => merged.extend(map),
            Value::Null => {}
            other => {
                merged.insert("data".to_string(), other);
            }
        }
        self.sink.emit(Record::new(level, message, Value::Object(merged)));
    }

    /// Emit at [`Level::Debug`].
    pub fn debug(&self, message: &str, fields: Value) {
        self.log(Level::Debug, message, fields);
    }

    /// Emit at [`Level::Info`].
    pub fn info(&self, message: &str, fields: Value) {
        self.log(Level::Info, message, fields);
    }

    /// Emit at [`Level::Warn`].
    pub fn warn(&self, message: &str, fields: Value) {
        self.log(Level::Warn, message, fields);
    }

    /// Emit at [`Level::Error`].
    pub fn error(&self, message: &str, fields: Value) {
        self.log(Level::Error, message, fields);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("destination", &self.destination())
            .field("bound_fields", &self.bound.len())
            .finish()
    }
}

impl Context {
    /// Derive a context carrying `logger` under [`LOGGER_KEY`].
    #[must_use]
    pub fn with_logger(&self, logger: Logger) -> Context {
        self.with_value(LOGGER_KEY, logger)
    }

    /// Resolve the logger scoped to this context.
    ///
    /// See [`Logger::from_context`] for the fallback policy.
    pub fn logger(&self) -> Logger {
        Logger::from_context(self)
    }
}
