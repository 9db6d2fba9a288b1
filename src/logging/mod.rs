//! Structured logging - handles, records, and sinks.
//!
//! # Key Types
//!
//! - [`Logger`] - Shareable handle; factories for stdout and discard, and
//!   the context resolver [`Logger::from_context`]
//! - [`LOGGER_KEY`] - The well-known context slot a logger travels in
//! - [`Record`] / [`Level`] - One structured entry and its severity
//! - [`RecordSink`] / [`Destination`] - The seam custom sinks plug into
//!
//! Records render as JSON lines: `timestamp`, `level`, and `message` merged
//! with the caller's fields.

pub mod logger;
pub mod record;
pub mod sink;

pub use logger::{LOGGER_KEY, Logger};
pub use record::{Level, ParseLevelError, Record};
pub use sink::{Destination, RecordSink};
