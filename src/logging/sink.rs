//! Record sinks - where rendered records go.
//!
//! Emission is synchronous and non-fallible: a sink that cannot write drops
//! the record instead of disrupting the caller.

use std::io::Write;

use super::record::Record;

/// Destination class of a sink.
///
/// Handles are compared by destination where only equivalent behavior
/// matters, and by sink identity where the exact instance does; see
/// [`Logger::destination`](super::Logger::destination) and
/// [`Logger::same_sink`](super::Logger::same_sink).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    /// Process standard output, one JSON line per record.
    Stdout,
    /// Records are dropped without being rendered.
    Discard,
    /// An application-provided sink.
    Custom,
}

/// Sink accepting structured records.
///
/// The `emit` method is intentionally synchronous and non-fallible to avoid
/// disrupting the main execution flow - write failures are silently ignored.
pub trait RecordSink: Send + Sync {
    /// Record one entry.
    fn emit(&self, record: Record);

    /// Destination class of this sink. Defaults to [`Destination::Custom`].
    fn destination(&self) -> Destination {
        Destination::Custom
    }
}

/// Writes one JSON line per record to standard output.
///
/// Each record is a single `writeln!` on the locked handle, so records from
/// concurrent handles never interleave. Cross-record ordering is whatever
/// the lock hands out.
pub(crate) struct StdoutSink;

impl RecordSink for StdoutSink {
    fn emit(&self, record: Record) {
        let Some(line) = record.to_json_line() else {
            return;
        };
        let mut out = std::io::stdout().lock();
        let _ = writeln!(out, "{line}");
    }

    fn destination(&self) -> Destination {
        Destination::Stdout
    }
}

/// Accepts and drops every record, without rendering it.
pub(crate) struct DiscardSink;

impl RecordSink for DiscardSink {
    fn emit(&self, _record: Record) {}

    fn destination(&self) -> Destination {
        Destination::Discard
    }
}
