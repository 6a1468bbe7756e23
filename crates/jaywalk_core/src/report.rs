//! Per-entry fault reporting.
//!
//! Collection never aborts because one entry became unreadable: the
//! entry is skipped and handed to a [`FaultReporter`]. The reporter is a
//! parameter of the walk (see [`Walk::walk_with`](crate::Walk::walk_with))
//! rather than a process-wide sink, so each embedder decides where its
//! faults go and tests can capture them per walk.

use std::fmt;

use tracing::warn;

/// An entry that a container listed but that could not be read back
/// during collection. In practice this means a concurrent writer removed
/// it between the key snapshot and the live fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryFault {
    /// Path the skipped entry would have had.
    pub path: String,
    /// Member name, or decimal element index, within the containing
    /// container.
    pub key: String,
}

impl fmt::Display for EntryFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unreadable entry '{}' (key '{}')", self.path, self.key)
    }
}

/// Receives the faults of one walk, in traversal order.
pub trait FaultReporter {
    /// Called once per skipped entry.
    fn report(&mut self, fault: EntryFault);
}

/// Default reporter used by the plain facade methods: emits each fault
/// as a `tracing` warning and otherwise drops it.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl FaultReporter for LogReporter {
    fn report(&mut self, fault: EntryFault) {
        warn!(path = %fault.path, key = %fault.key, "skipping unreadable entry");
    }
}

/// Collects faults for later inspection.
impl FaultReporter for Vec<EntryFault> {
    fn report(&mut self, fault: EntryFault) {
        self.push(fault);
    }
}
