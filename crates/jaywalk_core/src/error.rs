//! Traversal errors.

use jaywalk_dom::ValueKind;
use thiserror::Error;

/// Errors raised by the traversal layer.
///
/// Unreadable entries encountered during collection are not errors; they
/// are skipped and surfaced through the walk's fault reporter. The one
/// failure a caller can observe directly is asking a node for a value
/// kind it does not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WalkError {
    /// A typed accessor was called on a node holding a different kind of
    /// value.
    #[error("expected {expected} value but found {actual}")]
    TypeMismatch {
        /// Kind the accessor reads.
        expected: ValueKind,
        /// Kind the node actually holds.
        actual: ValueKind,
    },
}
