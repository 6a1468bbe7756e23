//! Document model errors.

use thiserror::Error;

/// Errors produced by the document model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    /// The document contains a reference cycle, so it has no tree
    /// rendering. `path` locates the member or element that refers back
    /// to one of its own ancestors.
    #[error("reference cycle at '{path}'")]
    Cycle {
        /// Path of the back-reference.
        path: String,
    },
}
