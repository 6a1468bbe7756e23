//! # jaywalk_core
//!
//! Path-annotated traversal over in-memory JSON documents.
//!
//! This crate provides:
//! - The [`Walk`] facade on `JsonObject` and `JsonArray` roots, in three
//!   modes: full recursive, leaves-only, and flat
//! - [`JsonNode`], pairing each visited value with its path, key, and
//!   write-back parent
//! - [`NodeStream`], the exact-size, single-pass sequence a walk returns
//! - Per-entry fault reporting for documents mutated mid-walk
//!
//! Collection is eager and consumption is lazy: a walk visits the whole
//! document once, in deterministic order, and the stream replays the
//! result. Cyclic and aliased documents are walked safely; a container
//! is descended at most once per walk.
//!
//! ## Example
//!
//! ```rust
//! use jaywalk_core::{JsonValue, Walk};
//!
//! let doc = JsonValue::from_serde(serde_json::json!({
//!     "book": [{"title": "Sapiens"}],
//!     "count": 1
//! }));
//! let root = doc.as_object().unwrap();
//!
//! let paths: Vec<String> = root.walk().map(|node| node.path().to_string()).collect();
//! assert_eq!(paths, ["book", "book[0]", "book[0]/title", "count"]);
//!
//! for node in root.walk_leaves() {
//!     assert!(node.is_leaf());
//! }
//! ```

mod collect;
mod error;
mod node;
mod path;
mod report;
mod stream;
mod walk;

pub use collect::WalkMode;
pub use error::WalkError;
pub use node::JsonNode;
pub use report::{EntryFault, FaultReporter, LogReporter};
pub use stream::NodeStream;
pub use walk::Walk;

pub use jaywalk_dom::{DomError, JsonArray, JsonObject, JsonValue, Number, ValueKind};
