//! # jaywalk_dom
//!
//! In-memory JSON document model with shared-handle containers.
//!
//! [`JsonObject`] and [`JsonArray`] are reference-counted handles around
//! lock-protected storage. Cloning a handle aliases the container instead
//! of copying it, so documents may share subtrees, reference themselves,
//! and be mutated from other threads while being read. Those are exactly
//! the shapes the traversal layer (`jaywalk_core`) has to handle, and a
//! plain owned tree such as `serde_json::Value` cannot express them.
//!
//! Two caveats follow from the representation:
//!
//! - Container equality is identity, not deep comparison, which keeps
//!   `==` total on cyclic documents.
//! - A document that contains a reference cycle keeps itself alive:
//!   reference counts inside the cycle never reach zero. Remove a member
//!   to break the cycle if the memory must be reclaimed.
//!
//! ## Example
//!
//! ```rust
//! use jaywalk_dom::JsonObject;
//!
//! let book = JsonObject::new();
//! book.insert("title", "Sapiens");
//! book.insert("year", 2011);
//!
//! let title = book.get("title").unwrap();
//! assert_eq!(title.as_str(), Some("Sapiens"));
//!
//! // Clones alias: a write through one handle is visible through all.
//! let alias = book.clone();
//! alias.insert("year", 2015);
//! assert_eq!(book.get("year").unwrap().as_i64(), Some(2015));
//! ```
//!
//! Documents are usually built through the `serde_json` bridge:
//!
//! ```rust
//! use jaywalk_dom::JsonValue;
//!
//! let doc = JsonValue::from_serde(serde_json::json!({
//!     "book": [{"title": "Sapiens"}]
//! }));
//! assert_eq!(doc.to_string(), r#"{"book":[{"title":"Sapiens"}]}"#);
//! ```

mod array;
mod error;
mod number;
mod object;
mod value;

pub use array::JsonArray;
pub use error::DomError;
pub use number::Number;
pub use object::JsonObject;
pub use value::{JsonValue, ValueKind};
