//! The collection pass.
//!
//! A walk materializes its node buffer up front: the collector visits
//! the whole document in one synchronous pass and the resulting
//! [`NodeStream`] only ever replays finished work. Mutations that happen
//! after collection therefore cannot disturb consumption, and mutations
//! during collection degrade to skipped entries instead of broken
//! iteration.

use std::collections::HashSet;

use jaywalk_dom::{JsonArray, JsonObject, JsonValue};

use crate::node::JsonNode;
use crate::path::{join_index, join_key};
use crate::report::{EntryFault, FaultReporter};
use crate::stream::NodeStream;

/// Traversal mode.
///
/// There are exactly three: flat walks do not combine with leaves-only
/// filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WalkMode {
    /// Every node at every depth, containers included.
    Full,
    /// Recursive, but only nodes holding primitives are emitted;
    /// containers are descended, never yielded.
    LeavesOnly,
    /// Immediate children of the root only, containers included, no
    /// descent.
    Flat,
}

impl WalkMode {
    /// Whether this mode descends into nested containers.
    pub(crate) fn descends(self) -> bool {
        !matches!(self, WalkMode::Flat)
    }

    /// Whether a discovered child holding `value` is emitted.
    pub(crate) fn emits(self, value: &JsonValue) -> bool {
        match self {
            WalkMode::LeavesOnly => !value.is_container(),
            WalkMode::Full | WalkMode::Flat => true,
        }
    }
}

/// One collection pass over one document root.
pub(crate) struct Collector<'r> {
    mode: WalkMode,
    nodes: Vec<JsonNode>,
    /// Identities of containers already entered. Entries are never
    /// retracted within a pass, so a container reachable along several
    /// paths is descended exactly once and cycles terminate.
    visited: HashSet<usize>,
    reporter: &'r mut dyn FaultReporter,
}

impl<'r> Collector<'r> {
    pub(crate) fn new(mode: WalkMode, reporter: &'r mut dyn FaultReporter) -> Self {
        Self {
            mode,
            nodes: Vec::new(),
            visited: HashSet::new(),
            reporter,
        }
    }

    pub(crate) fn into_stream(self) -> NodeStream {
        NodeStream::new(self.nodes)
    }

    /// Walks the members of `object`. `path` is the path of `object`
    /// itself, empty at the traversal root; the root is never emitted,
    /// only its children are.
    ///
    /// The member names are snapshotted first and each value is fetched
    /// live afterwards. A member removed in between surfaces as a fault,
    /// and a member inserted in between is simply not part of this walk.
    pub(crate) fn collect_object(&mut self, object: &JsonObject, path: &str) {
        if !self.visited.insert(object.address()) {
            return;
        }

        for key in object.keys() {
            let child_path = join_key(path, &key);
            match object.get(&key) {
                Some(value) => self.emit_and_descend(child_path, key, value, Some(object)),
                None => self.skip(child_path, key),
            }
        }
    }

    /// Walks the elements of `array`; length is snapshotted, elements are
    /// fetched live, same contract as [`Collector::collect_object`].
    /// Element nodes carry no parent, so they are not writable.
    pub(crate) fn collect_array(&mut self, array: &JsonArray, path: &str) {
        if !self.visited.insert(array.address()) {
            return;
        }

        for index in 0..array.len() {
            let child_path = join_index(path, index);
            match array.get(index) {
                Some(value) => self.emit_and_descend(child_path, index.to_string(), value, None),
                None => self.skip(child_path, index.to_string()),
            }
        }
    }

    /// Emits the node for one discovered child when the mode calls for
    /// it, then descends when the child is a container and the mode
    /// recurses. Emission happens at the discovery position, before any
    /// of the child's own children.
    fn emit_and_descend(
        &mut self,
        path: String,
        key: String,
        value: JsonValue,
        parent: Option<&JsonObject>,
    ) {
        if self.mode.emits(&value) {
            self.nodes.push(JsonNode::new(
                path.clone(),
                key,
                value.clone(),
                parent.cloned(),
            ));
        }
        if self.mode.descends() {
            match &value {
                JsonValue::Object(child) => self.collect_object(child, &path),
                JsonValue::Array(child) => self.collect_array(child, &path),
                _ => {}
            }
        }
    }

    fn skip(&mut self, path: String, key: String) {
        self.reporter.report(EntryFault { path, key });
    }
}
