//! The consumption side of a walk.

use std::fmt;
use std::iter::FusedIterator;

use crate::node::JsonNode;

/// An ordered, single-pass sequence of [`JsonNode`]s produced by one
/// walk.
///
/// The buffer behind a stream is complete before the stream exists, so
/// the remaining length is always exact and iteration never blocks on
/// the document. A drained stream stays empty; walking the same document
/// again means calling the facade again.
///
/// Streams do not split for parallel consumption: node order is part of
/// the path contract, and [`try_split`](NodeStream::try_split) says so by
/// always declining.
pub struct NodeStream {
    nodes: std::vec::IntoIter<JsonNode>,
}

impl NodeStream {
    pub(crate) fn new(nodes: Vec<JsonNode>) -> Self {
        Self {
            nodes: nodes.into_iter(),
        }
    }

    /// Exact number of nodes not yet yielded.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` once the stream is exhausted.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 0
    }

    /// Declines to hand part of the stream to another consumer; always
    /// `None`. The sequence is strictly sequential.
    pub fn try_split(&mut self) -> Option<NodeStream> {
        None
    }
}

impl Iterator for NodeStream {
    type Item = JsonNode;

    fn next(&mut self) -> Option<JsonNode> {
        self.nodes.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.nodes.size_hint()
    }
}

impl ExactSizeIterator for NodeStream {}

impl FusedIterator for NodeStream {}

impl fmt::Debug for NodeStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeStream")
            .field("remaining", &self.len())
            .finish()
    }
}
