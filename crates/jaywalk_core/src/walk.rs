//! Walk entry points on the container types.

use jaywalk_dom::{JsonArray, JsonObject};

use crate::collect::{Collector, WalkMode};
use crate::report::{FaultReporter, LogReporter};
use crate::stream::NodeStream;

/// Walks a container into a [`NodeStream`].
///
/// Implemented by both root container types. Every entry point runs the
/// whole collection pass before returning, so the stream it hands back
/// is already complete; nothing is produced lazily afterwards.
///
/// The convenience methods report faults through [`LogReporter`]. Use
/// [`walk_with`](Walk::walk_with) to choose the mode and the reporter
/// explicitly, e.g. to capture faults in a `Vec<EntryFault>` during
/// tests.
pub trait Walk {
    /// Runs a walk in `mode`, handing per-entry faults to `reporter`.
    fn walk_with(&self, mode: WalkMode, reporter: &mut dyn FaultReporter) -> NodeStream;

    /// Full recursive walk: every node at every depth.
    fn walk(&self) -> NodeStream {
        self.walk_with(WalkMode::Full, &mut LogReporter)
    }

    /// Recursive walk emitting only primitive-valued nodes.
    fn walk_leaves(&self) -> NodeStream {
        self.walk_with(WalkMode::LeavesOnly, &mut LogReporter)
    }

    /// Immediate children of the root only.
    fn walk_flat(&self) -> NodeStream {
        self.walk_with(WalkMode::Flat, &mut LogReporter)
    }
}

impl Walk for JsonObject {
    fn walk_with(&self, mode: WalkMode, reporter: &mut dyn FaultReporter) -> NodeStream {
        let mut collector = Collector::new(mode, reporter);
        collector.collect_object(self, "");
        collector.into_stream()
    }
}

impl Walk for JsonArray {
    fn walk_with(&self, mode: WalkMode, reporter: &mut dyn FaultReporter) -> NodeStream {
        let mut collector = Collector::new(mode, reporter);
        collector.collect_array(self, "");
        collector.into_stream()
    }
}
