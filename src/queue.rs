//! Queue reconciliation: a locally tracked queue merged with the remote view.
//!
//! The remote queue, when non-empty, fully shadows the local one for
//! display. The local queue keeps accumulating every accepted enqueue so it
//! can stand in whenever the remote view comes back empty.

mod compare;
mod reconciler;

pub use compare::queues_equal;
pub use reconciler::QueueReconciler;
