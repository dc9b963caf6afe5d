//! Progress reporting seam for the reduction loop
//!
//! The reducer stays free of I/O; callers that want the pass-by-pass
//! narration implement [`ReduceObserver`] and log or print as they see fit.

/// Hooks invoked by the reducer as it makes progress
///
/// All methods have empty defaults, so an implementation only overrides the
/// events it cares about.
pub trait ReduceObserver {
    /// A new pass over the fragment collection is starting
    fn pass_started(&mut self, _remaining: usize) {}

    /// `removed` was eliminated because its text occurs inside `kept`
    fn containment_removed(&mut self, _kept: &str, _removed: &str) {}

    /// Two fragments were spliced over an overlap of `overlap_len` bytes
    fn overlap_merged(&mut self, _merged: &str, _overlap_len: usize) {}

    /// Reduction finished with a single assembled text
    fn finished(&mut self, _text: &str) {}
}

/// Observer that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ReduceObserver for NoopObserver {}
