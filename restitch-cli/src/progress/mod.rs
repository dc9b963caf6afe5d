//! Progress narration for the reduction loop
//!
//! Implements the core's observer seam on top of the `log` facade, so the
//! pass-by-pass story shows up under `-v` without touching the algorithm.

use restitch_core::ReduceObserver;

/// Observer that narrates reduction progress through `log`
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNarrator;

impl LogNarrator {
    /// Create a new narrator
    pub fn new() -> Self {
        Self
    }
}

impl ReduceObserver for LogNarrator {
    fn pass_started(&mut self, remaining: usize) {
        log::info!("starting a pass over {remaining} fragments");
    }

    fn containment_removed(&mut self, kept: &str, removed: &str) {
        log::info!("removing \"{removed}\": contained in \"{kept}\"");
    }

    fn overlap_merged(&mut self, merged: &str, overlap_len: usize) {
        log::info!("merged over {overlap_len} overlapping bytes: \"{merged}\"");
    }

    fn finished(&mut self, text: &str) {
        log::debug!("assembly complete: {} bytes", text.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use restitch_core::Reducer;

    #[test]
    fn test_narrator_runs_through_a_reduction() {
        let mut narrator = LogNarrator::new();
        let reduction = Reducer::new()
            .reduce_with_observer(
                vec!["ab".to_string(), "bc".to_string()],
                &mut narrator,
            )
            .unwrap();
        assert_eq!(reduction.text, "abc");
    }
}
