//! Two-phase reduction of a fragment collection down to one text
//!
//! Each outer pass first eliminates fragments fully contained in another,
//! then performs at most one merge of the longest overlap found. A pass that
//! does neither while two or more fragments remain means the inputs do not
//! form a single overlapping chain, and reduction stops with an error.

use crate::error::{AssemblyError, Result};
use crate::fragment::{FragmentId, FragmentSet};
use crate::observer::{NoopObserver, ReduceObserver};
use crate::overlap::OverlapFinder;

/// Counters describing one reduction run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReduceStats {
    /// Number of fragments supplied
    pub input_fragments: usize,
    /// Number of outer passes executed
    pub passes: usize,
    /// Fragments removed because their text occurred inside another
    pub containments_removed: usize,
    /// Overlap splices performed
    pub overlap_merges: usize,
}

/// Outcome of a successful reduction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reduction {
    /// The fully assembled text
    pub text: String,
    /// Counters gathered during the run
    pub stats: ReduceStats,
}

/// Owns a fragment collection for the duration of one reduction
#[derive(Debug, Clone, Copy, Default)]
pub struct Reducer {
    finder: OverlapFinder,
}

impl Reducer {
    /// Create a new reducer
    pub fn new() -> Self {
        Self::default()
    }

    /// Reduce `fragments` to a single text
    ///
    /// A single fragment is a trivial success and is returned as supplied.
    pub fn reduce(&self, fragments: Vec<String>) -> Result<Reduction> {
        self.reduce_with_observer(fragments, &mut NoopObserver)
    }

    /// Reduce `fragments`, reporting progress events to `observer`
    pub fn reduce_with_observer(
        &self,
        fragments: Vec<String>,
        observer: &mut dyn ReduceObserver,
    ) -> Result<Reduction> {
        if fragments.is_empty() {
            return Err(AssemblyError::EmptyInput);
        }
        if let Some(index) = fragments.iter().position(String::is_empty) {
            return Err(AssemblyError::EmptyFragment { index });
        }

        let mut stats = ReduceStats {
            input_fragments: fragments.len(),
            ..ReduceStats::default()
        };
        let mut set = FragmentSet::from_texts(fragments);

        while set.live_len() > 1 {
            stats.passes += 1;
            observer.pass_started(set.live_len());

            let removed = containment_pass(&mut set, observer);
            stats.containments_removed += removed;
            if set.live_len() == 1 {
                break;
            }

            if overlap_pass(&self.finder, &mut set, observer) {
                stats.overlap_merges += 1;
            } else if removed == 0 {
                return Err(AssemblyError::Incomplete {
                    remaining: set.live_len(),
                });
            }
        }

        let text = set
            .into_single()
            .expect("reduction loop exits with exactly one live fragment");
        observer.finished(&text);
        Ok(Reduction { text, stats })
    }
}

/// Remove every fragment whose text occurs verbatim inside another, until no
/// containment remains. Restarts the scan after each removal, so shifting
/// indices are never an issue.
fn containment_pass(set: &mut FragmentSet, observer: &mut dyn ReduceObserver) -> usize {
    let mut removed = 0;
    while let Some((kept, dropped)) = find_containment(set) {
        if let Some(text) = set.remove(dropped) {
            if let Some(kept_text) = set.get(kept) {
                observer.containment_removed(kept_text, &text);
            }
            removed += 1;
        }
    }
    removed
}

/// First live pair where one text contains the other, as `(kept, dropped)`
fn find_containment(set: &FragmentSet) -> Option<(FragmentId, FragmentId)> {
    for (i, a) in set.iter() {
        for (j, b) in set.iter() {
            if j <= i {
                continue;
            }
            // Identical texts are mutual containments; keeping the earlier
            // one matches scan order.
            if a.contains(b) {
                return Some((i, j));
            }
            if b.contains(a) {
                return Some((j, i));
            }
        }
    }
    None
}

/// Merge the longest overlap found this pass, if any. The spliced text takes
/// the left fragment's slot; the right fragment's slot goes dead.
fn overlap_pass(
    finder: &OverlapFinder,
    set: &mut FragmentSet,
    observer: &mut dyn ReduceObserver,
) -> bool {
    let Some(m) = finder.find_best(set) else {
        return false;
    };
    let (Some(left), Some(right)) = (set.get(m.left), set.get(m.right)) else {
        return false;
    };

    let mut merged = String::with_capacity(m.splice_offset + right.len());
    merged.push_str(&left[..m.splice_offset]);
    merged.push_str(right);

    set.replace(m.left, merged);
    set.remove(m.right);
    if let Some(text) = set.get(m.left) {
        observer.overlap_merged(text, m.len);
    }
    true
}
