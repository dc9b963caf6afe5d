//! Maximal-overlap detection between fragments
//!
//! Each pass scans every fragment twice: once treating its suffixes as
//! candidate prefixes of other fragments, once treating its prefixes as
//! candidate suffixes. The longest overlap seen anywhere in the pass wins;
//! ties go to the first match in scan order.

use crate::fragment::{FragmentId, FragmentSet};

/// A chosen merge between two overlapping fragments
///
/// The merged text is the left fragment truncated at `splice_offset`,
/// followed by the whole right fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlapMatch {
    /// Fragment contributing the front of the merged text
    pub left: FragmentId,
    /// Fragment contributing the back of the merged text
    pub right: FragmentId,
    /// Byte offset in the left fragment where the right fragment is appended
    pub splice_offset: usize,
    /// Byte length of the matched overlap
    pub len: usize,
}

/// Scanner for the longest suffix/prefix overlap in a fragment set
#[derive(Debug, Clone, Copy, Default)]
pub struct OverlapFinder;

impl OverlapFinder {
    /// Create a new finder
    pub fn new() -> Self {
        Self
    }

    /// Find the longest overlap between any two live fragments
    ///
    /// Returns `None` when no two fragments overlap at all. Full containment
    /// is not reported here; the containment pass is expected to have
    /// eliminated it already.
    pub fn find_best(&self, set: &FragmentSet) -> Option<OverlapMatch> {
        let mut best: Option<OverlapMatch> = None;
        for (id, _) in set.iter() {
            self.scan_suffixes(id, set, &mut best);
            self.scan_prefixes(id, set, &mut best);
        }
        best
    }

    /// Test each proper suffix of `id` against the start of every other
    /// fragment, longest suffix first.
    fn scan_suffixes(&self, id: FragmentId, set: &FragmentSet, best: &mut Option<OverlapMatch>) {
        let Some(text) = set.get(id) else { return };
        for (start, _) in text.char_indices().skip(1) {
            let suffix = &text[start..];
            // Suffixes only get shorter from here, and a tie never replaces
            // the recorded best.
            if suffix.len() <= best_len(best) {
                return;
            }
            for (other, candidate) in set.iter() {
                if other == id || is_recorded(best, id, other) {
                    continue;
                }
                if candidate.starts_with(suffix) {
                    *best = Some(OverlapMatch {
                        left: id,
                        right: other,
                        splice_offset: start,
                        len: suffix.len(),
                    });
                    return;
                }
            }
        }
    }

    /// Test each proper prefix of `id` (down to two bytes) against the end
    /// of every other fragment, longest prefix first. One-byte overlaps are
    /// left to the suffix scan of the other fragment.
    fn scan_prefixes(&self, id: FragmentId, set: &FragmentSet, best: &mut Option<OverlapMatch>) {
        let Some(text) = set.get(id) else { return };
        for (end, _) in text.char_indices().rev() {
            if end < 2 {
                return;
            }
            let prefix = &text[..end];
            if prefix.len() <= best_len(best) {
                return;
            }
            for (other, candidate) in set.iter() {
                if other == id || is_recorded(best, other, id) {
                    continue;
                }
                if candidate.ends_with(prefix) {
                    *best = Some(OverlapMatch {
                        left: other,
                        right: id,
                        // Splice at the matched suffix itself, not at an
                        // earlier occurrence of the same bytes.
                        splice_offset: candidate.len() - prefix.len(),
                        len: prefix.len(),
                    });
                    return;
                }
            }
        }
    }
}

fn best_len(best: &Option<OverlapMatch>) -> usize {
    best.map_or(0, |m| m.len)
}

/// Whether `(left, right)` is the pair already recorded as best this pass.
/// Keeps the mirrored scan from re-finding the same overlap with swapped
/// roles.
fn is_recorded(best: &Option<OverlapMatch>, left: FragmentId, right: FragmentId) -> bool {
    matches!(best, Some(m) if m.left == left && m.right == right)
}
