//! End-to-end assembly tests over the public API

use proptest::prelude::*;
use restitch_core::{assemble, AssemblyError, Reducer};

fn texts(items: &[&str]) -> Vec<String> {
    items.iter().map(|t| t.to_string()).collect()
}

#[test]
fn test_two_fragments_with_three_char_overlap() {
    assert_eq!(assemble(texts(&["ABCDE", "CDEFG"])).unwrap(), "ABCDEFG");
}

#[test]
fn test_contained_fragment_is_eliminated() {
    assert_eq!(
        assemble(texts(&["hello world", "hello"])).unwrap(),
        "hello world"
    );
}

#[test]
fn test_chain_of_one_char_overlaps() {
    assert_eq!(assemble(texts(&["ab", "bc", "cd"])).unwrap(), "abcd");
}

#[test]
fn test_disjoint_fragments_stall() {
    assert_eq!(
        assemble(texts(&["xyz", "qrs"])),
        Err(AssemblyError::Incomplete { remaining: 2 })
    );
}

#[test]
fn test_proverb_sample() {
    let fragments = texts(&["all is well", "ell that en", "hat end", "t ends well"]);
    assert_eq!(assemble(fragments).unwrap(), "all is well that ends well");
}

#[test]
fn test_hobbit_sample() {
    let fragments = texts(&[
        "on or eat: it was a hobbit-hole",
        "ends of worms and an ooz",
        "In a hole in the ground there lived a hobbit.",
        "hole in the ground",
        "obbit. Not a nasty dirty, wet hole, filled",
        "oozy smell, nor yet a dry, bare",
        "ole, filled with the en",
        "it-hole, and that means comfort.",
        "y, bare, sandy hole with nothing in it",
        "h nothing in it to sit down on ",
    ]);
    assert_eq!(
        assemble(fragments).unwrap(),
        "In a hole in the ground there lived a hobbit. Not a nasty dirty, wet hole, \
         filled with the ends of worms and an oozy smell, nor yet a dry, bare, sandy \
         hole with nothing in it to sit down on or eat: it was a hobbit-hole, and \
         that means comfort."
    );
}

#[test]
fn test_fragment_order_does_not_change_result() {
    let forward = assemble(texts(&["ABCDE", "CDEFG"])).unwrap();
    let backward = assemble(texts(&["CDEFG", "ABCDE"])).unwrap();
    assert_eq!(forward, backward);
}

#[test]
fn test_every_removal_accounts_for_one_fragment() {
    let reduction = Reducer::new()
        .reduce(texts(&["ab", "bc", "cd", "b", "abc"]))
        .unwrap();
    assert_eq!(
        reduction.stats.containments_removed + reduction.stats.overlap_merges,
        reduction.stats.input_fragments - 1
    );
}

proptest! {
    /// Splicing two fragments built around a known overlap restores the
    /// original and the length arithmetic `len(l) + len(r) - overlap` holds.
    ///
    /// The three parts use disjoint alphabets so the constructed overlap is
    /// the only one discoverable.
    #[test]
    fn prop_merge_restores_known_overlap(
        a in "[A-M]{1,12}",
        o in "[n-z]{1,12}",
        b in "[0-9]{1,12}",
    ) {
        let left = format!("{a}{o}");
        let right = format!("{o}{b}");
        let expected_len = left.len() + right.len() - o.len();

        let text = assemble(vec![left, right]).unwrap();
        prop_assert_eq!(text.len(), expected_len);
        prop_assert_eq!(text, format!("{a}{o}{b}"));
    }

    /// Any collection of substrings of one fragment collapses onto that
    /// fragment through containment elimination alone.
    #[test]
    fn prop_substrings_collapse_onto_whole(
        text in "[a-f]{1,30}",
        cuts in proptest::collection::vec((0usize..30, 1usize..30), 0..6),
    ) {
        let mut fragments = vec![text.clone()];
        for (start, len) in cuts {
            let start = start.min(text.len() - 1);
            let end = (start + len).min(text.len());
            fragments.push(text[start..end].to_string());
        }

        let reduction = Reducer::new().reduce(fragments).unwrap();
        prop_assert_eq!(&reduction.text, &text);
        prop_assert_eq!(reduction.stats.overlap_merges, 0);
    }

    /// On success, every pass removed at least one fragment and each
    /// containment or merge accounted for exactly one.
    #[test]
    fn prop_success_accounts_for_every_fragment(
        a in "[A-M]{1,8}",
        o in "[n-z]{1,8}",
        b in "[0-9]{1,8}",
    ) {
        let left = format!("{a}{o}");
        let right = format!("{o}{b}");
        let whole = format!("{a}{o}{b}");
        let fragments = vec![left, right, whole.clone(), o.clone()];

        let reduction = Reducer::new().reduce(fragments).unwrap();
        prop_assert_eq!(&reduction.text, &whole);
        prop_assert_eq!(
            reduction.stats.containments_removed + reduction.stats.overlap_merges,
            reduction.stats.input_fragments - 1
        );
        prop_assert!(reduction.stats.passes <= reduction.stats.input_fragments);
    }
}
