use pretty_assertions::assert_eq;
use proptest::prelude::*;
use seqdelta::{DiffStep, apply, diff, lcs, try_apply};
use test_case::test_case;

proptest! {
    #[test]
    fn test_apply_round_trip(
        source in prop::collection::vec(any::<u8>(), 0..40),
        target in prop::collection::vec(any::<u8>(), 0..40),
    ) {
        let changes = diff(&source, &target);
        prop_assert_eq!(apply(&source, &changes), target);
    }

    #[test]
    fn test_reversed_round_trip(
        source in prop::collection::vec(any::<u8>(), 0..40),
        target in prop::collection::vec(any::<u8>(), 0..40),
    ) {
        let reversed = diff(&source, &target).reversed();
        prop_assert_eq!(apply(&target, &reversed), source);
    }

    #[test]
    fn test_checked_apply_accepts_own_source(
        source in prop::collection::vec(any::<u8>(), 0..40),
        target in prop::collection::vec(any::<u8>(), 0..40),
    ) {
        let changes = diff(&source, &target);
        prop_assert_eq!(try_apply(&source, &changes), Ok(target));
    }

    #[test]
    fn test_diff_against_self_is_empty(els in prop::collection::vec(any::<u8>(), 0..40)) {
        let changes = diff(&els, &els);
        prop_assert!(changes.is_empty());
        prop_assert!(changes.insertions().is_empty());
        prop_assert!(changes.deletions().is_empty());
    }

    #[test]
    fn test_lcs_bounds_and_subsequence(
        a in prop::collection::vec(0u8..4, 0..30),
        b in prop::collection::vec(0u8..4, 0..30),
    ) {
        let common = lcs(&a, &b);
        prop_assert!(common.len() <= a.len().min(b.len()));
        prop_assert!(is_subsequence(&common, &a));
        prop_assert!(is_subsequence(&common, &b));
    }

    #[test]
    fn test_operations_account_for_every_step(
        source in prop::collection::vec(0u8..6, 0..30),
        target in prop::collection::vec(0u8..6, 0..30),
    ) {
        let changes = diff(&source, &target);
        let operations = changes.operations();

        // Each move consumes one insertion and one deletion.
        prop_assert_eq!(
            changes.insertions().len() + changes.deletions().len(),
            2 * operations.moves.len()
                + operations.insertions.len()
                + operations.deletions.len()
        );
        prop_assert!(operations.moves.iter().all(DiffStep::is_move));
        prop_assert!(operations.insertions.iter().all(DiffStep::is_insertion));
        prop_assert!(operations.deletions.iter().all(DiffStep::is_deletion));
    }
}

#[test]
fn test_shift_scenario() {
    let source = ["a", "b", "c"];
    let target = ["b", "c", "d"];
    let changes = diff(&source, &target);

    assert_eq!(
        changes.deletions(),
        vec![DiffStep::Delete { index: 0, value: "a" }]
    );
    assert_eq!(
        changes.insertions(),
        vec![DiffStep::Insert { index: 2, value: "d" }]
    );
    assert_eq!(apply(&source, &changes), target);
}

#[test]
fn test_swap_scenario() {
    let operations = diff(&["a", "b"], &["b", "a"]).operations();

    assert_eq!(
        operations.moves,
        vec![DiffStep::Move { from: 0, to: 1, value: "a" }]
    );
    assert_eq!(operations.insertions, vec![]);
    assert_eq!(operations.deletions, vec![]);
}

#[test]
fn test_single_insertion_scenario() {
    let changes = diff(&[], &["x"]);
    assert_eq!(
        changes.steps(),
        &[DiffStep::Insert { index: 0, value: "x" }]
    );
    assert_eq!(lcs::<&str>(&[], &["x"]), Vec::<&str>::new());
}

#[test_case(&["a"]; "single element")]
#[test_case(&["a", "b", "c"]; "three elements")]
#[test_case(&["x", "x", "x"]; "repeated elements")]
fn test_identical_sequences(els: &[&str]) {
    let changes = diff(els, els);
    assert!(changes.insertions().is_empty());
    assert!(changes.deletions().is_empty());
    assert_eq!(lcs(els, els), els);
}

#[test]
fn test_operations_views_are_idempotent() {
    let changes = diff(&["a", "b", "c", "d"], &["d", "b", "x"]);

    assert_eq!(changes.insertions(), changes.insertions());
    assert_eq!(changes.deletions(), changes.deletions());
    assert_eq!(changes.operations(), changes.operations());
}

fn is_subsequence(needle: &[u8], haystack: &[u8]) -> bool {
    let mut elements = haystack.iter();
    needle.iter().all(|wanted| elements.any(|el| el == wanted))
}
