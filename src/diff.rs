use std::{
    collections::{HashMap, VecDeque},
    hash::Hash,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{diff_step::DiffStep, utils::lcs_table::build_table};

/// The edit sequence transforming one sequence into another, as produced by
/// [`diff`].
///
/// The stored step order is the table-traversal order of the backward path
/// reconstruction (deletions surface before insertions at a shared cell);
/// it carries no global sortedness guarantee. Callers that need a stable
/// order must go through the [`insertions`](Diff::insertions),
/// [`deletions`](Diff::deletions) or [`operations`](Diff::operations)
/// views, which are recomputed on demand from the immutable step list.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diff<T> {
    steps: Vec<DiffStep<T>>,
}

/// The three disjoint step groups computed by [`Diff::operations`]: every
/// insertion and deletion of the originating diff lands in exactly one of
/// them.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operations<T> {
    /// Paired insert/delete steps, ascending by destination position.
    pub moves: Vec<DiffStep<T>>,
    /// Insertions not consumed by a move, ascending by position.
    pub insertions: Vec<DiffStep<T>>,
    /// Deletions not consumed by a move, descending by position.
    pub deletions: Vec<DiffStep<T>>,
}

/// Computes the minimal edit sequence turning `source` into `target`.
///
/// The underlying LCS table costs `O(source.len() * target.len())` time and
/// space and is discarded before this function returns. Both inputs are
/// read-only; callers needing bounded latency must bound the input lengths
/// themselves.
///
/// ```
/// use seqdelta::{apply, diff};
///
/// let source = vec!["a", "b", "c"];
/// let target = vec!["b", "c", "d"];
/// let diff = diff(&source, &target);
/// assert_eq!(apply(&source, &diff), target);
/// ```
#[must_use]
pub fn diff<T>(source: &[T], target: &[T]) -> Diff<T>
where
    T: PartialEq + Clone,
{
    let table = build_table(source, target);

    // Walk the table backward from (n, m), collecting steps in reverse
    // traversal order. The loop replaces the textbook recursion so the
    // stack stays flat on long inputs; the final reverse restores the
    // append-after-recursion order.
    let mut steps = Vec::new();
    let mut i = source.len();
    let mut j = target.len();
    while i > 0 || j > 0 {
        if i == 0 {
            j -= 1;
            steps.push(DiffStep::Insert {
                index: j,
                value: target[j].clone(),
            });
        } else if j == 0 {
            i -= 1;
            steps.push(DiffStep::Delete {
                index: i,
                value: source[i].clone(),
            });
        } else if table[i][j] == table[i][j - 1] {
            // When stepping left and stepping up both preserve the LCS
            // length, the insertion direction wins. Checked first on
            // purpose: it is the tie-break that keeps output deterministic.
            j -= 1;
            steps.push(DiffStep::Insert {
                index: j,
                value: target[j].clone(),
            });
        } else if table[i][j] == table[i - 1][j] {
            i -= 1;
            steps.push(DiffStep::Delete {
                index: i,
                value: source[i].clone(),
            });
        } else {
            // Matching elements, part of the LCS. No step emitted.
            i -= 1;
            j -= 1;
        }
    }

    steps.reverse();
    Diff { steps }
}

impl<T> Diff<T> {
    /// Wraps an existing step list. [`diff`] is the normal way to obtain a
    /// `Diff`; this constructor exists for callers assembling edits by
    /// hand. The [`apply`](crate::apply) round-trip contract only holds
    /// for diffs produced by [`diff`].
    #[must_use]
    pub fn from_steps(steps: Vec<DiffStep<T>>) -> Self {
        Self { steps }
    }

    /// The raw steps in traversal order.
    #[must_use]
    pub fn steps(&self) -> &[DiffStep<T>] {
        &self.steps
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// All insert steps, ascending by position. Applying them in this
    /// order keeps each step's intended index valid.
    #[must_use]
    pub fn insertions(&self) -> Vec<DiffStep<T>>
    where
        T: Clone,
    {
        let mut insertions: Vec<DiffStep<T>> = self
            .steps
            .iter()
            .filter(|step| step.is_insertion())
            .cloned()
            .collect();
        insertions.sort_by_key(DiffStep::position);
        insertions
    }

    /// All delete steps, **descending** by position. The ordering is part
    /// of the contract: removing from a mutable copy back to front never
    /// shifts the index of a deletion still to be processed.
    #[must_use]
    pub fn deletions(&self) -> Vec<DiffStep<T>>
    where
        T: Clone,
    {
        let mut deletions: Vec<DiffStep<T>> = self
            .steps
            .iter()
            .filter(|step| step.is_deletion())
            .cloned()
            .collect();
        deletions.sort_by(|left, right| right.position().cmp(&left.position()));
        deletions
    }

    /// Classifies the diff's steps into moves, remaining insertions and
    /// remaining deletions. A move pairs a deletion with an insertion of
    /// the same value; this is the costlier but semantically richer
    /// alternative to consuming [`insertions`](Diff::insertions) and
    /// [`deletions`](Diff::deletions) directly.
    ///
    /// When a value occurs several times among the candidates, pairing is
    /// done in ascending position order on both sides: the lowest-indexed
    /// deletion of a value takes the lowest-indexed insertion of that
    /// value, and so on. The policy is deterministic and observable, so it
    /// is documented here rather than left to map iteration order.
    #[must_use]
    pub fn operations(&self) -> Operations<T>
    where
        T: Eq + Hash + Clone,
    {
        let insertions = self.insertions();
        let deletions = self.deletions();

        // Unconsumed insertion slots per value, each queue ascending by
        // position because `insertions` is.
        let mut candidates: HashMap<&T, VecDeque<usize>> = HashMap::new();
        for (slot, insertion) in insertions.iter().enumerate() {
            candidates.entry(insertion.value()).or_default().push_back(slot);
        }

        let mut moves = Vec::new();
        let mut insertion_consumed = vec![false; insertions.len()];
        let mut deletion_consumed = vec![false; deletions.len()];

        // `deletions` is descending, so scan it back to front to pair in
        // ascending position order.
        for (slot, deletion) in deletions.iter().enumerate().rev() {
            let Some(queue) = candidates.get_mut(deletion.value()) else {
                continue;
            };
            let Some(insertion_slot) = queue.pop_front() else {
                continue;
            };

            moves.push(DiffStep::Move {
                from: deletion.position(),
                to: insertions[insertion_slot].position(),
                value: deletion.value().clone(),
            });
            insertion_consumed[insertion_slot] = true;
            deletion_consumed[slot] = true;
        }

        moves.sort_by_key(DiffStep::position);

        let keep_unconsumed = |consumed: Vec<bool>, steps: Vec<DiffStep<T>>| {
            steps
                .into_iter()
                .zip(consumed)
                .filter_map(|(step, consumed)| (!consumed).then_some(step))
                .collect()
        };

        Operations {
            moves,
            insertions: keep_unconsumed(insertion_consumed, insertions),
            deletions: keep_unconsumed(deletion_consumed, deletions),
        }
    }

    /// The diff transforming the original target back into the original
    /// source: step order is mirrored, inserts and deletes swap roles and
    /// move endpoints flip.
    #[must_use]
    pub fn reversed(&self) -> Diff<T>
    where
        T: Clone,
    {
        let steps = self
            .steps
            .iter()
            .rev()
            .map(|step| match step.clone() {
                DiffStep::Insert { index, value } => DiffStep::Delete { index, value },
                DiffStep::Delete { index, value } => DiffStep::Insert { index, value },
                DiffStep::Move { from, to, value } => DiffStep::Move {
                    from: to,
                    to: from,
                    value,
                },
            })
            .collect();
        Diff { steps }
    }
}
