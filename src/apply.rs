use crate::{apply_error::ApplyError, diff::Diff, diff_step::DiffStep};

/// Applies `diff` to a copy of `source`, reproducing the target sequence
/// the diff was computed against: for all `x` and `y`,
/// `apply(&x, &diff(&x, &y)) == y`.
///
/// Deletions run first, back to front, so earlier removals never shift a
/// pending deletion's index; insertions follow front to back for the same
/// reason. Both orders come straight from the [`Diff::deletions`] and
/// [`Diff::insertions`] view contracts.
///
/// # Panics
///
/// Applying a diff that was not computed from `source` is a contract
/// violation: it panics on out-of-range indices and silently produces an
/// unrelated sequence otherwise. Use [`try_apply`] to turn both situations
/// into an [`ApplyError`].
#[must_use]
pub fn apply<T>(source: &[T], diff: &Diff<T>) -> Vec<T>
where
    T: PartialEq + Clone,
{
    let mut copy = source.to_vec();
    for deletion in diff.deletions() {
        copy.remove(deletion.position());
    }
    for insertion in diff.insertions() {
        let DiffStep::Insert { index, value } = insertion else {
            unreachable!("`Diff::insertions` only yields insert steps");
        };
        copy.insert(index, value);
    }
    copy
}

/// Fail-fast variant of [`apply`]: validates every step against the
/// working copy before touching it and reports a mismatched diff as an
/// [`ApplyError`] instead of panicking or returning garbage.
pub fn try_apply<T>(source: &[T], diff: &Diff<T>) -> Result<Vec<T>, ApplyError>
where
    T: PartialEq + Clone,
{
    let mut copy = source.to_vec();

    for deletion in diff.deletions() {
        let position = deletion.position();
        if position >= copy.len() {
            return Err(ApplyError::DeletionOutOfBounds {
                position,
                length: copy.len(),
            });
        }
        if copy[position] != *deletion.value() {
            return Err(ApplyError::DeletedValueMismatch { position });
        }
        copy.remove(position);
    }

    for insertion in diff.insertions() {
        let DiffStep::Insert { index, value } = insertion else {
            unreachable!("`Diff::insertions` only yields insert steps");
        };
        if index > copy.len() {
            return Err(ApplyError::InsertionOutOfBounds {
                position: index,
                length: copy.len(),
            });
        }
        copy.insert(index, value);
    }

    Ok(copy)
}
