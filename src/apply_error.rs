use thiserror::Error;

/// Error type for applying a diff that does not fit the given source.
///
/// Only [`try_apply`](crate::try_apply) reports these; the unchecked
/// [`apply`](crate::apply) documents the same situations as a precondition
/// violation instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApplyError {
    /// A deletion points past the end of the working copy.
    #[error(
        "invalid diff: deleting at position {position}, but the sequence only has {length} \
         elements at that point"
    )]
    DeletionOutOfBounds {
        /// The deletion's source position.
        position: usize,
        /// The working copy's length when the deletion was attempted.
        length: usize,
    },

    /// An insertion points past the end of the working copy.
    #[error(
        "invalid diff: inserting at position {position}, but the sequence only has {length} \
         elements at that point"
    )]
    InsertionOutOfBounds {
        /// The insertion's target position.
        position: usize,
        /// The working copy's length when the insertion was attempted.
        length: usize,
    },

    /// A deletion's recorded value differs from the element actually found
    /// at its position, so the diff was computed against a different
    /// source.
    #[error("invalid diff: the element at position {position} is not the one the diff deletes")]
    DeletedValueMismatch {
        /// The deletion's source position.
        position: usize,
    },
}
