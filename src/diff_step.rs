use std::fmt::{Debug, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single edit produced by [`diff`](crate::diff).
///
/// Insert indices are positions in the *target* sequence, delete indices are
/// positions in the *source* sequence. `Move` steps never come out of
/// [`diff`](crate::diff) directly; they are derived by
/// [`Diff::operations`](crate::Diff::operations), which pairs an insertion
/// and a deletion of the same value.
///
/// Two steps are equal when both their positions and their values match.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffStep<T> {
    /// `value` enters the result at `index` (target coordinates).
    Insert { index: usize, value: T },
    /// `value` leaves the source from `index` (source coordinates).
    Delete { index: usize, value: T },
    /// `value` keeps existing but its position changes.
    Move { from: usize, to: usize, value: T },
}

impl<T> DiffStep<T> {
    /// The position used for ordering steps: the step's own index for
    /// inserts and deletes, the destination for moves.
    #[must_use]
    pub fn position(&self) -> usize {
        match self {
            DiffStep::Insert { index, .. } | DiffStep::Delete { index, .. } => *index,
            DiffStep::Move { to, .. } => *to,
        }
    }

    /// The element this step carries.
    #[must_use]
    pub fn value(&self) -> &T {
        match self {
            DiffStep::Insert { value, .. }
            | DiffStep::Delete { value, .. }
            | DiffStep::Move { value, .. } => value,
        }
    }

    /// The position an element departs from. Equal to [`position`] for
    /// inserts and deletes.
    ///
    /// [`position`]: DiffStep::position
    #[must_use]
    pub fn from(&self) -> usize {
        match self {
            DiffStep::Move { from, .. } => *from,
            step @ (DiffStep::Insert { .. } | DiffStep::Delete { .. }) => step.position(),
        }
    }

    /// The position an element arrives at. Equal to [`position`] for
    /// inserts and deletes.
    ///
    /// [`position`]: DiffStep::position
    #[must_use]
    pub fn to(&self) -> usize {
        match self {
            DiffStep::Move { to, .. } => *to,
            step @ (DiffStep::Insert { .. } | DiffStep::Delete { .. }) => step.position(),
        }
    }

    #[must_use]
    pub fn is_insertion(&self) -> bool {
        matches!(self, DiffStep::Insert { .. })
    }

    #[must_use]
    pub fn is_deletion(&self) -> bool {
        matches!(self, DiffStep::Delete { .. })
    }

    #[must_use]
    pub fn is_move(&self) -> bool {
        matches!(self, DiffStep::Move { .. })
    }
}

/// Compact rendering: `+v@i` for inserts, `-v@i` for deletes and
/// `-v@from+v@to` for moves.
impl<T> Display for DiffStep<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiffStep::Insert { index, value } => write!(f, "+{value:?}@{index}"),
            DiffStep::Delete { index, value } => write!(f, "-{value:?}@{index}"),
            DiffStep::Move { from, to, value } => {
                write!(f, "-{value:?}@{from}+{value:?}@{to}")
            }
        }
    }
}
