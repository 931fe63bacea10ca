//! LCS-based diffing of ordered sequences.
//!
//! [`diff`] computes the minimal list of insertions and deletions turning
//! one slice into another, [`apply`] replays such a list onto a copy of the
//! source, and [`Diff::operations`] refines the raw steps into
//! insert/delete/move groups the way list-reconciliation layers want them.
//! [`lcs`] exposes the underlying longest common subsequence on its own.
//!
//! ```
//! use seqdelta::{apply, diff};
//!
//! let yesterday = vec!["eggs", "milk", "bread"];
//! let today = vec!["milk", "bread", "cheese"];
//!
//! let changes = diff(&yesterday, &today);
//! assert_eq!(apply(&yesterday, &changes), today);
//! assert_eq!(changes.insertions().len(), 1);
//! assert_eq!(changes.deletions().len(), 1);
//! ```
//!
//! All entry points are pure and synchronous; nothing is shared between
//! calls, so they can run concurrently as long as each call owns its
//! inputs. The `serde` feature derives `Serialize`/`Deserialize` for the
//! diff and step types.

mod apply;
mod apply_error;
mod diff;
mod diff_step;
mod lcs;
mod utils;

pub use apply::{apply, try_apply};
pub use apply_error::ApplyError;
pub use diff::{Diff, Operations, diff};
pub use diff_step::DiffStep;
pub use lcs::lcs;
