use crate::utils::lcs_table::build_table;

/// Returns the longest common subsequence of `a` and `b`: the longest
/// ordered (not necessarily contiguous) sequence of elements present in
/// both inputs.
///
/// Several distinct subsequences can share the maximal length. The
/// backtracking below resolves those ties deterministically: when the cell
/// above and the cell to the left carry the same length, it walks up
/// (towards dropping an element of `a`) first. Callers can rely on the
/// returned subsequence being stable across invocations.
///
/// ```
/// use seqdelta::lcs;
///
/// let common = lcs(&["a", "b", "c"], &["b", "c", "d"]);
/// assert_eq!(common, vec!["b", "c"]);
/// ```
#[must_use]
pub fn lcs<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    let table = build_table(a, b);

    // Walk the table backward from its last cell. Found elements come out
    // back to front, hence the reverse at the end.
    let mut result = Vec::with_capacity(table[a.len()][b.len()]);
    let mut i = a.len();
    let mut j = b.len();
    while i > 0 && j > 0 {
        if a[i - 1] == b[j - 1] {
            result.push(a[i - 1].clone());
            i -= 1;
            j -= 1;
        } else if table[i - 1][j] >= table[i][j - 1] {
            i -= 1;
        } else {
            j -= 1;
        }
    }

    result.reverse();
    result
}
