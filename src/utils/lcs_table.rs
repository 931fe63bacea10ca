/// Builds the memoization table of longest-common-subsequence lengths for
/// every pair of prefixes of `x` and `y`.
///
/// `table[i][j]` is the LCS length of `x[..i]` and `y[..j]`, so the grid is
/// `(x.len() + 1) x (y.len() + 1)` with row and column zero all zero. Both
/// the LCS and the diff backtracking walk this table from its last cell.
///
/// Time and space are `O(x.len() * y.len())`; the table is dropped as soon
/// as its caller finishes backtracking.
pub fn build_table<T>(x: &[T], y: &[T]) -> Vec<Vec<usize>>
where
    T: PartialEq,
{
    let n = x.len();
    let m = y.len();

    let mut table = vec![vec![0usize; m + 1]; n + 1];
    for i in 1..=n {
        for j in 1..=m {
            if x[i - 1] == y[j - 1] {
                table[i][j] = table[i - 1][j - 1] + 1;
            } else {
                table[i][j] = table[i - 1][j].max(table[i][j - 1]);
            }
        }
    }

    table
}
