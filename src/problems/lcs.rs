//! Longest Common Subsequence (LCS) table and traceback.
//!
//! `dp[i][j]` is the LCS length of `s[0..i]` and `t[0..j]`. Row and column
//! 0 are silent zeros, so step capture records exactly `m * n` cells.
//!
//! The problem is generic over the element type; anything with `PartialEq`
//! works (bytes, chars, tokens).

use crate::error::Result;
use crate::table::{Coord, Table};
use crate::trace::Witness;
use crate::traits::TableProblem;
use crate::utils::check_dims;

#[derive(Clone, Debug)]
pub struct LcsProblem<'a, T> {
    pub s: &'a [T],
    pub t: &'a [T],
}

impl<'a, T: PartialEq + Clone + std::fmt::Debug> LcsProblem<'a, T> {
    pub fn new(s: &'a [T], t: &'a [T]) -> Self {
        Self { s, t }
    }

    pub fn traceback(&self, table: &Table<usize>, return_path: bool) -> Result<Witness<T>> {
        lcs_traceback(table, self.s, self.t, return_path)
    }
}

impl<'a, T: PartialEq + Clone + std::fmt::Debug> TableProblem for LcsProblem<'a, T> {
    type Cell = usize;

    fn name(&self) -> &'static str {
        "lcs"
    }

    fn rows(&self) -> usize {
        self.s.len() + 1
    }

    fn cols(&self) -> usize {
        self.t.len() + 1
    }

    fn init_table(&self) -> Table<usize> {
        Table::new(self.rows(), self.cols(), 0)
    }

    fn fill_cell(&self, dp: &Table<usize>, (i, j): Coord) -> usize {
        if self.s[i - 1] == self.t[j - 1] {
            dp[(i - 1, j - 1)] + 1
        } else {
            dp[(i - 1, j)].max(dp[(i, j - 1)])
        }
    }
}

/// Recover one LCS from a finished table.
///
/// Matches move diagonally; otherwise the walk moves toward the larger
/// neighbour, preferring to drop a character of `s` on ties.
pub fn lcs_traceback<T: PartialEq + Clone>(
    dp: &Table<usize>,
    s: &[T],
    t: &[T],
    return_path: bool,
) -> Result<Witness<T>> {
    check_dims("table", dp.dims(), (s.len() + 1, t.len() + 1))?;
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("lcs_traceback", m = s.len(), n = t.len()).entered();

    let (mut i, mut j) = (s.len(), t.len());
    let cap = s.len().min(t.len());
    let mut items = Vec::with_capacity(cap);
    let mut path = Vec::with_capacity(cap);
    while i > 0 && j > 0 {
        if s[i - 1] == t[j - 1] {
            items.push(s[i - 1].clone());
            path.push((i, j));
            i -= 1;
            j -= 1;
        } else if dp[(i - 1, j)] >= dp[(i, j - 1)] {
            i -= 1;
        } else {
            j -= 1;
        }
    }
    Ok(Witness::from_backward(items, path, return_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TableEngine;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn abcde_vs_ace() {
        let (s, t) = (chars("abcde"), chars("ace"));
        let problem = LcsProblem::new(&s, &t);
        let (table, trace) = TableEngine::new(problem.clone()).build_with_steps().unwrap();
        assert_eq!(table.terminal(), Some(&3));
        assert_eq!(trace.len(), 5 * 3);

        let witness = problem.traceback(&table, true).unwrap();
        assert_eq!(witness.text(), "ace");
        assert_eq!(witness.path, Some(vec![(1, 1), (3, 2), (5, 3)]));
    }

    #[test]
    fn ties_drop_from_first_sequence() {
        // "ab" vs "ba": both "a" and "b" are optimal; the walk steps up
        // from (2,2) to (1,2) and matches "a" there.
        let (s, t) = (chars("ab"), chars("ba"));
        let problem = LcsProblem::new(&s, &t);
        let table = TableEngine::new(problem.clone()).build().unwrap();
        assert_eq!(problem.traceback(&table, false).unwrap().text(), "a");
    }

    #[test]
    fn works_over_bytes() {
        let problem = LcsProblem::new(b"ACCGGT".as_slice(), b"CGT".as_slice());
        let table = TableEngine::new(problem.clone()).build().unwrap();
        assert_eq!(table.terminal(), Some(&3));
        assert_eq!(problem.traceback(&table, false).unwrap().items, b"CGT".to_vec());
    }

    #[test]
    fn empty_side_has_no_steps() {
        let (s, t) = (chars(""), chars("abc"));
        let problem = LcsProblem::new(&s, &t);
        let (table, trace) = TableEngine::new(problem.clone()).build_with_steps().unwrap();
        assert!(trace.is_empty());
        assert_eq!(table.terminal(), Some(&0));
        assert!(problem.traceback(&table, true).unwrap().is_empty());
    }

    #[test]
    fn corrupt_terminal_cell_does_not_size_the_witness() {
        let mut table = Table::new(2, 2, 0usize);
        table[(1, 1)] = usize::MAX;
        let witness = lcs_traceback(&table, &['a'], &['a'], true).unwrap();
        assert_eq!(witness.text(), "a");
        let witness = lcs_traceback(&table, &['a'], &['b'], false).unwrap();
        assert!(witness.is_empty());
    }
}
