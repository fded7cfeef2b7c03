//! Shortest common supersequence (SCS) table and traceback.
//!
//! `dp[i][j]` is the SCS length of `s[0..i]` and `t[0..j]`. The base column
//! (`dp[i][0] = i`) and base row (`dp[0][j] = j`) are recorded as steps,
//! column first, so step capture covers every cell of the table.

use crate::error::Result;
use crate::table::{Coord, Table};
use crate::trace::Witness;
use crate::traits::TableProblem;
use crate::utils::check_dims;

#[derive(Clone, Debug)]
pub struct ScsProblem<'a, T> {
    pub s: &'a [T],
    pub t: &'a [T],
}

impl<'a, T: PartialEq + Clone + std::fmt::Debug> ScsProblem<'a, T> {
    pub fn new(s: &'a [T], t: &'a [T]) -> Self {
        Self { s, t }
    }

    pub fn traceback(&self, table: &Table<usize>, return_path: bool) -> Result<Witness<T>> {
        scs_traceback(table, self.s, self.t, return_path)
    }
}

impl<'a, T: PartialEq + Clone + std::fmt::Debug> TableProblem for ScsProblem<'a, T> {
    type Cell = usize;

    fn name(&self) -> &'static str {
        "shortest_common_supersequence"
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

    fn seed_cells(&self) -> Vec<(Coord, usize)> {
        let column = (0..self.rows()).map(|i| ((i, 0), i));
        let row = (1..self.cols()).map(|j| ((0, j), j));
        column.chain(row).collect()
    }

    fn fill_cell(&self, dp: &Table<usize>, (i, j): Coord) -> usize {
        if self.s[i - 1] == self.t[j - 1] {
            dp[(i - 1, j - 1)] + 1
        } else {
            dp[(i - 1, j)].min(dp[(i, j - 1)]) + 1
        }
    }
}

/// Recover one shortest common supersequence from a finished table.
///
/// On a mismatch the walk emits the character whose removal leads to the
/// strictly smaller neighbour (`s` when `dp[i-1][j] < dp[i][j-1]`, else
/// `t`). Once either index hits 0 the rest of the other input is drained.
pub fn scs_traceback<T: PartialEq + Clone>(
    dp: &Table<usize>,
    s: &[T],
    t: &[T],
    return_path: bool,
) -> Result<Witness<T>> {
    check_dims("table", dp.dims(), (s.len() + 1, t.len() + 1))?;
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("scs_traceback", m = s.len(), n = t.len()).entered();

    let (mut i, mut j) = (s.len(), t.len());
    let mut items = Vec::with_capacity(s.len() + t.len());
    let mut path = Vec::with_capacity(s.len() + t.len());
    while i > 0 && j > 0 {
        path.push((i, j));
        if s[i - 1] == t[j - 1] {
            items.push(s[i - 1].clone());
            i -= 1;
            j -= 1;
        } else if dp[(i - 1, j)] < dp[(i, j - 1)] {
            items.push(s[i - 1].clone());
            i -= 1;
        } else {
            items.push(t[j - 1].clone());
            j -= 1;
        }
    }
    while i > 0 {
        path.push((i, 0));
        items.push(s[i - 1].clone());
        i -= 1;
    }
    while j > 0 {
        path.push((0, j));
        items.push(t[j - 1].clone());
        j -= 1;
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
    fn abac_vs_cab() {
        let (s, t) = (chars("abac"), chars("cab"));
        let problem = ScsProblem::new(&s, &t);
        let table = TableEngine::new(problem.clone()).build().unwrap();
        assert_eq!(table.terminal(), Some(&5));
        let witness = problem.traceback(&table, true).unwrap();
        assert_eq!(witness.text(), "cabac");
        assert_eq!(witness.path.as_ref().map(Vec::len), Some(5));
    }

    #[test]
    fn base_row_and_column_are_recorded() {
        let (s, t) = (chars("ab"), chars("xyz"));
        let problem = ScsProblem::new(&s, &t);
        let (table, trace) = TableEngine::new(problem).build_with_steps().unwrap();
        assert_eq!(trace.len(), 3 * 4);
        assert_eq!(&trace.coords[..6], &[(0, 0), (1, 0), (2, 0), (0, 1), (0, 2), (0, 3)]);
        assert_eq!(table.row(0), &[0, 1, 2, 3]);
        assert_eq!(table.terminal(), Some(&5));
    }

    #[test]
    fn drains_the_longer_input() {
        let (s, t) = (chars("abc"), chars(""));
        let problem = ScsProblem::new(&s, &t);
        let table = TableEngine::new(problem.clone()).build().unwrap();
        let witness = problem.traceback(&table, true).unwrap();
        assert_eq!(witness.text(), "abc");
        assert_eq!(witness.path, Some(vec![(1, 0), (2, 0), (3, 0)]));
    }
}
