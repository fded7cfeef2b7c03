//! Subset-sum reachability table, its traceback, and the partition helper.
//!
//! `dp[i][w]` is true when some subset of `values[0..i]` sums to exactly
//! `w`. Only `dp[0][0]` is seeded (silently); the recurrence then makes
//! `dp[i][0]` true for every row.

use crate::error::{DpError, Result};
use crate::table::{Coord, Table};
use crate::trace::Witness;
use crate::traits::TableProblem;
use crate::utils::{all_non_negative, check_dims, non_negative};

#[derive(Clone, Debug)]
pub struct SubsetSumProblem {
    values: Vec<usize>,
    target: usize,
}

impl SubsetSumProblem {
    pub fn new(values: &[i64], target: i64) -> Result<Self> {
        let target = non_negative("target", target)?;
        all_non_negative("values", values)?;
        Ok(Self {
            values: values.iter().map(|&v| v as usize).collect(),
            target,
        })
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn traceback(&self, table: &Table<bool>, return_path: bool) -> Result<Witness<usize>> {
        check_dims("table", table.dims(), (self.rows(), self.cols()))?;
        Ok(walk_back(table, &self.values, self.target, return_path))
    }
}

impl TableProblem for SubsetSumProblem {
    type Cell = bool;

    fn name(&self) -> &'static str {
        "subset_sum"
    }

    fn rows(&self) -> usize {
        self.values.len() + 1
    }

    fn cols(&self) -> usize {
        self.target + 1
    }

    fn init_table(&self) -> Table<bool> {
        let mut dp = Table::new(self.rows(), self.cols(), false);
        dp[(0, 0)] = true;
        dp
    }

    fn fill_origin(&self) -> Coord {
        (1, 0)
    }

    fn fill_cell(&self, dp: &Table<bool>, (i, w): Coord) -> bool {
        let v = self.values[i - 1];
        dp[(i - 1, w)] || (v <= w && dp[(i - 1, w - v)])
    }
}

/// Walk a finished subset-sum table back from `(n, target)`.
///
/// Item `i-1` is taken when row `i` is the first to reach the current sum.
/// When `dp[n][target]` is false the witness is empty.
pub fn subset_traceback(
    table: &Table<bool>,
    values: &[i64],
    target: i64,
    return_path: bool,
) -> Result<Witness<usize>> {
    let problem = SubsetSumProblem::new(values, target)?;
    problem.traceback(table, return_path)
}

fn walk_back(dp: &Table<bool>, values: &[usize], target: usize, return_path: bool) -> Witness<usize> {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("subset_traceback", items = values.len(), target).entered();

    let mut items = Vec::new();
    let mut path = Vec::new();
    let mut i = values.len();
    let mut w = Some(target);
    while let Some(sum) = w {
        if i == 0 {
            break;
        }
        if dp[(i, sum)] && !dp[(i - 1, sum)] {
            items.push(i - 1);
            path.push((i, sum));
            w = sum.checked_sub(values[i - 1]);
        }
        i -= 1;
    }
    Witness::from_backward(items, path, return_path)
}

/// Target for an equal-sum partition, or `None` when the total is odd and
/// no table needs to be built.
pub fn partition_target(values: &[i64]) -> Result<Option<i64>> {
    all_non_negative("values", values)?;
    let total = values
        .iter()
        .try_fold(0i64, |acc, &v| acc.checked_add(v))
        .ok_or_else(|| DpError::invalid("values", "total does not fit in i64"))?;
    Ok((total % 2 == 0).then_some(total / 2))
}
