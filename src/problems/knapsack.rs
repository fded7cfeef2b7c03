//! 0/1 and unbounded knapsack as table problems.
//!
//! Rows are items (row `i` considers items `0..i`), columns are capacities
//! `0..=W`. Both variants share the shape, the silent zero row and the
//! traceback; they differ only in which row the "take" branch reads:
//! - 0/1: `values[i-1] + dp[i-1][w - weights[i-1]]` (each item at most once);
//! - unbounded: `values[i-1] + dp[i][w - weights[i-1]]` (item reusable).

use crate::error::{DpError, Result};
use crate::table::{Coord, Table};
use crate::trace::Witness;
use crate::traits::TableProblem;
use crate::utils::{all_non_negative, check_dims, non_negative, same_len};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KnapsackKind {
    ZeroOne,
    Unbounded,
}

#[derive(Clone, Debug)]
pub struct KnapsackProblem<'a> {
    pub values: &'a [i64],
    weights: Vec<usize>,
    capacity: usize,
    kind: KnapsackKind,
}

impl<'a> KnapsackProblem<'a> {
    /// Validate the instance: equal lengths, non-negative capacity and
    /// weights, and a best attainable value that fits in `i64`.
    pub fn new(
        kind: KnapsackKind,
        values: &'a [i64],
        weights: &[i64],
        capacity: i64,
    ) -> Result<Self> {
        same_len(values, weights)?;
        let capacity = non_negative("capacity", capacity)?;
        all_non_negative("weights", weights)?;
        let weights: Vec<usize> = weights.iter().map(|&w| w as usize).collect();
        if value_bound(kind, values, &weights, capacity).is_none() {
            return Err(DpError::invalid(
                "values",
                "best attainable value does not fit in i64",
            ));
        }
        Ok(Self {
            values,
            weights,
            capacity,
            kind,
        })
    }

    pub fn zero_one(values: &'a [i64], weights: &[i64], capacity: i64) -> Result<Self> {
        Self::new(KnapsackKind::ZeroOne, values, weights, capacity)
    }

    pub fn unbounded(values: &'a [i64], weights: &[i64], capacity: i64) -> Result<Self> {
        Self::new(KnapsackKind::Unbounded, values, weights, capacity)
    }

    pub fn kind(&self) -> KnapsackKind {
        self.kind
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn n(&self) -> usize {
        self.values.len()
    }

    /// Recover the chosen items from a table built for this instance.
    pub fn traceback(&self, table: &Table<i64>, return_path: bool) -> Result<Witness<usize>> {
        check_dims("table", table.dims(), (self.rows(), self.cols()))?;
        Ok(walk_back(table, &self.weights, self.capacity, return_path))
    }
}

impl<'a> TableProblem for KnapsackProblem<'a> {
    type Cell = i64;

    fn name(&self) -> &'static str {
        match self.kind {
            KnapsackKind::ZeroOne => "zero_one_knapsack",
            KnapsackKind::Unbounded => "unbounded_knapsack",
        }
    }

    fn rows(&self) -> usize {
        self.n() + 1
    }

    fn cols(&self) -> usize {
        self.capacity + 1
    }

    fn init_table(&self) -> Table<i64> {
        Table::new(self.rows(), self.cols(), 0)
    }

    fn fill_origin(&self) -> Coord {
        // Column 0 is part of the recurrence (only zero-weight items fit).
        (1, 0)
    }

    fn fill_cell(&self, dp: &Table<i64>, (i, w): Coord) -> i64 {
        let value = self.values[i - 1];
        let weight = self.weights[i - 1];
        let skip = dp[(i - 1, w)];
        if weight > w {
            return skip;
        }
        let rest = match self.kind {
            KnapsackKind::ZeroOne => dp[(i - 1, w - weight)],
            // A zero-weight item would read the cell being written; its
            // value at that point is `skip`.
            KnapsackKind::Unbounded if weight == 0 => skip,
            KnapsackKind::Unbounded => dp[(i, w - weight)],
        };
        skip.max(value + rest)
    }
}

/// Upper bound on any table cell, or `None` if it overflows `i64`.
///
/// Each item contributes its value times the most copies that can fit:
/// one for 0/1 (and for a zero-weight unbounded item, which the recurrence
/// adds once per row), `capacity / weight` otherwise.
fn value_bound(
    kind: KnapsackKind,
    values: &[i64],
    weights: &[usize],
    capacity: usize,
) -> Option<i64> {
    values
        .iter()
        .zip(weights)
        .filter(|(v, _)| **v > 0)
        .try_fold(0i64, |acc, (&v, &w)| {
            let copies = match kind {
                KnapsackKind::Unbounded if w > 0 => capacity / w,
                _ => 1,
            };
            acc.checked_add(v.checked_mul(i64::try_from(copies).ok()?)?)
        })
}

/// Walk a finished 0/1 or unbounded knapsack table back from `(n, W)`.
///
/// An item is reported when its row changed the value at the current
/// capacity. Each row is visited once, so an item reused several times in
/// the unbounded variant is still reported once.
pub fn knapsack_traceback(
    table: &Table<i64>,
    values: &[i64],
    weights: &[i64],
    capacity: i64,
    return_path: bool,
) -> Result<Witness<usize>> {
    same_len(values, weights)?;
    let capacity = non_negative("capacity", capacity)?;
    all_non_negative("weights", weights)?;
    check_dims("table", table.dims(), (values.len() + 1, capacity + 1))?;
    let weights: Vec<usize> = weights.iter().map(|&w| w as usize).collect();
    Ok(walk_back(table, &weights, capacity, return_path))
}

fn walk_back(
    dp: &Table<i64>,
    weights: &[usize],
    capacity: usize,
    return_path: bool,
) -> Witness<usize> {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("knapsack_traceback", items = weights.len()).entered();

    let mut items = Vec::new();
    let mut path = Vec::new();
    let mut i = weights.len();
    let mut w = Some(capacity);
    while let Some(cap) = w {
        if i == 0 {
            break;
        }
        if dp[(i, cap)] != dp[(i - 1, cap)] {
            items.push(i - 1);
            path.push((i, cap));
            w = cap.checked_sub(weights[i - 1]);
        }
        i -= 1;
    }
    Witness::from_backward(items, path, return_path)
}
