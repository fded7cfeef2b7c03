//! Core trait definitions for table-filling dynamic programs.
//!
//! To run a recurrence through [`TableEngine`](crate::engine::TableEngine),
//! implement [`TableProblem`] for a struct that captures the instance
//! (item values, capacities, sequences).
//!
//! The trait encodes the fill protocol used for visualization:
//! - Shape: a `rows() x cols()` grid of cells.
//! - Silent base: cells set by [`TableProblem::init_table`] before filling;
//!   these never show up as steps.
//! - Recorded seeds: base cells written one at a time and recorded as steps
//!   (for recurrences whose base row/column is part of the animation).
//! - Interior: every cell from [`TableProblem::fill_origin`] to the
//!   bottom-right corner, row-major, computed by [`TableProblem::fill_cell`].

use crate::table::{Coord, Table};

/// A dynamic program whose state is a dense 2-D table.
///
/// Implementations are pure: the same instance always yields the same
/// table, and [`fill_cell`](TableProblem::fill_cell) may only read cells
/// that precede `coord` in fill order.
pub trait TableProblem {
    /// Value stored in each cell (best value, length, reachability, ...).
    type Cell: Clone + PartialEq + std::fmt::Debug;

    /// Short variant name used in errors and logs.
    fn name(&self) -> &'static str;

    /// Number of table rows (first dimension + 1 for the empty prefix).
    fn rows(&self) -> usize;

    /// Number of table columns.
    fn cols(&self) -> usize;

    /// Allocate the table with its silent base cases in place.
    fn init_table(&self) -> Table<Self::Cell>;

    /// Base cells that are written one at a time and recorded as steps,
    /// in recording order. Most recurrences have none.
    fn seed_cells(&self) -> Vec<(Coord, Self::Cell)> {
        Vec::new()
    }

    /// First interior cell; the engine fills rows `origin.0..rows()` and,
    /// within each, columns `origin.1..cols()`.
    fn fill_origin(&self) -> Coord {
        (1, 1)
    }

    /// Compute the final value of `coord` from already-filled cells.
    fn fill_cell(&self, table: &Table<Self::Cell>, coord: Coord) -> Self::Cell;

    /// Total number of recorded steps for a full fill.
    fn step_count(&self) -> usize {
        let (r0, c0) = self.fill_origin();
        self.seed_cells().len()
            + self.rows().saturating_sub(r0) * self.cols().saturating_sub(c0)
    }
}
