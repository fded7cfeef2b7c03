//! Generic table-filling engine.
//!
//! This module drives any [`TableProblem`] through its fill order:
//! 1. recorded seed cells, in the order the problem lists them;
//! 2. interior cells, row-major from [`TableProblem::fill_origin`].
//!
//! Step capture comes in two flavours: [`TableEngine::build_with_steps`]
//! materializes every snapshot up front, while [`TableEngine::steps`]
//! yields them lazily so callers can stream large instances.

use crate::error::Result;
use crate::table::{Coord, Table};
use crate::trace::{Step, StepTrace};
use crate::traits::TableProblem;
use crate::utils::{check_cells, DEFAULT_CELL_LIMIT, DEFAULT_TABLE_LIMIT};

/// Table-filling engine for a given problem instance `P`.
///
/// Typical usage:
/// ```
/// use dp_trace::{TableEngine, problems::lcs::LcsProblem};
///
/// let s: Vec<char> = "abcde".chars().collect();
/// let t: Vec<char> = "ace".chars().collect();
/// let engine = TableEngine::new(LcsProblem::new(&s, &t));
/// let (table, trace) = engine.build_with_steps().unwrap();
/// assert_eq!(table.terminal(), Some(&3));
/// assert_eq!(trace.len(), 5 * 3);
/// ```
pub struct TableEngine<P: TableProblem> {
    problem: P,
    cell_limit: Option<usize>,
}

/// A finished table plus, when step capture was requested, its history.
#[derive(Clone, Debug, PartialEq)]
pub struct Build<T> {
    pub table: Table<T>,
    pub steps: Option<StepTrace<T>>,
}

impl<P: TableProblem> TableEngine<P> {
    /// Create a new engine with the default limits: [`DEFAULT_TABLE_LIMIT`]
    /// cells for plain builds and [`DEFAULT_CELL_LIMIT`] when capturing
    /// steps.
    pub fn new(problem: P) -> Self {
        Self {
            problem,
            cell_limit: None,
        }
    }

    /// Create a new engine that refuses tables above `cell_limit` cells,
    /// with or without step capture.
    pub fn with_cell_limit(problem: P, cell_limit: usize) -> Self {
        Self {
            problem,
            cell_limit: Some(cell_limit),
        }
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    pub fn into_problem(self) -> P {
        self.problem
    }

    /// Largest table [`build`](Self::build) accepts.
    pub fn table_limit(&self) -> usize {
        self.cell_limit.unwrap_or(DEFAULT_TABLE_LIMIT)
    }

    /// Largest table [`steps`](Self::steps) and
    /// [`build_with_steps`](Self::build_with_steps) accept.
    pub fn step_limit(&self) -> usize {
        self.cell_limit.unwrap_or(DEFAULT_CELL_LIMIT)
    }

    fn check_size(&self, limit: usize) -> Result<()> {
        check_cells(self.problem.rows(), self.problem.cols(), limit)
    }

    /// Fill the whole table without recording steps.
    pub fn build(&self) -> Result<Table<P::Cell>> {
        self.check_size(self.table_limit())?;
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!(
            "build_table",
            variant = self.problem.name(),
            rows = self.problem.rows(),
            cols = self.problem.cols()
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut fill = Fill::new(&self.problem);
        while fill.advance().is_some() {}
        Ok(fill.table)
    }

    /// Fill the table and keep an owned snapshot after every step.
    pub fn build_with_steps(&self) -> Result<(Table<P::Cell>, StepTrace<P::Cell>)> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!(
            "build_table_steps",
            variant = self.problem.name(),
            steps = self.problem.step_count()
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut steps = self.steps()?;
        let mut trace = StepTrace::with_capacity(steps.len());
        for step in steps.by_ref() {
            trace.push(step);
        }
        Ok((steps.into_table(), trace))
    }

    /// Dispatch on `capture_steps`.
    pub fn run(&self, capture_steps: bool) -> Result<Build<P::Cell>> {
        if capture_steps {
            let (table, trace) = self.build_with_steps()?;
            Ok(Build {
                table,
                steps: Some(trace),
            })
        } else {
            Ok(Build {
                table: self.build()?,
                steps: None,
            })
        }
    }

    /// Lazily yield one [`Step`] per finalized cell.
    ///
    /// Each snapshot is cloned only when the iterator is advanced, so a
    /// consumer that drops snapshots as it goes holds at most two tables.
    pub fn steps(&self) -> Result<Steps<'_, P>> {
        self.check_size(self.step_limit())?;
        Ok(Steps {
            remaining: self.problem.step_count(),
            fill: Fill::new(&self.problem),
        })
    }
}

/// Cursor over a problem's fill order, writing one cell per advance.
struct Fill<'p, P: TableProblem> {
    problem: &'p P,
    table: Table<P::Cell>,
    seeds: std::vec::IntoIter<(Coord, P::Cell)>,
    next: Option<Coord>,
}

impl<'p, P: TableProblem> Fill<'p, P> {
    fn new(problem: &'p P) -> Self {
        let (r0, c0) = problem.fill_origin();
        let next = (r0 < problem.rows() && c0 < problem.cols()).then_some((r0, c0));
        Self {
            problem,
            table: problem.init_table(),
            seeds: problem.seed_cells().into_iter(),
            next,
        }
    }

    /// Write the next cell and return its coordinate, or `None` once the
    /// table is complete.
    fn advance(&mut self) -> Option<Coord> {
        if let Some((coord, value)) = self.seeds.next() {
            self.table[coord] = value;
            return Some(coord);
        }

        let coord = self.next?;
        let value = self.problem.fill_cell(&self.table, coord);
        self.table[coord] = value;

        let (row, col) = coord;
        self.next = if col + 1 < self.problem.cols() {
            Some((row, col + 1))
        } else if row + 1 < self.problem.rows() {
            Some((row + 1, self.problem.fill_origin().1))
        } else {
            None
        };
        Some(coord)
    }
}

/// Lazy step sequence returned by [`TableEngine::steps`].
pub struct Steps<'p, P: TableProblem> {
    fill: Fill<'p, P>,
    remaining: usize,
}

impl<'p, P: TableProblem> Steps<'p, P> {
    /// The live table as of the last yielded step.
    pub fn table(&self) -> &Table<P::Cell> {
        &self.fill.table
    }

    /// Finish the remaining cells without snapshotting and return the table.
    pub fn into_table(mut self) -> Table<P::Cell> {
        while self.fill.advance().is_some() {}
        self.fill.table
    }
}

impl<'p, P: TableProblem> Iterator for Steps<'p, P> {
    type Item = Step<P::Cell>;

    fn next(&mut self) -> Option<Self::Item> {
        let coord = self.fill.advance()?;
        self.remaining = self.remaining.saturating_sub(1);
        #[cfg(feature = "tracing")]
        tracing::trace!(row = coord.0, col = coord.1, "cell finalized");
        Some(Step {
            coord,
            snapshot: self.fill.table.clone(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'p, P: TableProblem> ExactSizeIterator for Steps<'p, P> {}
