//! Longest common substring.
//!
//! Same shape as LCS, but a mismatch resets the cell to 0 so a cell holds
//! the length of the common run ending at `s[i-1]` / `t[j-1]`. The answer
//! is read off the cell holding the largest run, no backward walk needed.

use serde::Serialize;

use crate::error::{DpError, Result};
use crate::table::{Coord, Table};
use crate::trace::Witness;
use crate::traits::TableProblem;
use crate::utils::check_dims;

#[derive(Clone, Debug)]
pub struct SubstringProblem<'a, T> {
    pub s: &'a [T],
    pub t: &'a [T],
}

/// Longest run found in a finished table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LongestRun {
    pub length: usize,
    /// First cell (row-major) holding `length`; `None` when nothing matches.
    pub end: Option<Coord>,
}

impl<'a, T: PartialEq + Clone + std::fmt::Debug> SubstringProblem<'a, T> {
    pub fn new(s: &'a [T], t: &'a [T]) -> Self {
        Self { s, t }
    }

    pub fn substring(
        &self,
        table: &Table<usize>,
        return_path: bool,
    ) -> Result<(LongestRun, Witness<T>)> {
        substring_witness(table, self.s, self.t, return_path)
    }
}

impl<'a, T: PartialEq + Clone + std::fmt::Debug> TableProblem for SubstringProblem<'a, T> {
    type Cell = usize;

    fn name(&self) -> &'static str {
        "longest_common_substring"
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
            0
        }
    }
}

/// Scan in fill order, keeping the first strictly larger run.
pub fn longest_run(dp: &Table<usize>) -> LongestRun {
    let mut best = LongestRun {
        length: 0,
        end: None,
    };
    for (i, row) in dp.iter_rows().enumerate() {
        for (j, &len) in row.iter().enumerate() {
            if len > best.length {
                best = LongestRun {
                    length: len,
                    end: Some((i, j)),
                };
            }
        }
    }
    best
}

/// Slice the longest common substring out of `s`.
///
/// The path lists the diagonal run of cells, one per character.
pub fn substring_witness<T: Clone>(
    dp: &Table<usize>,
    s: &[T],
    t: &[T],
    return_path: bool,
) -> Result<(LongestRun, Witness<T>)> {
    check_dims("table", dp.dims(), (s.len() + 1, t.len() + 1))?;
    let run = longest_run(dp);
    let witness = match run.end {
        Some((ei, ej)) => {
            let (start_i, start_j) = ei
                .checked_sub(run.length)
                .zip(ej.checked_sub(run.length))
                .ok_or_else(|| {
                    DpError::invalid(
                        "table",
                        format!(
                            "run of {} at ({ei}, {ej}) starts outside the table",
                            run.length
                        ),
                    )
                })?;
            Witness {
                items: s[start_i..ei].to_vec(),
                path: return_path.then(|| {
                    (1..=run.length)
                        .map(|k| (start_i + k, start_j + k))
                        .collect()
                }),
            }
        }
        None => Witness {
            items: Vec::new(),
            path: return_path.then(Vec::new),
        },
    };
    Ok((run, witness))
}
