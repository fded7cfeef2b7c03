//! Step traces recorded while a table is filled, and witnesses recovered
//! from a finished table.

use serde::Serialize;

use crate::table::{Coord, Table};

/// One finalized cell: which coordinate was written and the full table
/// right after the write.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Step<T> {
    pub coord: Coord,
    pub snapshot: Table<T>,
}

/// Eagerly captured history of a table fill.
///
/// `snapshots[k]` is an owned copy taken right after `coords[k]` was
/// written, so both vectors always have the same length.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StepTrace<T> {
    pub snapshots: Vec<Table<T>>,
    pub coords: Vec<Coord>,
}

impl<T> StepTrace<T> {
    pub fn with_capacity(steps: usize) -> Self {
        Self {
            snapshots: Vec::with_capacity(steps),
            coords: Vec::with_capacity(steps),
        }
    }

    pub fn push(&mut self, step: Step<T>) {
        self.coords.push(step.coord);
        self.snapshots.push(step.snapshot);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn last_snapshot(&self) -> Option<&Table<T>> {
        self.snapshots.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coord, &Table<T>)> + '_ {
        self.coords.iter().copied().zip(self.snapshots.iter())
    }
}

impl<T> FromIterator<Step<T>> for StepTrace<T> {
    fn from_iter<I: IntoIterator<Item = Step<T>>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut trace = StepTrace::with_capacity(iter.size_hint().0);
        for step in iter {
            trace.push(step);
        }
        trace
    }
}

/// Result of a traceback: the chosen items in original order and, when
/// requested, one table coordinate per item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Witness<I> {
    pub items: Vec<I>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<Coord>>,
}

impl<I> Witness<I> {
    /// Build a witness from accumulators filled during a backward scan.
    pub(crate) fn from_backward(
        mut items: Vec<I>,
        mut path: Vec<Coord>,
        return_path: bool,
    ) -> Self {
        debug_assert_eq!(items.len(), path.len());
        items.reverse();
        let path = if return_path {
            path.reverse();
            Some(path)
        } else {
            None
        };
        Self { items, path }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Witness<char> {
    pub fn text(&self) -> String {
        self.items.iter().collect()
    }
}
