//! Dense row-major DP table.
//!
//! A [`Table`] is indexed by `(row, col)` coordinates. Row 0 and column 0
//! hold the empty-prefix base cases; the remaining cells are filled by the
//! engine in row-major order.

use std::ops::{Index, IndexMut};

use serde::ser::{Serialize, SerializeSeq, Serializer};

/// `(row, col)` position inside a [`Table`].
pub type Coord = (usize, usize);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Clone> Table<T> {
    /// Allocate a `rows x cols` table with every cell set to `fill`.
    pub fn new(rows: usize, cols: usize, fill: T) -> Self {
        Self {
            rows,
            cols,
            cells: vec![fill; rows * cols],
        }
    }

    /// Nested `Vec` form, one inner vector per row.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.iter_rows().map(<[T]>::to_vec).collect()
    }
}

impl<T> Table<T> {
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    pub fn contains(&self, (row, col): Coord) -> bool {
        row < self.rows && col < self.cols
    }

    pub fn get(&self, coord: Coord) -> Option<&T> {
        if self.contains(coord) {
            Some(&self.cells[coord.0 * self.cols + coord.1])
        } else {
            None
        }
    }

    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.rows).map(move |r| self.row(r))
    }

    /// The bottom-right cell, where every builder stores its answer.
    pub fn terminal(&self) -> Option<&T> {
        if self.rows == 0 || self.cols == 0 {
            None
        } else {
            self.get((self.rows - 1, self.cols - 1))
        }
    }
}

impl<T> Index<Coord> for Table<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): Coord) -> &T {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) outside {}x{} table",
            self.rows,
            self.cols
        );
        &self.cells[row * self.cols + col]
    }
}

impl<T> IndexMut<Coord> for Table<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): Coord) -> &mut T {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) outside {}x{} table",
            self.rows,
            self.cols
        );
        &mut self.cells[row * self.cols + col]
    }
}

/// Serialized as a list of rows, the shape front ends render directly.
impl<T: Serialize> Serialize for Table<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.rows))?;
        for row in self.iter_rows() {
            seq.serialize_element(row)?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::Table;

    #[test]
    fn indexing_is_row_major() {
        let mut t = Table::new(2, 3, 0u32);
        t[(1, 2)] = 7;
        t[(0, 1)] = 4;
        assert_eq!(t.row(0), &[0, 4, 0]);
        assert_eq!(t.row(1), &[0, 0, 7]);
        assert_eq!(t.terminal(), Some(&7));
        assert_eq!(t.to_rows(), vec![vec![0, 4, 0], vec![0, 0, 7]]);
    }

    #[test]
    fn get_outside_bounds_is_none() {
        let t = Table::new(2, 2, false);
        assert_eq!(t.get((2, 0)), None);
        assert_eq!(t.get((0, 2)), None);
        assert!(t.contains((1, 1)));
    }

    #[test]
    fn empty_table_has_no_terminal() {
        let t: Table<i64> = Table::new(0, 0, 0);
        assert_eq!(t.terminal(), None);
        assert_eq!(t.iter_rows().count(), 0);
    }

    #[test]
    fn serializes_as_nested_rows() {
        let mut t = Table::new(2, 2, 0i64);
        t[(1, 1)] = 5;
        assert_eq!(serde_json::to_string(&t).unwrap(), "[[0,0],[0,5]]");
    }
}
