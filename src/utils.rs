//! Assorted utilities and helpers.

use crate::error::{DpError, Result};

/// Default ceiling on `rows * cols` when steps are captured.
///
/// Step capture keeps one full copy of the table per cell, so an eager
/// trace costs `O(cells^2)` memory.
pub const DEFAULT_CELL_LIMIT: usize = 4096;

/// Default ceiling on `rows * cols` for a plain build (no snapshots).
pub const DEFAULT_TABLE_LIMIT: usize = 1 << 20;

/// Reject tables larger than `limit` cells before anything is allocated.
pub fn check_cells(rows: usize, cols: usize, limit: usize) -> Result<()> {
    match rows.checked_mul(cols) {
        Some(cells) if cells <= limit => Ok(()),
        _ => Err(DpError::TooLarge { rows, cols, limit }),
    }
}

/// Convert a non-negative integer input (capacity, target) into a table
/// dimension.
pub fn non_negative(field: &'static str, value: i64) -> Result<usize> {
    usize::try_from(value)
        .map_err(|_| DpError::invalid(field, format!("must be non-negative, got {value}")))
}

/// Require every entry of `values` to be non-negative.
pub fn all_non_negative(field: &'static str, values: &[i64]) -> Result<()> {
    match values.iter().position(|&v| v < 0) {
        Some(idx) => Err(DpError::invalid(
            field,
            format!("entry {idx} must be non-negative, got {}", values[idx]),
        )),
        None => Ok(()),
    }
}

/// Require two parallel arrays to have the same length.
pub fn same_len(values: &[i64], weights: &[i64]) -> Result<()> {
    if values.len() == weights.len() {
        Ok(())
    } else {
        Err(DpError::invalid(
            "weights",
            format!(
                "expected {} entries to match `values`, got {}",
                values.len(),
                weights.len()
            ),
        ))
    }
}

/// Require a finished table to have the shape its inputs imply.
pub fn check_dims(
    field: &'static str,
    actual: (usize, usize),
    expected: (usize, usize),
) -> Result<()> {
    if actual == expected {
        Ok(())
    } else {
        Err(DpError::invalid(
            field,
            format!(
                "expected a {}x{} table, got {}x{}",
                expected.0, expected.1, actual.0, actual.1
            ),
        ))
    }
}
