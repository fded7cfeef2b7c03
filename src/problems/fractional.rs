//! Fractional knapsack: greedy by value/weight ratio, no table.

use serde::Serialize;

use crate::error::{DpError, Result};
use crate::utils::{all_non_negative, non_negative, same_len};

/// One item taken by the greedy pass.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FractionalPick {
    pub index: usize,
    /// Portion of the item taken, in `(0, 1]`.
    pub fraction: f64,
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FractionalPlan {
    pub total: f64,
    pub picks: Vec<FractionalPick>,
}

/// Greedy plan: items in descending ratio order, whole while they fit,
/// then a fraction of the first one that does not.
///
/// Zero-weight items have no finite ratio and are rejected as
/// [`DpError::Degenerate`].
pub fn fractional_plan(values: &[i64], weights: &[i64], capacity: i64) -> Result<FractionalPlan> {
    same_len(values, weights)?;
    let capacity = non_negative("capacity", capacity)?;
    all_non_negative("weights", weights)?;
    if let Some(index) = weights.iter().position(|&w| w == 0) {
        return Err(DpError::Degenerate {
            field: "weights",
            index,
            reason: "zero weight has no value/weight ratio".into(),
        });
    }

    let mut order: Vec<(usize, f64)> = values
        .iter()
        .zip(weights)
        .map(|(&v, &w)| v as f64 / w as f64)
        .enumerate()
        .collect();
    order.sort_by(|a, b| b.1.total_cmp(&a.1));

    let mut remaining = capacity as u64;
    let mut total = 0.0;
    let mut picks = Vec::new();
    for (index, ratio) in order {
        if remaining == 0 {
            break;
        }
        let weight = weights[index] as u64;
        let pick = if weight <= remaining {
            remaining -= weight;
            FractionalPick {
                index,
                fraction: 1.0,
                value: values[index] as f64,
            }
        } else {
            let taken = remaining;
            remaining = 0;
            FractionalPick {
                index,
                fraction: taken as f64 / weight as f64,
                value: ratio * taken as f64,
            }
        };
        total += pick.value;
        picks.push(pick);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(total, picks = picks.len(), "fractional plan");

    Ok(FractionalPlan { total, picks })
}

/// Best total value of the fractional knapsack.
pub fn solve_fractional(values: &[i64], weights: &[i64], capacity: i64) -> Result<f64> {
    fractional_plan(values, weights, capacity).map(|plan| plan.total)
}
