//! Problem implementations.
//!
//! Table builders implement [`TableProblem`](crate::traits::TableProblem)
//! and pair with a traceback that reconstructs a witness:
//! - [`knapsack`]   : 0/1 and unbounded knapsack (shared traceback).
//! - [`subset`]     : subset-sum reachability and equal-sum partition.
//! - [`lcs`]        : longest common subsequence.
//! - [`substring`]  : longest common substring.
//! - [`scs`]        : shortest common supersequence.
//!
//! [`fractional`] stands apart: a greedy solver with no table.

pub mod fractional;
pub mod knapsack;
pub mod lcs;
pub mod scs;
pub mod subset;
pub mod substring;
