//! Step-traced dynamic programming (dp-trace)
//!
//! This crate solves small instances of classic dynamic programs and
//! returns, next to the answer, the full evolution of the DP table so a
//! front end can animate the algorithm cell by cell.
//!
//! ## Core idea
//! 1. Model the recurrence as a dense 2-D table with a fixed fill order.
//! 2. Implement the [`TableProblem`] trait for that recurrence.
//! 3. Let [`TableEngine`] fill the table, optionally recording an owned
//!    snapshot plus the written coordinate after every cell.
//! 4. Walk the finished table back with the variant's traceback to obtain a
//!    witness (chosen items, aligned characters) and its path.
//!
//! ## Quick start
//! ```
//! use dp_trace::{TableEngine, problems::knapsack::KnapsackProblem};
//!
//! let values = [1, 2, 3];
//! let weights = [1, 2, 3];
//! let problem = KnapsackProblem::zero_one(&values, &weights, 5).unwrap();
//! let (table, steps) = TableEngine::new(problem.clone()).build_with_steps().unwrap();
//! assert_eq!(table.terminal(), Some(&5));
//! assert_eq!(steps.len(), values.len() * 6);
//!
//! let witness = problem.traceback(&table, false).unwrap();
//! assert_eq!(witness.items, vec![1, 2]);
//! ```
//!
//! ## Built-in problems
//! The `problems` module contains:
//! - 0/1 and unbounded knapsack
//! - Fractional knapsack (greedy, no table)
//! - Subset-sum and equal-sum partition
//! - Longest common subsequence and longest common substring
//! - Shortest common supersequence
//!
//! [`solve::solve`] dispatches over all of them from a serde-friendly
//! [`solve::Instance`], and [`generate`] draws random instances per
//! difficulty level.

pub mod builder;
pub mod engine;
pub mod error;
pub mod generate;
pub mod problems;
pub mod solve;
pub mod table;
pub mod trace;
pub mod traits;
pub mod utils;

pub use crate::builder::EngineBuilder;
pub use crate::engine::TableEngine;
pub use crate::error::{DpError, ErrorKind, Result};
pub use crate::table::{Coord, Table};
pub use crate::trace::{Step, StepTrace, Witness};
pub use crate::traits::TableProblem;
