//! Variant dispatcher.
//!
//! [`Instance`] names a problem variant together with its inputs, and
//! [`solve`] runs the matching builder (with or without step capture) and
//! traceback. Both sides are serde types shaped for a thin HTTP adapter:
//!
//! ```
//! use dp_trace::solve::{solve, Solution, SolveRequest};
//!
//! let body = r#"{
//!     "instance": {"problem": "zero_one", "values": [1, 2, 3], "weights": [1, 2, 3], "capacity": 5},
//!     "options": {"capture_steps": true}
//! }"#;
//! let request: SolveRequest = serde_json::from_str(body).unwrap();
//! let Solution::ZeroOne(sol) = solve(&request.instance, &request.options).unwrap() else {
//!     unreachable!()
//! };
//! assert_eq!(sol.best, 5);
//! assert_eq!(sol.steps.map(|s| s.len()), Some(18));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::builder::EngineBuilder;
use crate::engine::TableEngine;
use crate::error::{DpError, Result};
use crate::problems::fractional::{fractional_plan, FractionalPlan};
use crate::problems::knapsack::{KnapsackKind, KnapsackProblem};
use crate::problems::lcs::LcsProblem;
use crate::problems::scs::ScsProblem;
use crate::problems::subset::{partition_target, SubsetSumProblem};
use crate::problems::substring::SubstringProblem;
use crate::table::{Coord, Table};
use crate::trace::{StepTrace, Witness};
use crate::traits::TableProblem;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    ZeroOne,
    Unbounded,
    Fractional,
    SubsetSum,
    Partition,
    Lcs,
    Substring,
    Scs,
}

impl Variant {
    pub const ALL: [Variant; 8] = [
        Variant::ZeroOne,
        Variant::Unbounded,
        Variant::Fractional,
        Variant::SubsetSum,
        Variant::Partition,
        Variant::Lcs,
        Variant::Substring,
        Variant::Scs,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Variant::ZeroOne => "zero_one",
            Variant::Unbounded => "unbounded",
            Variant::Fractional => "fractional",
            Variant::SubsetSum => "subset_sum",
            Variant::Partition => "partition",
            Variant::Lcs => "lcs",
            Variant::Substring => "substring",
            Variant::Scs => "scs",
        }
    }

    /// Whether the variant builds a table (and so supports step capture).
    pub fn has_table(self) -> bool {
        !matches!(self, Variant::Fractional)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl std::str::FromStr for Variant {
    type Err = DpError;

    fn from_str(s: &str) -> Result<Self> {
        Variant::ALL
            .into_iter()
            .find(|v| v.label() == s)
            .ok_or_else(|| DpError::invalid("problem", format!("unknown variant '{s}'")))
    }
}

/// A problem variant with its inputs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "problem", rename_all = "snake_case")]
pub enum Instance {
    ZeroOne {
        values: Vec<i64>,
        weights: Vec<i64>,
        capacity: i64,
    },
    Unbounded {
        values: Vec<i64>,
        weights: Vec<i64>,
        capacity: i64,
    },
    Fractional {
        values: Vec<i64>,
        weights: Vec<i64>,
        capacity: i64,
    },
    SubsetSum {
        values: Vec<i64>,
        target: i64,
    },
    Partition {
        values: Vec<i64>,
    },
    Lcs {
        s1: String,
        s2: String,
    },
    Substring {
        s1: String,
        s2: String,
    },
    Scs {
        s1: String,
        s2: String,
    },
}

impl Instance {
    pub fn variant(&self) -> Variant {
        match self {
            Instance::ZeroOne { .. } => Variant::ZeroOne,
            Instance::Unbounded { .. } => Variant::Unbounded,
            Instance::Fractional { .. } => Variant::Fractional,
            Instance::SubsetSum { .. } => Variant::SubsetSum,
            Instance::Partition { .. } => Variant::Partition,
            Instance::Lcs { .. } => Variant::Lcs,
            Instance::Substring { .. } => Variant::Substring,
            Instance::Scs { .. } => Variant::Scs,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolveOptions {
    pub capture_steps: bool,
    pub return_path: bool,
    /// Explicit table ceiling. `None` uses
    /// [`DEFAULT_TABLE_LIMIT`](crate::utils::DEFAULT_TABLE_LIMIT) for plain
    /// builds and [`DEFAULT_CELL_LIMIT`](crate::utils::DEFAULT_CELL_LIMIT)
    /// with step capture.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cell_limit: Option<usize>,
}

impl SolveOptions {
    pub fn with_steps(mut self, capture_steps: bool) -> Self {
        self.capture_steps = capture_steps;
        self
    }

    pub fn with_path(mut self, return_path: bool) -> Self {
        self.return_path = return_path;
        self
    }

    pub fn with_cell_limit(mut self, cell_limit: usize) -> Self {
        self.cell_limit = Some(cell_limit);
        self
    }
}

/// Request body: an instance plus optional solve options.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveRequest {
    pub instance: Instance,
    #[serde(default)]
    pub options: SolveOptions,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct KnapsackSolution {
    pub best: i64,
    pub table: Table<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<StepTrace<i64>>,
    pub witness: Witness<usize>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SubsetSolution {
    pub reachable: bool,
    pub table: Table<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<StepTrace<bool>>,
    pub witness: Witness<usize>,
}

/// Equal-sum partition. When the total is odd no table is built and both
/// halves are empty.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PartitionSolution {
    pub feasible: bool,
    pub target: Option<i64>,
    pub table: Option<Table<bool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<StepTrace<bool>>,
    /// Indices summing to `target`.
    pub first: Witness<usize>,
    /// The remaining indices.
    pub second: Vec<usize>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SequenceSolution {
    pub length: usize,
    pub text: String,
    pub table: Table<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<StepTrace<usize>>,
    pub witness: Witness<char>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SubstringSolution {
    pub length: usize,
    pub end: Option<Coord>,
    pub text: String,
    pub table: Table<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<StepTrace<usize>>,
    pub witness: Witness<char>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "problem", rename_all = "snake_case")]
pub enum Solution {
    ZeroOne(KnapsackSolution),
    Unbounded(KnapsackSolution),
    Fractional(FractionalPlan),
    SubsetSum(SubsetSolution),
    Partition(PartitionSolution),
    Lcs(SequenceSolution),
    Substring(SubstringSolution),
    Scs(SequenceSolution),
}

impl Solution {
    pub fn variant(&self) -> Variant {
        match self {
            Solution::ZeroOne(_) => Variant::ZeroOne,
            Solution::Unbounded(_) => Variant::Unbounded,
            Solution::Fractional(_) => Variant::Fractional,
            Solution::SubsetSum(_) => Variant::SubsetSum,
            Solution::Partition(_) => Variant::Partition,
            Solution::Lcs(_) => Variant::Lcs,
            Solution::Substring(_) => Variant::Substring,
            Solution::Scs(_) => Variant::Scs,
        }
    }

    /// The scalar answer rendered for display.
    pub fn answer(&self) -> String {
        match self {
            Solution::ZeroOne(s) | Solution::Unbounded(s) => s.best.to_string(),
            Solution::Fractional(p) => format!("{:.3}", p.total),
            Solution::SubsetSum(s) => s.reachable.to_string(),
            Solution::Partition(p) => p.feasible.to_string(),
            Solution::Lcs(s) | Solution::Scs(s) => s.text.clone(),
            Solution::Substring(s) => s.text.clone(),
        }
    }

    /// Number of recorded steps, if step capture was on.
    pub fn step_count(&self) -> Option<usize> {
        match self {
            Solution::ZeroOne(s) | Solution::Unbounded(s) => s.steps.as_ref().map(StepTrace::len),
            Solution::Fractional(_) => None,
            Solution::SubsetSum(s) => s.steps.as_ref().map(StepTrace::len),
            Solution::Partition(p) => p.steps.as_ref().map(StepTrace::len),
            Solution::Lcs(s) | Solution::Scs(s) => s.steps.as_ref().map(StepTrace::len),
            Solution::Substring(s) => s.steps.as_ref().map(StepTrace::len),
        }
    }
}

/// Solve one instance.
pub fn solve(instance: &Instance, options: &SolveOptions) -> Result<Solution> {
    #[cfg(feature = "tracing")]
    let _span = tracing::info_span!("solve", variant = %instance.variant()).entered();

    match instance {
        Instance::ZeroOne {
            values,
            weights,
            capacity,
        } => solve_knapsack(KnapsackKind::ZeroOne, values, weights, *capacity, options)
            .map(Solution::ZeroOne),
        Instance::Unbounded {
            values,
            weights,
            capacity,
        } => solve_knapsack(KnapsackKind::Unbounded, values, weights, *capacity, options)
            .map(Solution::Unbounded),
        Instance::Fractional {
            values,
            weights,
            capacity,
        } => {
            if options.capture_steps {
                return Err(DpError::Unsupported {
                    variant: "fractional",
                    operation: "step capture",
                });
            }
            if options.return_path {
                return Err(DpError::Unsupported {
                    variant: "fractional",
                    operation: "traceback paths",
                });
            }
            fractional_plan(values, weights, *capacity).map(Solution::Fractional)
        }
        Instance::SubsetSum { values, target } => {
            solve_subset(values, *target, options).map(Solution::SubsetSum)
        }
        Instance::Partition { values } => solve_partition(values, options).map(Solution::Partition),
        Instance::Lcs { s1, s2 } => {
            let (s, t) = (chars(s1), chars(s2));
            let problem = LcsProblem::new(&s, &t);
            let build = engine(problem.clone(), options).run(options.capture_steps)?;
            let witness = problem.traceback(&build.table, options.return_path)?;
            Ok(Solution::Lcs(sequence_solution(build, witness)))
        }
        Instance::Substring { s1, s2 } => {
            let (s, t) = (chars(s1), chars(s2));
            let problem = SubstringProblem::new(&s, &t);
            let build = engine(problem.clone(), options).run(options.capture_steps)?;
            let (run, witness) = problem.substring(&build.table, options.return_path)?;
            Ok(Solution::Substring(SubstringSolution {
                length: run.length,
                end: run.end,
                text: witness.items.iter().collect(),
                table: build.table,
                steps: build.steps,
                witness,
            }))
        }
        Instance::Scs { s1, s2 } => {
            let (s, t) = (chars(s1), chars(s2));
            let problem = ScsProblem::new(&s, &t);
            let build = engine(problem.clone(), options).run(options.capture_steps)?;
            let witness = problem.traceback(&build.table, options.return_path)?;
            Ok(Solution::Scs(sequence_solution(build, witness)))
        }
    }
}

fn engine<P: TableProblem>(problem: P, options: &SolveOptions) -> TableEngine<P> {
    EngineBuilder::new(problem)
        .with_cell_limit_opt(options.cell_limit)
        .build()
}

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

fn sequence_solution(build: crate::engine::Build<usize>, witness: Witness<char>) -> SequenceSolution {
    SequenceSolution {
        length: build.table.terminal().copied().unwrap_or(0),
        text: witness.text(),
        table: build.table,
        steps: build.steps,
        witness,
    }
}

fn solve_knapsack(
    kind: KnapsackKind,
    values: &[i64],
    weights: &[i64],
    capacity: i64,
    options: &SolveOptions,
) -> Result<KnapsackSolution> {
    let problem = KnapsackProblem::new(kind, values, weights, capacity)?;
    let build = engine(problem.clone(), options).run(options.capture_steps)?;
    let witness = problem.traceback(&build.table, options.return_path)?;
    Ok(KnapsackSolution {
        best: build.table.terminal().copied().unwrap_or(0),
        table: build.table,
        steps: build.steps,
        witness,
    })
}

fn solve_subset(values: &[i64], target: i64, options: &SolveOptions) -> Result<SubsetSolution> {
    let problem = SubsetSumProblem::new(values, target)?;
    let build = engine(problem.clone(), options).run(options.capture_steps)?;
    let witness = problem.traceback(&build.table, options.return_path)?;
    Ok(SubsetSolution {
        reachable: build.table.terminal().copied().unwrap_or(false),
        table: build.table,
        steps: build.steps,
        witness,
    })
}

fn solve_partition(values: &[i64], options: &SolveOptions) -> Result<PartitionSolution> {
    let Some(target) = partition_target(values)? else {
        return Ok(PartitionSolution {
            feasible: false,
            target: None,
            table: None,
            steps: None,
            first: Witness {
                items: Vec::new(),
                path: options.return_path.then(Vec::new),
            },
            second: Vec::new(),
        });
    };
    let subset = solve_subset(values, target, options)?;
    let second = if subset.reachable {
        (0..values.len())
            .filter(|i| !subset.witness.items.contains(i))
            .collect()
    } else {
        Vec::new()
    };
    Ok(PartitionSolution {
        feasible: subset.reachable,
        target: Some(target),
        table: Some(subset.table),
        steps: subset.steps,
        first: subset.witness,
        second,
    })
}
