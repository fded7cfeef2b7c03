use dp_trace::{
    problems::{
        knapsack::KnapsackProblem, lcs::LcsProblem, scs::ScsProblem, subset::SubsetSumProblem,
        substring::SubstringProblem,
    },
    Table, TableEngine, TableProblem,
};
use proptest::prelude::*;

/// Check the step contract shared by every builder and return the number
/// of recorded steps.
fn check_steps<P: TableProblem>(problem: P) -> Result<usize, TestCaseError> {
    let engine = TableEngine::new(problem);
    let table = engine.build().unwrap();
    let (stepped, trace) = engine.build_with_steps().unwrap();

    prop_assert_eq!(&stepped, &table);
    prop_assert_eq!(trace.snapshots.len(), trace.coords.len());
    prop_assert_eq!(trace.len(), engine.problem().step_count());
    if let Some(last) = trace.last_snapshot() {
        prop_assert_eq!(last.terminal(), table.terminal());
        prop_assert_eq!(last, &table);
    }

    // Every coordinate is written exactly once and snapshot k differs from
    // snapshot k-1 at most in coordinate k.
    let mut seen = std::collections::HashSet::new();
    for (k, (coord, snap)) in trace.iter().enumerate() {
        prop_assert!(seen.insert(coord), "cell {:?} written twice", coord);
        prop_assert_eq!(&snap[coord], &table[coord]);
        if k > 0 {
            let prev: &Table<P::Cell> = &trace.snapshots[k - 1];
            for r in 0..snap.rows() {
                for c in 0..snap.cols() {
                    if (r, c) != coord {
                        prop_assert_eq!(&snap[(r, c)], &prev[(r, c)]);
                    }
                }
            }
        }
    }

    // The lazy sequence yields the same steps.
    let lazy: Vec<_> = engine.steps().unwrap().map(|s| s.coord).collect();
    prop_assert_eq!(lazy, trace.coords.clone());
    Ok(trace.len())
}

proptest! {
    #[test]
    fn knapsack_steps(
        values in prop::collection::vec(1i64..=15, 0..=4),
        capacity in 0i64..=12,
        unbounded in any::<bool>(),
    ) {
        let weights: Vec<i64> = values.iter().map(|v| v % 5 + 1).collect();
        let problem = if unbounded {
            KnapsackProblem::unbounded(&values, &weights, capacity).unwrap()
        } else {
            KnapsackProblem::zero_one(&values, &weights, capacity).unwrap()
        };
        let steps = check_steps(problem)?;
        prop_assert_eq!(steps, values.len() * (capacity as usize + 1));
    }

    #[test]
    fn subset_steps(values in prop::collection::vec(0i64..=9, 0..=4), target in 0i64..=12) {
        let steps = check_steps(SubsetSumProblem::new(&values, target).unwrap())?;
        prop_assert_eq!(steps, values.len() * (target as usize + 1));
    }

    #[test]
    fn string_steps(a in "[ABC]{0,5}", b in "[ABC]{0,5}") {
        let (s, t) = (a.as_bytes(), b.as_bytes());
        prop_assert_eq!(check_steps(LcsProblem::new(s, t))?, s.len() * t.len());
        prop_assert_eq!(check_steps(SubstringProblem::new(s, t))?, s.len() * t.len());
        prop_assert_eq!(check_steps(ScsProblem::new(s, t))?, (s.len() + 1) * (t.len() + 1));
    }
}

#[test]
fn earlier_snapshots_survive_later_writes() {
    let values = [1, 2, 3];
    let weights = [1, 2, 3];
    let problem = KnapsackProblem::zero_one(&values, &weights, 5).unwrap();
    let (table, trace) = TableEngine::new(problem).build_with_steps().unwrap();
    assert_eq!(table[(3, 5)], 5);
    // Row 3 is untouched until the last row starts filling.
    assert!(trace.snapshots[0].row(3).iter().all(|&v| v == 0));
    assert_eq!(trace.coords[6], (2, 0));
    assert_eq!(trace.snapshots[17][(3, 5)], 5);
    assert_eq!(trace.snapshots[16][(3, 5)], 0);
}

#[test]
fn lazy_steps_can_stop_early() {
    let s = b"ABCABC";
    let engine = TableEngine::new(LcsProblem::new(s.as_slice(), s.as_slice()));
    let mut steps = engine.steps().unwrap();
    let firsts: Vec<_> = steps.by_ref().take(3).map(|step| step.coord).collect();
    assert_eq!(firsts, vec![(1, 1), (1, 2), (1, 3)]);
    assert_eq!(steps.len(), 33);
    assert_eq!(steps.table()[(1, 1)], 1);
    assert_eq!(steps.into_table().terminal(), Some(&6));
}
