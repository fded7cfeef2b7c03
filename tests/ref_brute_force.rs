use dp_trace::{
    problems::{
        knapsack::{knapsack_traceback, KnapsackProblem},
        lcs::LcsProblem,
        scs::ScsProblem,
        subset::{subset_traceback, SubsetSumProblem},
        substring::SubstringProblem,
    },
    TableEngine,
};
use proptest::prelude::*;

fn best_subset_value(values: &[i64], weights: &[i64], capacity: i64) -> i64 {
    let n = values.len();
    (0u32..1 << n)
        .filter_map(|mask| {
            let picked = (0..n).filter(|i| mask & (1 << i) != 0);
            let (w, v) = picked.fold((0, 0), |(w, v), i| (w + weights[i], v + values[i]));
            (w <= capacity).then_some(v)
        })
        .max()
        .unwrap_or(0)
}

fn best_unbounded_value(values: &[i64], weights: &[i64], capacity: i64) -> i64 {
    let mut best = vec![0i64; capacity as usize + 1];
    for c in 0..=capacity as usize {
        for (&v, &w) in values.iter().zip(weights) {
            let w = w as usize;
            if w >= 1 && w <= c {
                best[c] = best[c].max(best[c - w] + v);
            }
        }
    }
    best[capacity as usize]
}

fn subset_reaches(values: &[i64], target: i64) -> bool {
    let n = values.len();
    (0u32..1 << n).any(|mask| {
        (0..n)
            .filter(|i| mask & (1 << i) != 0)
            .map(|i| values[i])
            .sum::<i64>()
            == target
    })
}

fn is_subsequence(needle: &[u8], hay: &[u8]) -> bool {
    let mut it = hay.iter();
    needle.iter().all(|c| it.any(|h| h == c))
}

fn contains_run(hay: &[u8], needle: &[u8]) -> bool {
    needle.is_empty() || hay.windows(needle.len()).any(|w| w == needle)
}

fn longest_run_len(s: &[u8], t: &[u8]) -> usize {
    let mut best = 0;
    for i in 0..s.len() {
        for j in 0..t.len() {
            let mut k = 0;
            while i + k < s.len() && j + k < t.len() && s[i + k] == t[j + k] {
                k += 1;
            }
            best = best.max(k);
        }
    }
    best
}

fn items() -> impl Strategy<Value = (Vec<i64>, Vec<i64>)> {
    (0usize..=8).prop_flat_map(|n| {
        (
            prop::collection::vec(1i64..=15, n),
            prop::collection::vec(1i64..=10, n),
        )
    })
}

proptest! {
    #[test]
    fn zero_one_matches_brute_force((values, weights) in items(), capacity in 0i64..=25) {
        let problem = KnapsackProblem::zero_one(&values, &weights, capacity).unwrap();
        let table = TableEngine::new(problem.clone()).build().unwrap();
        let best = *table.terminal().unwrap();
        prop_assert_eq!(best, best_subset_value(&values, &weights, capacity));

        let witness = knapsack_traceback(&table, &values, &weights, capacity, true).unwrap();
        let used: i64 = witness.items.iter().map(|&i| weights[i]).sum();
        let value: i64 = witness.items.iter().map(|&i| values[i]).sum();
        prop_assert!(used <= capacity);
        prop_assert_eq!(value, best);
        prop_assert!(witness.items.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(witness.path.map(|p| p.len()), Some(witness.items.len()));
    }

    #[test]
    fn unbounded_matches_reference((values, weights) in items(), capacity in 0i64..=25) {
        let problem = KnapsackProblem::unbounded(&values, &weights, capacity).unwrap();
        let table = TableEngine::new(problem).build().unwrap();
        prop_assert_eq!(*table.terminal().unwrap(), best_unbounded_value(&values, &weights, capacity));
        // Never worse than using each item at most once.
        prop_assert!(*table.terminal().unwrap() >= best_subset_value(&values, &weights, capacity));
    }

    #[test]
    fn subset_sum_matches_brute_force(values in prop::collection::vec(0i64..=12, 0..=8), target in 0i64..=30) {
        let problem = SubsetSumProblem::new(&values, target).unwrap();
        let table = TableEngine::new(problem).build().unwrap();
        let reachable = *table.terminal().unwrap();
        prop_assert_eq!(reachable, subset_reaches(&values, target));

        let witness = subset_traceback(&table, &values, target, false).unwrap();
        if reachable {
            let sum: i64 = witness.items.iter().map(|&i| values[i]).sum();
            prop_assert_eq!(sum, target);
        } else {
            prop_assert!(witness.is_empty());
        }
    }

    #[test]
    fn lcs_witness_is_common_subsequence(a in "[ABCD]{0,10}", b in "[ABCD]{0,10}") {
        let (s, t) = (a.as_bytes(), b.as_bytes());
        let problem = LcsProblem::new(s, t);
        let table = TableEngine::new(problem.clone()).build().unwrap();
        let witness = problem.traceback(&table, true).unwrap();
        prop_assert_eq!(witness.len(), *table.terminal().unwrap());
        prop_assert!(is_subsequence(&witness.items, s));
        prop_assert!(is_subsequence(&witness.items, t));
        let path = witness.path.unwrap();
        prop_assert!(path.windows(2).all(|w| w[0].0 < w[1].0 && w[0].1 < w[1].1));
        for (k, &(i, j)) in path.iter().enumerate() {
            prop_assert_eq!(s[i - 1], witness.items[k]);
            prop_assert_eq!(t[j - 1], witness.items[k]);
        }
    }

    #[test]
    fn substring_is_contiguous_in_both(a in "[AB]{0,10}", b in "[AB]{0,10}") {
        let (s, t) = (a.as_bytes(), b.as_bytes());
        let problem = SubstringProblem::new(s, t);
        let table = TableEngine::new(problem.clone()).build().unwrap();
        let (run, witness) = problem.substring(&table, false).unwrap();
        prop_assert_eq!(run.length, witness.len());
        prop_assert_eq!(run.length, longest_run_len(s, t));
        prop_assert!(contains_run(s, &witness.items));
        prop_assert!(contains_run(t, &witness.items));
    }

    #[test]
    fn scs_witness_contains_both(a in "[ABCD]{0,8}", b in "[ABCD]{0,8}") {
        let (s, t) = (a.as_bytes(), b.as_bytes());
        let problem = ScsProblem::new(s, t);
        let table = TableEngine::new(problem.clone()).build().unwrap();
        let witness = problem.traceback(&table, true).unwrap();
        prop_assert_eq!(witness.len(), *table.terminal().unwrap());
        prop_assert!(is_subsequence(s, &witness.items));
        prop_assert!(is_subsequence(t, &witness.items));

        // SCS length = |s| + |t| - LCS length.
        let lcs = TableEngine::new(LcsProblem::new(s, t)).build().unwrap();
        prop_assert_eq!(witness.len(), s.len() + t.len() - *lcs.terminal().unwrap());
        prop_assert_eq!(witness.path.map(|p| p.len()), Some(witness.items.len()));
    }
}
