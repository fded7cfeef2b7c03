//! Example: stream SCS steps lazily and print each cell as it is written.
//!
//! Run with:
//! `cargo run --example steps`

use dp_trace::{problems::scs::ScsProblem, TableEngine};

fn main() {
    let s: Vec<char> = "abac".chars().collect();
    let t: Vec<char> = "cab".chars().collect();
    let engine = TableEngine::new(ScsProblem::new(&s, &t));

    for (k, step) in engine.steps().expect("small table").enumerate() {
        let (i, j) = step.coord;
        println!("step {k:>2}: dp[{i}][{j}] = {}", step.snapshot[step.coord]);
    }
}
