//! Example: 0/1 knapsack with step capture and traceback.
//!
//! Run with:
//! `cargo run --example knapsack`

use dp_trace::{problems::knapsack::KnapsackProblem, TableEngine};

fn main() {
    let values = [6, 10, 12];
    let weights = [1, 2, 3];
    let capacity = 5;

    let problem = KnapsackProblem::zero_one(&values, &weights, capacity).expect("valid instance");
    let engine = TableEngine::new(problem.clone());
    let (table, trace) = engine.build_with_steps().expect("small table");

    println!("Best value: {}", table.terminal().copied().unwrap_or(0));
    println!("Recorded steps: {}", trace.len());

    println!("\ni\\w {}", (0..table.cols()).map(|w| format!("{w:>3}")).collect::<String>());
    for (i, row) in table.iter_rows().enumerate() {
        let cells: String = row.iter().map(|v| format!("{v:>3}")).collect();
        println!("{i:>3} {cells}");
    }

    let witness = problem.traceback(&table, true).expect("table matches instance");
    println!("\nChosen items: {:?}", witness.items);
    println!("Traceback path: {:?}", witness.path.unwrap_or_default());
}
