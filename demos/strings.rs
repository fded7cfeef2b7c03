//! Example: LCS, longest common substring and SCS on the same pair.
//!
//! Run with:
//! `cargo run --example strings`

use dp_trace::{
    problems::{lcs::LcsProblem, scs::ScsProblem, substring::SubstringProblem},
    TableEngine,
};

fn main() {
    let s: Vec<char> = "ABCBDAB".chars().collect();
    let t: Vec<char> = "BDCABA".chars().collect();

    let lcs = LcsProblem::new(&s, &t);
    let table = TableEngine::new(lcs.clone()).build().expect("small table");
    let witness = lcs.traceback(&table, true).expect("table matches input");
    println!("LCS: {} (length {})", witness.text(), witness.len());
    println!("  matched at {:?}", witness.path.unwrap_or_default());

    let sub = SubstringProblem::new(&s, &t);
    let table = TableEngine::new(sub.clone()).build().expect("small table");
    let (run, witness) = sub.substring(&table, false).expect("table matches input");
    println!("Longest common substring: {} ending at {:?}", witness.text(), run.end);

    let scs = ScsProblem::new(&s, &t);
    let table = TableEngine::new(scs.clone()).build().expect("small table");
    let witness = scs.traceback(&table, false).expect("table matches input");
    println!("SCS: {} (length {})", witness.text(), witness.len());
}
