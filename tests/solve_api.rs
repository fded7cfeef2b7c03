use dp_trace::generate::{generate, Difficulty};
use dp_trace::solve::{solve, Instance, Solution, SolveOptions, SolveRequest, Variant};
use dp_trace::{DpError, ErrorKind};
use rand::{rngs::StdRng, SeedableRng};
use serde_json::{json, Value};

fn solve_body(body: Value) -> Result<Value, DpError> {
    let request: SolveRequest = serde_json::from_value(body).unwrap();
    let solution = solve(&request.instance, &request.options)?;
    Ok(serde_json::to_value(&solution).unwrap())
}

#[test]
fn knapsack_body_with_steps() {
    let out = solve_body(json!({
        "instance": {"problem": "zero_one", "values": [1, 2, 3], "weights": [1, 2, 3], "capacity": 5},
        "options": {"capture_steps": true, "return_path": true}
    }))
    .unwrap();
    assert_eq!(out["problem"], "zero_one");
    assert_eq!(out["best"], 5);
    assert_eq!(out["table"].as_array().unwrap().len(), 4);
    assert_eq!(out["steps"]["snapshots"].as_array().unwrap().len(), 18);
    assert_eq!(out["steps"]["coords"][0], json!([1, 0]));
    assert_eq!(out["steps"]["snapshots"][17][3][5], 5);
    assert_eq!(out["witness"]["items"], json!([1, 2]));
    assert_eq!(out["witness"]["path"], json!([[2, 2], [3, 5]]));
}

#[test]
fn path_is_omitted_unless_requested() {
    let out = solve_body(json!({
        "instance": {"problem": "lcs", "s1": "abcde", "s2": "ace"}
    }))
    .unwrap();
    assert_eq!(out["length"], 3);
    assert_eq!(out["text"], "ace");
    assert!(out["witness"].get("path").is_none());
}

#[test]
fn errors_carry_kind_and_field() {
    let err = solve_body(json!({
        "instance": {"problem": "unbounded", "values": [1, 2], "weights": [1], "capacity": 3}
    }))
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    assert_eq!(err.field(), Some("weights"));

    let err = solve_body(json!({
        "instance": {"problem": "zero_one", "values": [1], "weights": [1], "capacity": -4}
    }))
    .unwrap_err();
    assert_eq!(err.field(), Some("capacity"));

    let err = solve_body(json!({
        "instance": {"problem": "fractional", "values": [1], "weights": [0], "capacity": 4}
    }))
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Degenerate);

    let err = solve_body(json!({
        "instance": {"problem": "fractional", "values": [1], "weights": [2], "capacity": 4},
        "options": {"return_path": true}
    }))
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unsupported);
}

#[test]
fn unknown_problem_is_a_parse_error() {
    let parsed = serde_json::from_value::<SolveRequest>(json!({
        "instance": {"problem": "knapsack", "values": []}
    }));
    assert!(parsed.is_err());
}

#[test]
fn instances_round_trip() {
    let mut rng = StdRng::seed_from_u64(9);
    for variant in Variant::ALL {
        for level in Difficulty::ALL {
            let instance = generate(variant, level, &mut rng);
            let text = serde_json::to_string(&instance).unwrap();
            let back: Instance = serde_json::from_str(&text).unwrap();
            assert_eq!(back, instance);
        }
    }
}

#[test]
fn every_generated_instance_solves() {
    let mut rng = StdRng::seed_from_u64(2024);
    for variant in Variant::ALL {
        for level in Difficulty::ALL {
            let instance = generate(variant, level, &mut rng);
            let options = SolveOptions::default()
                .with_steps(variant.has_table())
                .with_path(variant.has_table());
            let solution = solve(&instance, &options).unwrap();
            assert_eq!(solution.variant(), variant);
            assert_eq!(solution.step_count().is_some(), match &solution {
                Solution::Fractional(_) => false,
                Solution::Partition(p) => p.table.is_some(),
                _ => true,
            });
        }
    }
}
