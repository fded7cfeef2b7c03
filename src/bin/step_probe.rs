use std::env;
use std::time::Instant;

use dp_trace::generate::{generate, Difficulty};
use dp_trace::solve::{solve, Instance, Solution, SolveOptions, Variant};
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("step_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    eprintln!("\n{}", "=".repeat(80));
    eprintln!("dp-trace step probe: step-capture contracts and cost");
    eprintln!("{}", "=".repeat(80));
    eprintln!();
    eprintln!("Every variant is generated at each difficulty level, solved with step");
    eprintln!("capture and traceback paths, and checked for:");
    eprintln!("  • steps: one snapshot and one coordinate per finalized cell");
    eprintln!("  • terminal: last snapshot's terminal cell equals the final table's");
    eprintln!("  • witness: the traceback output is consistent with the answer");
    eprintln!();
    eprintln!("{}", "=".repeat(80));
    eprintln!();

    let mut sys = System::new();
    let mut measurements = Vec::new();
    let total = Variant::ALL.len();
    for (idx, variant) in Variant::ALL.into_iter().enumerate() {
        eprintln!("[{}/{}] {}", idx + 1, total, variant);
        for &level in &options.levels {
            eprint!("      {level:<6} ");
            let m = run_variant(variant, level, &options, &mut sys);
            eprintln!(
                "{} steps={}, time={:.3}ms, status={}",
                m.status.icon(),
                m.steps,
                m.wall_ms,
                m.status.label()
            );
            measurements.push(m);
        }
    }
    eprintln!();

    let failed = measurements
        .iter()
        .filter(|m| matches!(m.status, Status::Failed))
        .count();
    eprintln!(
        "{} of {} checks passed",
        measurements.len() - failed,
        measurements.len()
    );

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("step_probe output error: {err}");
        std::process::exit(1);
    }
    if failed > 0 {
        std::process::exit(1);
    }
}

struct Options {
    format: OutputFormat,
    seed: u64,
    runs: usize,
    levels: Vec<Difficulty>,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Table;
        let mut seed = 42u64;
        let mut runs = 20usize;
        let mut levels = Difficulty::ALL.to_vec();

        while let Some(arg) = args.next() {
            let arg = arg.into();
            let (flag, inline) = match arg.split_once('=') {
                Some((flag, value)) => (flag.to_string(), Some(value.to_string())),
                None => (arg, None),
            };
            if flag == "--help" || flag == "-h" {
                Options::print_help();
                std::process::exit(0);
            }
            let mut value = || -> Result<String, String> {
                match &inline {
                    Some(v) => Ok(v.clone()),
                    None => args
                        .next()
                        .map(Into::into)
                        .ok_or_else(|| format!("missing value after {flag}")),
                }
            };
            match flag.as_str() {
                "--format" => format = OutputFormat::from_str(&value()?)?,
                "--seed" => {
                    seed = value()?
                        .parse()
                        .map_err(|_| "seed must be a non-negative integer".to_string())?
                }
                "--runs" => {
                    runs = value()?
                        .parse()
                        .map_err(|_| "runs must be a positive integer".to_string())?
                }
                "--level" => {
                    levels = vec![value()?.parse::<Difficulty>().map_err(|e| e.to_string())?];
                }
                _ => return Err(format!("unrecognized argument '{flag}'")),
            }
        }

        Ok(Self {
            format,
            seed,
            runs: runs.max(1),
            levels,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --bin step_probe [-- <options>]

Options:
  --format <csv|table|json>     Output format (default: table)
  --seed <N>                    RNG seed for generated instances (default: 42)
  --runs <N>                    Instances per variant and level (default: 20)
  --level <easy|medium|hard>    Only probe one difficulty (default: all)
  -h, --help                    Print this help message

Examples:
  cargo run --bin step_probe
  cargo run --bin step_probe -- --format json --level hard --runs 100
"
        );
    }
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, measurements: &[Measurement]) -> Result<(), String> {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
            OutputFormat::Json => serde_json::to_string_pretty(measurements)
                .map(|json| println!("{json}"))
                .map_err(|e| e.to_string()),
        }
    }
}

#[derive(Clone, Serialize)]
struct Measurement {
    variant: Variant,
    level: Difficulty,
    runs: usize,
    steps: usize,
    wall_ms: f64,
    rss_delta_kib: u64,
    status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
}

#[derive(Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
enum Status {
    Passed,
    Failed,
}

impl Status {
    fn label(&self) -> &'static str {
        match self {
            Status::Passed => "passed",
            Status::Failed => "failed",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            Status::Passed => "✓",
            Status::Failed => "✗",
        }
    }
}

fn run_variant(
    variant: Variant,
    level: Difficulty,
    options: &Options,
    sys: &mut System,
) -> Measurement {
    let mut rng = StdRng::seed_from_u64(options.seed);
    let solve_opts = SolveOptions::default()
        .with_steps(variant.has_table())
        .with_path(variant.has_table());

    let before = rss_kib(sys);
    let start = Instant::now();
    let mut steps = 0;
    let mut detail = None;
    for _ in 0..options.runs {
        let instance = generate(variant, level, &mut rng);
        match solve(&instance, &solve_opts) {
            Ok(solution) => {
                steps += solution.step_count().unwrap_or(0);
                if let Err(err) = check(&instance, &solution) {
                    detail = Some(err);
                    break;
                }
            }
            Err(err) => {
                detail = Some(err.to_string());
                break;
            }
        }
    }
    let elapsed = start.elapsed();
    let after = rss_kib(sys);

    Measurement {
        variant,
        level,
        runs: options.runs,
        steps,
        wall_ms: elapsed.as_secs_f64() * 1e3,
        rss_delta_kib: after.saturating_sub(before),
        status: if detail.is_none() {
            Status::Passed
        } else {
            Status::Failed
        },
        detail,
    }
}

fn check_trace<T: PartialEq>(
    steps: Option<&dp_trace::StepTrace<T>>,
    table: &dp_trace::Table<T>,
    expected: usize,
) -> Result<(), String> {
    let Some(steps) = steps else {
        return Err("no steps captured".into());
    };
    if steps.coords.len() != steps.snapshots.len() {
        return Err("coordinate and snapshot counts differ".into());
    }
    if steps.len() != expected {
        return Err(format!("expected {expected} steps, got {}", steps.len()));
    }
    let last = steps.last_snapshot().and_then(|s| s.terminal());
    if expected > 0 && last != table.terminal() {
        return Err("last snapshot disagrees with the final table".into());
    }
    Ok(())
}

fn check(instance: &Instance, solution: &Solution) -> Result<(), String> {
    match (instance, solution) {
        (
            Instance::ZeroOne {
                values,
                weights,
                capacity,
            },
            Solution::ZeroOne(sol),
        ) => {
            check_trace(sol.steps.as_ref(), &sol.table, values.len() * (*capacity as usize + 1))?;
            let used: i64 = sol.witness.items.iter().map(|&i| weights[i]).sum();
            let value: i64 = sol.witness.items.iter().map(|&i| values[i]).sum();
            if used > *capacity || value != sol.best {
                return Err(format!("witness weight {used}, value {value}, best {}", sol.best));
            }
            Ok(())
        }
        (
            Instance::Unbounded {
                values, capacity, ..
            },
            Solution::Unbounded(sol),
        ) => check_trace(sol.steps.as_ref(), &sol.table, values.len() * (*capacity as usize + 1)),
        (Instance::Fractional { .. }, Solution::Fractional(plan)) => {
            if plan.total.is_finite() && plan.total >= 0.0 {
                Ok(())
            } else {
                Err(format!("bad total {}", plan.total))
            }
        }
        (Instance::SubsetSum { values, target }, Solution::SubsetSum(sol)) => {
            check_trace(sol.steps.as_ref(), &sol.table, values.len() * (*target as usize + 1))?;
            let sum: i64 = sol.witness.items.iter().map(|&i| values[i]).sum();
            if sol.reachable && sum != *target {
                return Err(format!("witness sums to {sum}, target {target}"));
            }
            Ok(())
        }
        (Instance::Partition { values }, Solution::Partition(sol)) => match &sol.table {
            Some(table) => {
                let target = sol.target.unwrap_or(0);
                check_trace(sol.steps.as_ref(), table, values.len() * (target as usize + 1))
            }
            None => Ok(()),
        },
        (Instance::Lcs { s1, s2 }, Solution::Lcs(sol)) => {
            let (m, n) = (s1.chars().count(), s2.chars().count());
            check_trace(sol.steps.as_ref(), &sol.table, m * n)?;
            if sol.text.chars().count() != sol.length {
                return Err("witness length differs from table".into());
            }
            Ok(())
        }
        (Instance::Substring { s1, s2 }, Solution::Substring(sol)) => {
            let (m, n) = (s1.chars().count(), s2.chars().count());
            check_trace(sol.steps.as_ref(), &sol.table, m * n)?;
            if !s1.contains(&sol.text) || !s2.contains(&sol.text) {
                return Err(format!("'{}' is not common to both inputs", sol.text));
            }
            Ok(())
        }
        (Instance::Scs { s1, s2 }, Solution::Scs(sol)) => {
            let (m, n) = (s1.chars().count(), s2.chars().count());
            check_trace(sol.steps.as_ref(), &sol.table, (m + 1) * (n + 1))?;
            if sol.text.chars().count() != sol.length {
                return Err("witness length differs from table".into());
            }
            Ok(())
        }
        _ => Err("solution variant does not match instance".into()),
    }
}

fn write_csv(measurements: &[Measurement]) -> Result<(), String> {
    println!("variant,level,runs,steps,wall_ms,rss_delta_kib,status,detail");
    for m in measurements {
        let detail = m
            .detail
            .as_ref()
            .map(|s| s.replace('"', "'"))
            .unwrap_or_default();
        println!(
            "{},{},{},{},{:.3},{},{},\"{}\"",
            m.variant,
            m.level,
            m.runs,
            m.steps,
            m.wall_ms,
            m.rss_delta_kib,
            m.status.label(),
            detail
        );
    }
    Ok(())
}

fn write_table(measurements: &[Measurement]) -> Result<(), String> {
    let col1 = measurements
        .iter()
        .map(|m| m.variant.label().len())
        .max()
        .unwrap_or(0)
        .max("variant".len());

    println!(
        "{:<col1$}  {:<6}  {:>6}  {:>10}  {:>10}  {:>14}  {:>8}  detail",
        "variant", "level", "runs", "steps", "wall_ms", "rss_delta_kib", "status",
    );
    println!(
        "{:-<col1$}  {:-<6}  {:-<6}  {:-<10}  {:-<10}  {:-<14}  {:-<8}  {:-<12}",
        "", "", "", "", "", "", "", "",
    );
    for m in measurements {
        println!(
            "{:<col1$}  {:<6}  {:>6}  {:>10}  {:>10.3}  {:>14}  {:>8}  {}",
            m.variant.label(),
            m.level.label(),
            m.runs,
            m.steps,
            m.wall_ms,
            m.rss_delta_kib,
            m.status.label(),
            m.detail.as_deref().unwrap_or(""),
        );
    }
    Ok(())
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory() / 1024
    } else {
        0
    }
}
