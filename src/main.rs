use std::error::Error;
use std::{env, process};
use env_logger::Env;
use log::debug;

use stepsort::config::{DEFAULT_SEED, RANDOM_MAX, RANDOM_MIN};
use stepsort::generate::{create_rng, random_sequence};
use stepsort::render::{format_sequence, render_summary, render_trace};
use stepsort::{sort_with, Algorithm, Direction, SortOptions, TraceMode};

const USAGE: &str = "\
Usage: stepsort [--bubble | --merge] [-l/--list N...] [-r/--random N] [--seed S] [--reverse] [-s/--steps]

Examples:
  stepsort --list 5 2 8 1 9
  stepsort --bubble --list 5 2 8 1 9 --reverse
  stepsort --random 10 --seed 42
  stepsort --merge --random 10 --steps";

#[derive(Debug, Default)]
struct Args {
    algorithm: Algorithm,
    list: Option<Vec<f64>>,
    random: Option<usize>,
    seed: Option<u64>,
    reverse: bool,
    steps: bool,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, Box<dyn Error>> {
    let mut parsed = Args::default();
    let mut pending = args.next();

    while let Some(arg) = pending.take() {
        match arg.as_str() {
            "--bubble" => parsed.algorithm = Algorithm::Exchange,
            "--merge" => parsed.algorithm = Algorithm::Merge,
            "--reverse" => parsed.reverse = true,
            "-s" | "--steps" => parsed.steps = true,
            "-h" | "--help" => {
                println!("{USAGE}");
                process::exit(0);
            }
            "-r" | "--random" => {
                let n = args.next().ok_or("--random expects a count")?;
                parsed.random = Some(n.parse()?);
            }
            "--seed" => {
                let s = args.next().ok_or("--seed expects a value")?;
                parsed.seed = Some(s.parse()?);
            }
            "-l" | "--list" => {
                let mut values = Vec::new();
                for value in args.by_ref() {
                    if value.starts_with("--") || (value.starts_with('-') && value.parse::<f64>().is_err()) {
                        pending = Some(value);
                        break;
                    }
                    values.push(value.parse::<f64>()?);
                }
                if values.is_empty() {
                    return Err("--list expects at least one number".into());
                }
                parsed.list = Some(values);
                if pending.is_some() {
                    continue;
                }
            }
            other => return Err(format!("unknown argument '{other}'\n\n{USAGE}").into()),
        }
        pending = args.next();
    }
    Ok(parsed)
}

/// `--random 0` falls back to the default example, like no input at all.
fn input_sequence(args: &Args) -> Vec<f64> {
    match (args.random, &args.list) {
        (Some(n), _) if n > 0 => {
            let mut rng = create_rng(Some(args.seed.unwrap_or(DEFAULT_SEED)));
            let values: Vec<f64> = random_sequence(&mut rng, n, RANDOM_MIN..=RANDOM_MAX)
                .into_iter()
                .map(|v| v as f64)
                .collect();
            println!("Generated sequence: {}", format_sequence(&values));
            values
        }
        (_, Some(list)) => list.clone(),
        _ => {
            let example = args.algorithm.example().to_vec();
            println!("Using the default example");
            println!("Sequence: {}", format_sequence(&example));
            example
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let input = input_sequence(&args);
    println!();

    let mode = if args.steps { TraceMode::Traced } else { TraceMode::Silent };
    let options = SortOptions::new(args.algorithm)
        .with_direction(Direction::from_reverse(args.reverse))
        .with_mode(mode);
    debug!("Options: {:?}", options);

    let report = sort_with(&input, &options)?;
    if let Some(trace) = report.trace() {
        println!("Sorting process ({}):", options.algorithm.name());
        println!("{}", "=".repeat(50));
        print!("{}", render_trace(trace));
        println!("{}", "=".repeat(50));
    }
    print!("{}", render_summary(&input, &report));
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let result = parse_args(env::args().skip(1)).and_then(run);
    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
