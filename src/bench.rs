//! Benchmarks rollout_rs by timing rollout batches from a fresh tree

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rollout_rs::rollout::{init_tree, run_rollouts};
use rollout_rs::values::ValueFn;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
    #[arg(short, long, default_value_t = 7)]
    depth: usize,
    #[arg(short, long, default_value_t = 2)]
    fanout: usize,
    #[arg(short, long, default_value_t = 10000)]
    iterations: usize,
    #[arg(short, long, default_value_t = 10)]
    episodes: usize,
    #[arg(long, value_enum, default_value = "sine")]
    value_fn: ValueFn,
    #[arg(short, long, default_value = None)]
    seed: Option<u64>,
}

fn run_benchmark(
    depth: usize,
    fanout: usize,
    value_fn: ValueFn,
    iterations: usize,
    rng: &mut StdRng,
) -> f64 {
    let tree = init_tree(depth, fanout, move |ratio| value_fn.apply(ratio)).unwrap_or_else(|err| {
        eprintln!("{}", err);
        std::process::exit(1);
    });
    let start = Instant::now();
    run_rollouts(tree, iterations, rng);
    let elapsed = start.elapsed();
    let iterations_per_second = iterations as f64 / elapsed.as_secs_f64();
    println!(
        "{} rollouts in {:.2} seconds ({:.2} rollouts per second)",
        iterations,
        &elapsed.as_secs_f64(),
        iterations_per_second
    );
    elapsed.as_secs_f64()
}

fn main() {
    let args = Args::parse();
    println!(
        "===\nDepth: {}, Iterations: {}, Episodes: {}",
        args.depth, args.iterations, args.episodes
    );
    println!("---");
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let durations: Vec<f64> = (0..args.episodes)
        .map(|_| {
            run_benchmark(
                args.depth,
                args.fanout,
                args.value_fn,
                args.iterations,
                &mut rng,
            )
        })
        .collect();
    println!("---");
    println!(
        "Average duration: {:.2} seconds",
        durations.iter().sum::<f64>() / durations.len() as f64
    );
    println!(
        "Average rollouts per second: {}",
        (args.episodes * args.iterations) as f64 / durations.iter().sum::<f64>()
    );
}
