//! Runs rollout episodes from a fresh tree repeatedly, saving a snapshot of
//! every step

use clap::Parser;
use env_logger::fmt::Formatter;
use log::Record;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rollout_rs::rollout::snapshot::TreeSnapshot;
use rollout_rs::rollout::tree::traverse_random;
use rollout_rs::rollout::{init_tree, RolloutError};
use rollout_rs::values::ValueFn;
use std::io::Write;
use std::thread;
use std::time::Instant;

const CHUNK_SIZE: usize = 1000;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
    #[arg(short, long, default_value_t = 7)]
    depth: usize,
    #[arg(short, long, default_value_t = 2)]
    fanout: usize,
    #[arg(short, long, default_value_t = 1000)]
    iterations: usize,
    #[arg(short, long, default_value_t = 10)]
    episodes: usize,
    #[arg(long, value_enum, default_value = "sine")]
    value_fn: ValueFn,
    #[arg(short, long, default_value = None)]
    seed: Option<u64>,
    #[arg(short, long, default_value = None)]
    reports_folder: Option<String>,
}

fn run_explore(
    depth: usize,
    fanout: usize,
    value_fn: ValueFn,
    iterations: usize,
    rng: &mut StdRng,
    report_path: &str,
) -> Result<f64, RolloutError> {
    let mut tree = init_tree(depth, fanout, move |ratio| value_fn.apply(ratio))?;
    let start = Instant::now();
    let mut snapshots: Vec<TreeSnapshot> = Vec::with_capacity(iterations);
    for _ in 0..iterations {
        tree = traverse_random(&tree, rng);
        snapshots.push(TreeSnapshot::capture(&tree));
    }
    let elapsed = start.elapsed();
    let iterations_per_second = iterations as f64 / elapsed.as_secs_f64();
    println!(
        "{} rollouts in {:.2} seconds ({:.2} rollouts per second)",
        iterations,
        &elapsed.as_secs_f64(),
        iterations_per_second
    );
    let chunks = (snapshots.len() as f64 / CHUNK_SIZE as f64).ceil() as usize;
    snapshots
        .chunks(CHUNK_SIZE)
        .enumerate()
        .for_each(|(i, chunk)| {
            let filename = format!(
                "{}-{:0>width$}.json",
                report_path,
                i,
                width = chunks.to_string().len()
            );
            let serialized = serde_json::to_string(&chunk).unwrap();
            std::fs::write(filename, serialized).unwrap();
        });
    Ok(elapsed.as_secs_f64())
}

fn main() {
    let args = Args::parse();

    let reports_folder = args.reports_folder.unwrap_or_else(|| {
        format!(
            "reports/{:?}/{}",
            args.value_fn,
            chrono::Local::now().format("%Y-%m-%d_%H-%M-%S")
        )
    });

    if let Err(err) = std::fs::create_dir_all(&reports_folder) {
        eprintln!(
            "Failed to create reports folder {}: {}",
            reports_folder, err
        );
        std::process::exit(1);
    }

    println!(
        "===\nDepth: {}, Iterations: {}, Episodes: {}, Path: {}",
        args.depth, args.iterations, args.episodes, &reports_folder
    );
    println!("---");
    env_logger::Builder::new()
        .format(|buf: &mut Formatter, record: &Record| {
            let thread_id = thread::current().id();
            let timestamp = buf.timestamp_millis();
            writeln!(
                buf,
                "[{}] [Thread: {:?}] [{}] - {}",
                timestamp,
                thread_id,
                record.level(),
                record.args()
            )
        })
        .filter_level(args.verbose.log_level_filter())
        .init();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    (0..args.episodes)
        .map(|episode| format!("{}/{}", reports_folder, episode))
        .for_each(|filename| {
            if let Err(err) = run_explore(
                args.depth,
                args.fanout,
                args.value_fn,
                args.iterations,
                &mut rng,
                &filename,
            ) {
                eprintln!("{}", err);
                std::process::exit(1);
            }
        });
}
