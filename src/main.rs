use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rollout_rs::rollout::init_tree;
use rollout_rs::rollout::tree::traverse_random;
use rollout_rs::values::ValueFn;
use std::thread;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Levels below the root
    #[arg(short, long, default_value_t = 7)]
    depth: usize,

    /// Children per non-terminal node
    #[arg(short, long, default_value_t = 2)]
    fanout: usize,

    /// Rollouts to run
    #[arg(short, long, default_value_t = 100)]
    iterations: usize,

    /// Curve that seeds the terminal values
    #[arg(long, value_enum, default_value = "sine")]
    value_fn: ValueFn,

    /// Seed for the rollout stream; random when omitted
    #[arg(short, long, default_value = None)]
    seed: Option<u64>,

    /// Pause between rollouts so a watcher can follow along
    #[arg(short, long, default_value_t = 24)]
    tick_ms: u64,

    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let value_fn = args.value_fn;
    let mut tree = match init_tree(args.depth, args.fanout, move |ratio| value_fn.apply(ratio)) {
        Ok(tree) => tree,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    for iteration in 0..args.iterations {
        tree = traverse_random(&tree, &mut rng);
        info!(
            "rollout {}: root value {:.4}, policy {:?}",
            iteration + 1,
            tree.avg_value(),
            tree.policy()
        );
        if args.tick_ms > 0 {
            thread::sleep(Duration::from_millis(args.tick_ms));
        }
    }

    println!("Root value: {:.2}", tree.avg_value());
    println!(
        "Policy: {}",
        tree.policy()
            .iter()
            .map(|share| format!("{:.2}", share))
            .collect::<Vec<_>>()
            .join(" ")
    );
    tree.trace_log_children(0);
}
