pub mod node;
pub mod snapshot;
pub mod tree;

use node::Node;
use rand::Rng;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RolloutError {
    /// The requested tree shape cannot be built.
    #[error("invalid tree configuration: {0}")]
    InvalidConfiguration(String),
    /// Terminal values are placed by reading branch digits as a binary
    /// number, which only works when no node has more than two children.
    #[error("terminal values need a binary tree, found fanout {0}")]
    UnsupportedFanout(usize),
}

/// Builds a tree and seeds its terminal values in one step.
pub fn init_tree<F>(max_depth: usize, fanout: usize, value_fn: F) -> Result<Node, RolloutError>
where
    F: Fn(f64) -> f64,
{
    let mut root = tree::build_tree(max_depth, fanout)?;
    tree::assign_terminal_values(&mut root, value_fn)?;
    Ok(root)
}

/// Runs `iterations` sequential rollouts, threading each snapshot into the
/// next call, and returns the final snapshot.
pub fn run_rollouts<R: Rng>(tree: Node, iterations: usize, rng: &mut R) -> Node {
    let mut current = tree;
    for _ in 0..iterations {
        current = tree::traverse_random(&current, rng);
    }
    current
}
