//! A toy Monte Carlo rollout simulation over a synthetic tree.
//!
//! Builds a perfect tree, seeds its terminal nodes with values from a curve
//! over horizontal position, and runs uniform-random rollouts that
//! backpropagate the reached terminal value along the sampled path. Each
//! rollout returns a fresh snapshot of the tree, so a consumer can keep the
//! whole history around.

pub mod rollout;
pub mod values;
