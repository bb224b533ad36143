//! Poseidon two-to-one compression for BN254.
//!
//! The tree only needs a deterministic `(left, right) -> parent` map, so the
//! hash sits behind `TwoToOneHash`. `HashEngine` is the Poseidon sponge from
//! arkworks with its parameters built once and shared.

mod config;
mod engine;

#[cfg(test)]
mod tests;

pub use config::{poseidon_config, validate_config};
pub use engine::HashEngine;

use ark_bn254::Fr;

/// A two-to-one compression function over field elements.
///
/// Implementations must be pure: equal inputs give equal outputs and no state
/// is mutated, which lets a tree hash pairs of one layer concurrently.
pub trait TwoToOneHash: Sync {
    fn compress(&self, left: &Fr, right: &Fr) -> Fr;
}
