//! Randomly populated trees for benchmark runs.
//!
//! A run with `levels` uses `2^(levels-1)` leaves and a tree of depth
//! `levels`, so the emitted path always has `levels` entries.

use ark_bn254::Fr;
use rand::Rng;
use tracing::debug;

use crate::error::TreeError;
use crate::merkle::MerkleTree;
use crate::poseidon::TwoToOneHash;

/// Leaves are drawn uniformly from `[0, SYNTHETIC_LEAF_BOUND)`.
pub const SYNTHETIC_LEAF_BOUND: u64 = 10_000_000;

/// Default benchmark depth
pub const DEFAULT_LEVELS: usize = 16;

/// Largest `levels` accepted for generated trees (2^29 leaves).
pub const MAX_SYNTHETIC_LEVELS: usize = 30;

/// Generate the leaves for a tree with `levels` levels.
pub fn synthetic_leaves<R: Rng + ?Sized>(levels: usize, rng: &mut R) -> Result<Vec<Fr>, TreeError> {
    if levels == 0 {
        return Err(TreeError::NonPositiveDepth(levels));
    }
    if levels > MAX_SYNTHETIC_LEVELS {
        return Err(TreeError::DepthExceedsLimit {
            depth: levels,
            max: MAX_SYNTHETIC_LEVELS,
        });
    }

    let count = 1usize << (levels - 1);
    Ok((0..count)
        .map(|_| Fr::from(rng.gen_range(0..SYNTHETIC_LEAF_BOUND)))
        .collect())
}

/// Generate leaves and build a tree of depth `levels` over them.
pub fn build_synthetic<H, R>(levels: usize, hasher: &H, rng: &mut R) -> Result<MerkleTree, TreeError>
where
    H: TwoToOneHash,
    R: Rng + ?Sized,
{
    let leaves = synthetic_leaves(levels, rng)?;
    debug!(levels, leaves = leaves.len(), "generated synthetic leaves");
    MerkleTree::build_with_depth(leaves, levels, hasher)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poseidon::HashEngine;
    use ark_ff::PrimeField;
    use ark_std::rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_leaf_count_and_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        let leaves = synthetic_leaves(5, &mut rng).unwrap();

        assert_eq!(leaves.len(), 16);
        let bound = Fr::from(SYNTHETIC_LEAF_BOUND).into_bigint();
        assert!(leaves.iter().all(|leaf| leaf.into_bigint() < bound));
    }

    #[test]
    fn test_single_level() {
        let engine = HashEngine::init().unwrap();
        let mut rng = StdRng::seed_from_u64(2);
        let tree = build_synthetic(1, &engine, &mut rng).unwrap();

        assert_eq!(tree.leaf_count(), 1);
        assert_eq!(tree.depth(), 1);
        assert_eq!(tree.proof_for(0).unwrap().depth(), 1);
    }

    #[test]
    fn test_levels_bounds() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(
            synthetic_leaves(0, &mut rng),
            Err(TreeError::NonPositiveDepth(0))
        );
        assert_eq!(
            synthetic_leaves(MAX_SYNTHETIC_LEVELS + 1, &mut rng),
            Err(TreeError::DepthExceedsLimit {
                depth: MAX_SYNTHETIC_LEVELS + 1,
                max: MAX_SYNTHETIC_LEVELS
            })
        );
    }

    #[test]
    fn test_seeded_runs_reproduce() {
        let engine = HashEngine::init().unwrap();
        let tree1 = build_synthetic(6, &engine, &mut StdRng::seed_from_u64(9)).unwrap();
        let tree2 = build_synthetic(6, &engine, &mut StdRng::seed_from_u64(9)).unwrap();

        assert_eq!(tree1.root(), tree2.root());
    }

    #[test]
    fn test_path_length_matches_levels() {
        let engine = HashEngine::init().unwrap();
        let mut rng = StdRng::seed_from_u64(4);

        for levels in 1..=8 {
            let tree = build_synthetic(levels, &engine, &mut rng).unwrap();
            let index = rng.gen_range(0..tree.leaf_count());
            let path = tree.proof_for(index).unwrap();

            assert_eq!(path.depth(), levels);
            assert!(path.verify(tree.root(), tree.leaf(index).unwrap(), &engine));
        }
    }
}
