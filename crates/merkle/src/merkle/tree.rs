//! Layered Merkle tree, built once and then read.
//!
//! Layer 0 holds the leaves and layer `depth` holds the root. Each layer is
//! hashed pairwise into the next; when a layer has odd length its last node
//! is paired with itself. The same rule lets a tree be padded past its
//! natural height: a single-node layer is odd, so it self-pairs until
//! `depth` layers exist.

use ark_bn254::Fr;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, trace};

use super::path::AuthenticationPath;
use crate::error::TreeError;
use crate::poseidon::TwoToOneHash;

/// Deepest tree accepted by the builder.
pub const MAX_DEPTH: usize = 64;

/// A frozen binary Merkle tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MerkleTree {
    /// layers[0] = leaves, layers[depth] = [root]
    layers: Vec<Vec<Fr>>,
}

impl MerkleTree {
    /// Build a tree of natural height: the fewest layers that reduce the
    /// leaves to one node, and at least one.
    pub fn build<H: TwoToOneHash>(leaves: Vec<Fr>, hasher: &H) -> Result<Self, TreeError> {
        let depth = natural_depth(leaves.len());
        Self::build_with_depth(leaves, depth, hasher)
    }

    /// Build exactly `depth` layers above the leaves.
    pub fn build_with_depth<H: TwoToOneHash>(
        leaves: Vec<Fr>,
        depth: usize,
        hasher: &H,
    ) -> Result<Self, TreeError> {
        if leaves.is_empty() {
            return Err(TreeError::EmptyTree);
        }
        if depth == 0 {
            return Err(TreeError::NonPositiveDepth(depth));
        }
        if depth > MAX_DEPTH {
            return Err(TreeError::DepthExceedsLimit {
                depth,
                max: MAX_DEPTH,
            });
        }
        if depth < usize::BITS as usize && leaves.len() > 1usize << depth {
            return Err(TreeError::DepthTooSmall {
                depth,
                leaves: leaves.len(),
            });
        }

        debug!(leaves = leaves.len(), depth, "building merkle tree");

        let mut layers = Vec::with_capacity(depth + 1);
        layers.push(leaves);

        for level in 0..depth {
            let next = hash_layer(&layers[level], hasher);
            trace!(level = level + 1, nodes = next.len(), "layer built");
            layers.push(next);
        }

        Ok(Self { layers })
    }

    /// Rebuild the read-only view from already computed layers.
    ///
    /// Only the layer shape is checked; node values are taken as given.
    pub fn from_layers(layers: Vec<Vec<Fr>>) -> Result<Self, TreeError> {
        let leaves = layers.first().ok_or(TreeError::TreeNotBuilt)?;
        if leaves.is_empty() {
            return Err(TreeError::EmptyTree);
        }
        if layers.len() < 2 {
            return Err(TreeError::NonPositiveDepth(0));
        }
        if layers.len() - 1 > MAX_DEPTH {
            return Err(TreeError::DepthExceedsLimit {
                depth: layers.len() - 1,
                max: MAX_DEPTH,
            });
        }

        for (level, pair) in layers.windows(2).enumerate() {
            let expected = pair[0].len().div_ceil(2);
            if pair[1].len() != expected {
                return Err(TreeError::MalformedLayers(format!(
                    "layer {} has {} nodes, expected {}",
                    level + 1,
                    pair[1].len(),
                    expected
                )));
            }
        }

        let top = layers.last().map_or(0, |layer| layer.len());
        if top != 1 {
            return Err(TreeError::MalformedLayers(format!(
                "top layer has {} nodes, expected 1",
                top
            )));
        }

        Ok(Self { layers })
    }

    /// The single node of the top layer.
    pub fn root(&self) -> Fr {
        self.layers[self.depth()][0]
    }

    /// Number of layers above the leaves.
    pub fn depth(&self) -> usize {
        self.layers.len() - 1
    }

    pub fn leaf_count(&self) -> usize {
        self.layers[0].len()
    }

    pub fn leaves(&self) -> &[Fr] {
        &self.layers[0]
    }

    pub fn leaf(&self, index: usize) -> Result<Fr, TreeError> {
        self.leaves()
            .get(index)
            .copied()
            .ok_or(TreeError::IndexOutOfRange {
                index,
                leaf_count: self.leaf_count(),
            })
    }

    /// Nodes at `level`, 0 being the leaves.
    pub fn layer(&self, level: usize) -> Option<&[Fr]> {
        self.layers.get(level).map(Vec::as_slice)
    }

    pub fn layers(&self) -> &[Vec<Fr>] {
        &self.layers
    }

    /// Derive the authentication path for the leaf at `index`.
    ///
    /// A node without a right neighbour was hashed with itself, so it is
    /// emitted as its own sibling.
    pub fn proof_for(&self, index: usize) -> Result<AuthenticationPath, TreeError> {
        if index >= self.leaf_count() {
            return Err(TreeError::IndexOutOfRange {
                index,
                leaf_count: self.leaf_count(),
            });
        }

        let depth = self.depth();
        let mut path_elements = Vec::with_capacity(depth);
        let mut path_indices = Vec::with_capacity(depth);

        let mut current_index = index;
        for layer in &self.layers[..depth] {
            let is_right = current_index % 2 == 1;
            let sibling_index = if is_right {
                current_index - 1
            } else {
                current_index + 1
            };

            let sibling = layer
                .get(sibling_index)
                .copied()
                .unwrap_or(layer[current_index]);

            path_elements.push(sibling);
            path_indices.push(is_right);
            current_index /= 2;
        }

        AuthenticationPath::new(path_elements, path_indices)
    }

    /// Check a path against this tree's root.
    pub fn verify_path<H: TwoToOneHash>(
        &self,
        leaf: Fr,
        path: &AuthenticationPath,
        hasher: &H,
    ) -> bool {
        path.verify(self.root(), leaf, hasher)
    }
}

/// Height needed to reduce `leaf_count` nodes to one, never below 1.
pub(crate) fn natural_depth(leaf_count: usize) -> usize {
    let height = leaf_count.next_power_of_two().trailing_zeros() as usize;
    height.max(1)
}

/// Hash consecutive pairs; an unpaired last node is hashed with itself.
fn hash_layer<H: TwoToOneHash>(layer: &[Fr], hasher: &H) -> Vec<Fr> {
    let pair = |chunk: &[Fr]| {
        let left = &chunk[0];
        let right = chunk.get(1).unwrap_or(left);
        hasher.compress(left, right)
    };

    #[cfg(feature = "parallel")]
    {
        layer.par_chunks(2).map(pair).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        layer.chunks(2).map(pair).collect()
    }
}
