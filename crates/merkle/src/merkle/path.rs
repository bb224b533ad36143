//! Authentication path for a single leaf.

use ark_bn254::Fr;

use crate::error::TreeError;
use crate::poseidon::TwoToOneHash;

/// Sibling values from the leaf layer up to the root, with direction bits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticationPath {
    /// Sibling at each layer, leaf layer first
    path_elements: Vec<Fr>,

    /// Direction at each layer: true = current node is the right child
    path_indices: Vec<bool>,
}

impl AuthenticationPath {
    pub fn new(path_elements: Vec<Fr>, path_indices: Vec<bool>) -> Result<Self, TreeError> {
        if path_elements.len() != path_indices.len() {
            return Err(TreeError::MalformedPath(format!(
                "{} path elements but {} path indices",
                path_elements.len(),
                path_indices.len()
            )));
        }
        Ok(Self {
            path_elements,
            path_indices,
        })
    }

    pub fn path_elements(&self) -> &[Fr] {
        &self.path_elements
    }

    pub fn path_indices(&self) -> &[bool] {
        &self.path_indices
    }

    /// Number of layers the path climbs.
    pub fn depth(&self) -> usize {
        self.path_elements.len()
    }

    /// Leaf position implied by the direction bits.
    pub fn leaf_index(&self) -> u128 {
        self.path_indices
            .iter()
            .rev()
            .fold(0u128, |acc, &is_right| (acc << 1) | is_right as u128)
    }

    /// Fold the path over `leaf` to recompute the root.
    pub fn compute_root<H: TwoToOneHash>(&self, leaf: Fr, hasher: &H) -> Fr {
        self.path_elements
            .iter()
            .zip(self.path_indices.iter())
            .fold(leaf, |current, (sibling, &is_right)| {
                if is_right {
                    hasher.compress(sibling, &current)
                } else {
                    hasher.compress(&current, sibling)
                }
            })
    }

    /// Check that `leaf` under this path reproduces `root`.
    pub fn verify<H: TwoToOneHash>(&self, root: Fr, leaf: Fr, hasher: &H) -> bool {
        self.compute_root(leaf, hasher) == root
    }
}
