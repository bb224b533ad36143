//! Witness object handed to the membership circuit.
//!
//! The witness generator expects base-10 strings for every field value and
//! plain 0/1 integers for the direction bits:
//!
//! ```json
//! { "root": "...", "leaf": "...", "pathElements": ["..."], "pathIndices": [0, 1] }
//! ```

use ark_bn254::Fr;
use serde::{Deserialize, Serialize};

use crate::error::TreeError;
use crate::field::{field_element_to_decimal, parse_field_element};
use crate::merkle::{AuthenticationPath, MerkleTree};
use crate::poseidon::TwoToOneHash;

/// Circuit input for one membership claim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CircuitInput {
    pub root: String,
    pub leaf: String,
    pub path_elements: Vec<String>,
    pub path_indices: Vec<u8>,
}

impl CircuitInput {
    /// Serialize a root, leaf and path.
    pub fn new(root: &Fr, leaf: &Fr, path: &AuthenticationPath) -> Self {
        Self {
            root: field_element_to_decimal(root),
            leaf: field_element_to_decimal(leaf),
            path_elements: path
                .path_elements()
                .iter()
                .map(field_element_to_decimal)
                .collect(),
            path_indices: path.path_indices().iter().map(|&b| b as u8).collect(),
        }
    }

    /// Membership claim for the leaf at `index`.
    pub fn from_tree(tree: &MerkleTree, index: usize) -> Result<Self, TreeError> {
        let leaf = tree.leaf(index)?;
        let path = tree.proof_for(index)?;
        Ok(Self::new(&tree.root(), &leaf, &path))
    }

    pub fn depth(&self) -> usize {
        self.path_elements.len()
    }

    pub fn to_json_pretty(&self) -> Result<String, TreeError> {
        serde_json::to_string_pretty(self).map_err(|e| TreeError::Json(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, TreeError> {
        serde_json::from_str(json).map_err(|e| TreeError::Json(e.to_string()))
    }

    /// Parse every field back into typed values: `(root, leaf, path)`.
    pub fn parse(&self) -> Result<(Fr, Fr, AuthenticationPath), TreeError> {
        let root = parse_field_element(&self.root)?;
        let leaf = parse_field_element(&self.leaf)?;
        let elements = self
            .path_elements
            .iter()
            .map(|s| parse_field_element(s))
            .collect::<Result<Vec<_>, _>>()?;
        let indices = self
            .path_indices
            .iter()
            .map(|&bit| match bit {
                0 => Ok(false),
                1 => Ok(true),
                other => Err(TreeError::MalformedPath(format!(
                    "path index must be 0 or 1, got {}",
                    other
                ))),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let path = AuthenticationPath::new(elements, indices)?;
        Ok((root, leaf, path))
    }

    /// Independently recompute the root from leaf and path.
    pub fn verify<H: TwoToOneHash>(&self, hasher: &H) -> Result<bool, TreeError> {
        let (root, leaf, path) = self.parse()?;
        Ok(path.verify(root, leaf, hasher))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poseidon::HashEngine;

    fn sample_tree(engine: &HashEngine) -> MerkleTree {
        let leaves = (1..=8u64).map(|v| Fr::from(v * 1000)).collect();
        MerkleTree::build_with_depth(leaves, 4, engine).unwrap()
    }

    #[test]
    fn test_json_shape() {
        let engine = HashEngine::init().unwrap();
        let input = CircuitInput::from_tree(&sample_tree(&engine), 5).unwrap();
        let value: serde_json::Value = serde_json::from_str(&input.to_json_pretty().unwrap()).unwrap();

        assert!(value["root"].is_string());
        assert_eq!(value["leaf"], "6000");
        assert_eq!(value["pathElements"].as_array().unwrap().len(), 4);
        assert_eq!(value["pathIndices"], serde_json::json!([1, 0, 1, 0]));
    }

    #[test]
    fn test_from_tree_verifies() {
        let engine = HashEngine::init().unwrap();
        let tree = sample_tree(&engine);

        for index in 0..tree.leaf_count() {
            let input = CircuitInput::from_tree(&tree, index).unwrap();
            assert_eq!(input.depth(), tree.depth());
            assert!(input.verify(&engine).unwrap());
        }
    }

    #[test]
    fn test_json_round_trip_still_verifies() {
        let engine = HashEngine::init().unwrap();
        let input = CircuitInput::from_tree(&sample_tree(&engine), 3).unwrap();
        let reloaded = CircuitInput::from_json(&input.to_json_pretty().unwrap()).unwrap();

        assert_eq!(reloaded, input);
        assert!(reloaded.verify(&engine).unwrap());
    }

    #[test]
    fn test_tampered_leaf_fails() {
        let engine = HashEngine::init().unwrap();
        let mut input = CircuitInput::from_tree(&sample_tree(&engine), 0).unwrap();
        input.leaf = "1001".to_string();

        assert!(!input.verify(&engine).unwrap());
    }

    #[test]
    fn test_non_bit_index_rejected() {
        let engine = HashEngine::init().unwrap();
        let mut input = CircuitInput::from_tree(&sample_tree(&engine), 0).unwrap();
        input.path_indices[2] = 2;

        assert!(matches!(input.verify(&engine), Err(TreeError::MalformedPath(_))));
    }

    #[test]
    fn test_hex_value_rejected() {
        let engine = HashEngine::init().unwrap();
        let mut input = CircuitInput::from_tree(&sample_tree(&engine), 0).unwrap();
        input.path_elements[0] = "0x1f".to_string();

        assert!(matches!(
            input.verify(&engine),
            Err(TreeError::InvalidFieldElement(_))
        ));
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let engine = HashEngine::init().unwrap();
        let mut input = CircuitInput::from_tree(&sample_tree(&engine), 0).unwrap();
        input.path_indices.pop();

        assert!(matches!(input.verify(&engine), Err(TreeError::MalformedPath(_))));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            CircuitInput::from_json("{\"root\": 1}"),
            Err(TreeError::Json(_))
        ));
    }
}
