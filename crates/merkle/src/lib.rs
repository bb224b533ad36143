//! Merkle tree construction and inclusion paths for ZK membership benchmarks.
//!
//! This crate provides:
//! - `HashEngine`: Poseidon two-to-one compression over the BN254 scalar field
//! - `MerkleTree`: a build-once binary tree with odd-tail self-pairing
//! - `AuthenticationPath`: sibling values and left/right bits for one leaf
//! - `CircuitInput`: the decimal-string witness object consumed by the circuit

pub mod error;
pub mod field;
pub mod input;
pub mod merkle;
pub mod poseidon;
pub mod synthetic;

pub use error::TreeError;
pub use field::{
    field_element_from_biguint, field_element_to_decimal, parse_field_element, FieldElement,
};
pub use input::CircuitInput;
pub use merkle::{AuthenticationPath, MerkleTree, MAX_DEPTH};
pub use poseidon::{HashEngine, TwoToOneHash};
pub use synthetic::{
    build_synthetic, synthetic_leaves, DEFAULT_LEVELS, MAX_SYNTHETIC_LEVELS,
    SYNTHETIC_LEAF_BOUND,
};
