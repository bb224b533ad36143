//! Binary Merkle tree over field elements.
//!
//! This module provides:
//! - Layered tree construction with odd-tail self-pairing
//! - Authentication path derivation for any leaf
//! - Root recomputation from a leaf and its path

mod path;
mod tree;


pub use path::AuthenticationPath;
pub use tree::{MerkleTree, MAX_DEPTH};
