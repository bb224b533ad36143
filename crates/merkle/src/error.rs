//! Error kinds surfaced by tree construction and path queries.

use thiserror::Error;

/// Errors raised by the hash engine, tree builder and path queries.
///
/// Every variant is local and synchronous; nothing here is retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("Hash engine initialization failed: {0}")]
    Initialization(String),
    #[error("Cannot build a tree from zero leaves")]
    EmptyTree,
    #[error("Tree depth must be positive, got {0}")]
    NonPositiveDepth(usize),
    #[error("Depth {depth} holds at most 2^{depth} leaves, got {leaves}")]
    DepthTooSmall { depth: usize, leaves: usize },
    #[error("Depth {depth} exceeds the supported maximum of {max}")]
    DepthExceedsLimit { depth: usize, max: usize },
    #[error("Leaf index {index} out of range for {leaf_count} leaves")]
    IndexOutOfRange { index: usize, leaf_count: usize },
    #[error("Invalid field element: {0}")]
    InvalidFieldElement(String),
    #[error("Tree has not been built")]
    TreeNotBuilt,
    #[error("Malformed layers: {0}")]
    MalformedLayers(String),
    #[error("Malformed authentication path: {0}")]
    MalformedPath(String),
    #[error("Invalid circuit input JSON: {0}")]
    Json(String),
}
