//! Core types and utilities for the piece verifier
//!
//! This module contains the digest types, proof records, error handling
//! and the node hashing primitive used throughout the crate.

pub mod error;
pub mod hash;
pub mod types;

// Re-export commonly used items
pub use error::{Result, VerifierError};
pub use hash::{combine_nodes, sha256, truncate_254};
pub use types::{
    Checksum, DataAggregationProof, Digest, InclusionProof, Node, PieceCommitment, ProofData,
    Root, CHECKSUM_WIDTH, HASH_OUTPUT_WIDTH, MAX_PATH_DEPTH, PATH_ENTRY_WIDTH,
};
