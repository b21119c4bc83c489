//! Piece Verifier - verification of piece commitments and inclusion proofs
//!
//! The crate checks two kinds of claims without access to the underlying data:
//! that a piece CID and a raw piece commitment denote the same content, and
//! that a leaf with its sibling path and index recomputes an expected root.
//!
//! # Core Features
//!
//! - **Node Hashing**: SHA-256 truncated to 254 bits over `left || right`
//! - **Root Recomputation**: Bit-indexed walk up a sibling path with strict index checks
//! - **Commitment Codec**: Piece CID ⇄ 32-byte commitment, one supported codec pairing
//! - **Aggregation Checksum**: Binds a claimed total size to an aggregate root
//! - **Proof Records**: Deterministic binary encoding of the three proof shapes
//!
//! # Example Usage
//!
//! ```rust
//! use piece_verifier::{
//!     convert_commitment_to_cid, verify_piece, verify_root, InclusionProof, Node, ProofData,
//! };
//!
//! let leaf = Node::left_padded(&[0x1]);
//! let proof = InclusionProof::new(vec![Node::left_padded(&[0x2]), Node::left_padded(&[0x3])], 1);
//! let root = verify_root(&proof, &leaf)?;
//!
//! let cid = convert_commitment_to_cid(&root);
//! verify_piece(&cid, &ProofData::new(leaf, proof))?;
//! # Ok::<(), piece_verifier::VerifierError>(())
//! ```

pub mod cid;
pub mod cli;
pub mod codec;
pub mod config;
pub mod core;
pub mod proofs;

// Re-export commonly used types
pub use crate::core::{
    error::{Result, VerifierError},
    hash::combine_nodes,
    types::{
        Checksum, DataAggregationProof, Digest, InclusionProof, Node, PieceCommitment, ProofData,
        Root, CHECKSUM_WIDTH, HASH_OUTPUT_WIDTH, MAX_PATH_DEPTH, PATH_ENTRY_WIDTH,
    },
};

pub use cid::{convert_cid_to_commitment, convert_commitment_to_cid, PieceCid};

pub use codec::{
    decode_aggregation_proof, decode_inclusion_proof, decode_proof_data,
    encode_aggregation_proof, encode_inclusion_proof, encode_proof_data, ProofRecord,
};

pub use config::VerifierConfig;

pub use proofs::{
    checksum, compute_root, verify_aggregation, verify_aggregation_with, verify_checksum,
    verify_piece, verify_root,
};

/// Current version of the piece verifier
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
