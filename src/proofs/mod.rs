//! Proof verification
//!
//! Root recomputation from inclusion proofs, the aggregation checksum, and
//! the two composite checks built on them: a piece CID against one leaf
//! proof, and an aggregate root against every entry it subsumes.

pub mod aggregation;
pub mod merkle;
pub mod piece;

// Re-export commonly used items
pub use aggregation::{checksum, verify_aggregation, verify_aggregation_with, verify_checksum};
pub use merkle::{check_index, compute_root, verify_root};
pub use piece::verify_piece;
