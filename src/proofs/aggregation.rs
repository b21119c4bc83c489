//! Aggregation checksum and data-aggregation proof verification
//!
//! The checksum binds a claimed total size to an aggregate root:
//! SHA-256 over `root || total_size (u64 little-endian)`, cut to the leading
//! 16 bytes with the top two bits of the last byte cleared.

use crate::core::{
    error::*,
    hash::{sha256, truncate_254},
    types::{Checksum, DataAggregationProof, Digest, ProofData, Root, CHECKSUM_WIDTH},
};
use crate::proofs::merkle::compute_root;
use rayon::prelude::*;
use tracing::{debug, warn};

/// Compute the checksum binding `total_size` to `root`
pub fn checksum(total_size: u64, root: &Root) -> Checksum {
    let mut data = Vec::with_capacity(root.as_bytes().len() + 8);
    data.extend_from_slice(root.as_bytes());
    data.extend_from_slice(&total_size.to_le_bytes());

    let digest = sha256(&data);
    let mut out = [0u8; CHECKSUM_WIDTH];
    out.copy_from_slice(&digest[..CHECKSUM_WIDTH]);
    Digest::from_bytes(truncate_254(out))
}

/// Check a claimed checksum against `total_size` and `root`
pub fn verify_checksum(total_size: u64, root: &Root, expected: &Checksum) -> Result<()> {
    let actual = checksum(total_size, root);
    if actual != *expected {
        return Err(VerifierError::ChecksumMismatch {
            expected: expected.to_hex(),
            actual: actual.to_hex(),
        });
    }
    Ok(())
}

/// Verify an aggregation proof, checking entries in parallel
pub fn verify_aggregation(proof: &DataAggregationProof, expected: &Checksum) -> Result<()> {
    verify_aggregation_with(proof, expected, true)
}

/// Verify an aggregation proof.
///
/// The checksum must match `(total_size, root)`, at least one entry must be
/// present, and every entry must recompute `root`. On failure the error for
/// the lowest failing entry is returned whether or not `parallel` is set.
pub fn verify_aggregation_with(
    proof: &DataAggregationProof,
    expected: &Checksum,
    parallel: bool,
) -> Result<()> {
    if let Err(e) = verify_checksum(proof.total_size, &proof.root, expected) {
        warn!(total_size = proof.total_size, root = %proof.root, "aggregation checksum rejected");
        return Err(e);
    }

    if proof.entries.is_empty() {
        return Err(VerifierError::EmptyAggregation);
    }

    let failure = if parallel {
        proof
            .entries
            .par_iter()
            .enumerate()
            .find_map_first(|(i, entry)| check_entry(i, entry, &proof.root).err())
    } else {
        proof
            .entries
            .iter()
            .enumerate()
            .find_map(|(i, entry)| check_entry(i, entry, &proof.root).err())
    };

    if let Some(e) = failure {
        warn!(error = %e, "aggregation entry rejected");
        return Err(e);
    }

    debug!(
        entries = proof.entries.len(),
        total_size = proof.total_size,
        root = %proof.root,
        "aggregation proof verified"
    );
    Ok(())
}

fn check_entry(position: usize, entry: &ProofData, root: &Root) -> Result<()> {
    let actual = compute_root(&entry.leaf, &entry.proof)?;
    if actual != *root {
        return Err(VerifierError::root_mismatch(position, root, actual));
    }
    Ok(())
}
