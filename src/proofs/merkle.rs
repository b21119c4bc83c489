//! Merkle root recomputation from an inclusion proof
//!
//! Walks the sibling path bottom-up. Bit `i` of the leaf index decides
//! whether the running node is the left (bit 0) or right (bit 1) child at
//! level `i`. Between levels only the leading path-entry-width bytes of a
//! combined node are carried forward; the final level's full output is the
//! root.

use crate::core::{
    error::*,
    hash::combine_nodes,
    types::{InclusionProof, Node, Root, MAX_PATH_DEPTH},
};
use tracing::trace;

/// Check that the proof's index addresses a leaf of the tree it describes
pub fn check_index(proof: &InclusionProof) -> Result<()> {
    let depth = proof.depth();
    if depth > MAX_PATH_DEPTH {
        return Err(VerifierError::PathTooDeep {
            depth,
            max: MAX_PATH_DEPTH,
        });
    }

    // depth <= 63, so the shift is defined
    if proof.index >> depth != 0 {
        return Err(VerifierError::IndexOutOfRange {
            index: proof.index,
            depth,
        });
    }

    Ok(())
}

/// Recompute the root committed to by `leaf` and its inclusion proof
pub fn compute_root(leaf: &Node, proof: &InclusionProof) -> Result<Root> {
    check_index(proof)?;

    let Some((top, lower)) = proof.path.split_last() else {
        return Ok(leaf.widen());
    };

    let mut running = *leaf;
    for (level, sibling) in lower.iter().enumerate() {
        running = combine_at(level, proof.index, &running, sibling).leading_node();
        trace!(level, node = %running, "carried node");
    }

    Ok(combine_at(lower.len(), proof.index, &running, top))
}

/// Exposed entry point, argument order as the surrounding system calls it
pub fn verify_root(proof: &InclusionProof, leaf: &Node) -> Result<Root> {
    compute_root(leaf, proof)
}

fn combine_at(level: usize, index: u64, running: &Node, sibling: &Node) -> Root {
    if (index >> level) & 1 == 0 {
        combine_nodes(running, sibling)
    } else {
        combine_nodes(sibling, running)
    }
}
