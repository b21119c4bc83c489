//! Piece verification: a CID against the root recomputed from a leaf proof

use crate::cid::convert_cid_to_commitment;
use crate::core::{error::*, types::*};
use crate::proofs::merkle::compute_root;
use tracing::debug;

/// Verify that `data` recomputes the commitment carried by `cid`.
///
/// Returns the commitment on success.
pub fn verify_piece(cid: &[u8], data: &ProofData) -> Result<PieceCommitment> {
    let commitment = convert_cid_to_commitment(cid)?;
    let root = compute_root(&data.leaf, &data.proof)?;

    if root != commitment {
        return Err(VerifierError::root_mismatch(0, commitment, root));
    }

    debug!(commitment = %commitment, depth = data.proof.depth(), "piece verified");
    Ok(commitment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cid::convert_commitment_to_cid;

    fn sample() -> ProofData {
        ProofData::new(
            Node::left_padded(&[0x1]),
            InclusionProof::new(vec![Node::left_padded(&[0x2]), Node::left_padded(&[0x3])], 3),
        )
    }

    #[test]
    fn test_verify_piece_accepts_matching_cid() {
        let root = compute_root(&sample().leaf, &sample().proof).unwrap();
        let cid = convert_commitment_to_cid(&root);
        assert_eq!(verify_piece(&cid, &sample()).unwrap(), root);
    }

    #[test]
    fn test_verify_piece_rejects_other_root() {
        let cid = convert_commitment_to_cid(&PieceCommitment::zero());
        assert!(matches!(
            verify_piece(&cid, &sample()),
            Err(VerifierError::RootMismatch { entry: 0, .. })
        ));
    }
}
