use crate::cid::PieceCid;
use crate::cli::commands::print_value;
use crate::core::error::VerifierError;
use crate::core::types::PieceCommitment;
use anyhow::Result;

/// Execute the cid-to-commitment command
pub fn execute_cid_to_commitment(cid: &str, json: bool) -> Result<()> {
    let cid = PieceCid::from_hex(cid.trim())?;
    print_value("commitment", &cid.commitment.to_hex(), json);
    Ok(())
}

/// Execute the commitment-to-cid command
pub fn execute_commitment_to_cid(commitment: &str, json: bool) -> Result<()> {
    let commitment = PieceCommitment::from_hex(commitment.trim()).map_err(VerifierError::from)?;
    print_value("cid", &PieceCid::from(commitment).to_string(), json);
    Ok(())
}
