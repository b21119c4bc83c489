//! Conversion between piece CIDs and raw piece commitments

use crate::cid::varint::{read_uvarint, write_uvarint};
use crate::cid::{CID_VERSION, FIL_COMMITMENT_UNSEALED, SHA2_256_TRUNC254_PADDED};
use crate::core::{error::*, types::*};

/// Extract the piece commitment carried by a CID
pub fn convert_cid_to_commitment(cid: &[u8]) -> Result<PieceCommitment> {
    let Some((&version, rest)) = cid.split_first() else {
        return Err(VerifierError::malformed_identifier("empty identifier"));
    };
    if version != CID_VERSION {
        return Err(VerifierError::malformed_identifier(format!(
            "unsupported CID version {}",
            version
        )));
    }

    let (codec, used) = read_uvarint(rest, "codec")?;
    let rest = &rest[used..];
    let (multihash, used) = read_uvarint(rest, "multihash")?;
    let rest = &rest[used..];

    if codec != FIL_COMMITMENT_UNSEALED || multihash != SHA2_256_TRUNC254_PADDED {
        return Err(VerifierError::UnsupportedEncoding { codec, multihash });
    }

    let (length, used) = read_uvarint(rest, "digest length")?;
    let payload = &rest[used..];

    if length != HASH_OUTPUT_WIDTH as u64 {
        return Err(VerifierError::malformed_identifier(format!(
            "declared digest length {} is not {}",
            length, HASH_OUTPUT_WIDTH
        )));
    }
    if payload.len() as u64 != length {
        return Err(VerifierError::malformed_identifier(format!(
            "declared digest length {} but {} bytes remain",
            length,
            payload.len()
        )));
    }

    PieceCommitment::from_slice(payload)
        .ok_or_else(|| VerifierError::malformed_identifier("digest width mismatch"))
}

/// Build the CID carrying a piece commitment
pub fn convert_commitment_to_cid(commitment: &PieceCommitment) -> Vec<u8> {
    let mut out = Vec::with_capacity(CID_HEADER_LEN + HASH_OUTPUT_WIDTH);
    out.push(CID_VERSION);
    write_uvarint(FIL_COMMITMENT_UNSEALED, &mut out);
    write_uvarint(SHA2_256_TRUNC254_PADDED, &mut out);
    write_uvarint(HASH_OUTPUT_WIDTH as u64, &mut out);
    out.extend_from_slice(commitment.as_bytes());
    out
}

/// Length of the fixed header preceding the digest
pub const CID_HEADER_LEN: usize = 7;
