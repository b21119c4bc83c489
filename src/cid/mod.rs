//! Piece content identifiers
//!
//! A piece CID has the layout
//! `[version=1][codec varint][multihash varint][length varint][digest]`.
//! Only the `fil-commitment-unsealed` codec paired with the
//! `sha2-256-trunc254-padded` multihash and a 32-byte digest is accepted.

pub mod parser;
pub mod varint;

use crate::core::{error::*, types::*};
use std::fmt;

pub use parser::{convert_cid_to_commitment, convert_commitment_to_cid, CID_HEADER_LEN};

/// CID version byte
pub const CID_VERSION: u8 = 0x01;

/// Multicodec `fil-commitment-unsealed`
pub const FIL_COMMITMENT_UNSEALED: u64 = 0xf101;

/// Multihash `sha2-256-trunc254-padded`
pub const SHA2_256_TRUNC254_PADDED: u64 = 0x1012;

/// Parsed piece CID
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceCid {
    /// Commitment carried as the CID digest
    pub commitment: PieceCommitment,
}

impl PieceCid {
    /// Parse a binary CID
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let commitment = convert_cid_to_commitment(bytes)?;
        Ok(Self { commitment })
    }

    /// Parse a hex-encoded binary CID
    pub fn from_hex(hex: &str) -> Result<Self> {
        let bytes = hex::decode(hex.strip_prefix("0x").unwrap_or(hex))?;
        Self::parse(&bytes)
    }

    /// Binary CID bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        convert_commitment_to_cid(&self.commitment)
    }

    /// Hex-encoded binary CID
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }
}

impl From<PieceCommitment> for PieceCid {
    fn from(commitment: PieceCommitment) -> Self {
        Self { commitment }
    }
}

impl fmt::Display for PieceCid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
