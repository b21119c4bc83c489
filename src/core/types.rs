//! Core data types for the piece verifier

use serde::{Deserialize, Serialize};
use std::fmt;

/// Width of a leaf value or sibling entry supplied by a caller
pub const PATH_ENTRY_WIDTH: usize = 16;

/// Width of the value produced by the node compression function
pub const HASH_OUTPUT_WIDTH: usize = 32;

/// Width of an aggregation checksum
pub const CHECKSUM_WIDTH: usize = 16;

/// Deepest sibling path accepted, so that `2^depth` fits the `u64` index
pub const MAX_PATH_DEPTH: usize = 63;

/// Fixed-width byte string (tree node, root or checksum)
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest<const N: usize>([u8; N]);

/// Leaf value or sibling entry
pub type Node = Digest<PATH_ENTRY_WIDTH>;

/// Output of the node compression function
pub type Root = Digest<HASH_OUTPUT_WIDTH>;

/// Raw piece commitment carried inside a content identifier
pub type PieceCommitment = Root;

/// Checksum binding a claimed total size to a root
pub type Checksum = Digest<CHECKSUM_WIDTH>;

impl<const N: usize> Digest<N> {
    /// Create a digest from a fixed-size array
    pub fn from_bytes(bytes: [u8; N]) -> Self {
        Digest(bytes)
    }

    /// Create a digest from a slice, `None` if the length differs
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        let array: [u8; N] = bytes.try_into().ok()?;
        Some(Digest(array))
    }

    /// Right-aligned digest whose trailing bytes are `tail`, zero elsewhere.
    ///
    /// `tail` longer than the digest keeps its last `N` bytes.
    pub fn left_padded(tail: &[u8]) -> Self {
        let mut out = [0u8; N];
        let take = tail.len().min(N);
        out[N - take..].copy_from_slice(&tail[tail.len() - take..]);
        Digest(out)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }

    /// Create a digest from a hex string
    pub fn from_hex(hex: &str) -> Result<Self, hex::FromHexError> {
        let hex = hex.strip_prefix("0x").unwrap_or(hex);
        let bytes = hex::decode(hex)?;
        Self::from_slice(&bytes).ok_or(hex::FromHexError::InvalidStringLength)
    }

    /// Convert to hex string
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// All-zero digest
    pub fn zero() -> Self {
        Digest([0u8; N])
    }
}

impl Node {
    /// Widen to hash-output width, leaf bytes leading and zero-filled after
    pub fn widen(&self) -> Root {
        let mut out = [0u8; HASH_OUTPUT_WIDTH];
        out[..PATH_ENTRY_WIDTH].copy_from_slice(&self.0);
        Digest(out)
    }
}

impl Root {
    /// Leading path-entry-width bytes, the part carried to the next tree level
    pub fn leading_node(&self) -> Node {
        let mut out = [0u8; PATH_ENTRY_WIDTH];
        out.copy_from_slice(&self.0[..PATH_ENTRY_WIDTH]);
        Digest(out)
    }
}

impl<const N: usize> Default for Digest<N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const N: usize> AsRef<[u8]> for Digest<N> {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<const N: usize> fmt::Display for Digest<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl<const N: usize> fmt::Debug for Digest<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex = hex::encode(self.0);
        write!(f, "Digest{}({})", N, &hex[..hex.len().min(8)])
    }
}

impl<const N: usize> From<[u8; N]> for Digest<N> {
    fn from(bytes: [u8; N]) -> Self {
        Digest(bytes)
    }
}

// Hex strings instead of byte arrays in JSON/TOML
impl<const N: usize> Serialize for Digest<N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de, const N: usize> Deserialize<'de> for Digest<N> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let hex_string = String::deserialize(deserializer)?;
        Digest::from_hex(&hex_string).map_err(serde::de::Error::custom)
    }
}

/// Sibling path plus leaf index proving membership of one leaf
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InclusionProof {
    /// Sibling entries, bottom level first
    pub path: Vec<Node>,
    /// Leaf position; bit `i` selects the ordering at level `i`
    pub index: u64,
}

impl InclusionProof {
    pub fn new(path: Vec<Node>, index: u64) -> Self {
        Self { path, index }
    }

    /// Tree depth implied by the path
    pub fn depth(&self) -> usize {
        self.path.len()
    }
}

/// One leaf's full membership claim
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProofData {
    /// Claimed leaf value
    pub leaf: Node,
    /// Path from the leaf to the root
    pub proof: InclusionProof,
}

impl ProofData {
    pub fn new(leaf: Node, proof: InclusionProof) -> Self {
        Self { leaf, proof }
    }
}

/// Aggregate root bound to a claimed total size, with the leaves it subsumes
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DataAggregationProof {
    /// Claimed total size of the aggregated data in bytes
    pub total_size: u64,
    /// Aggregate root every entry must recompute
    pub root: Root,
    /// Membership claims covered by the aggregate
    pub entries: Vec<ProofData>,
}
