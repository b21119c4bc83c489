//! Command-line interface for the piece verifier

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

pub mod commands;

/// Piece Verifier - commitment and inclusion proof verification
#[derive(Parser)]
#[command(
    name = "pieceverify",
    version,
    about = "Verify piece commitments, CIDs and Merkle inclusion proofs",
    long_about = "Piece Verifier converts between piece CIDs and raw commitments, recomputes Merkle roots from inclusion proofs and checks data aggregation proofs."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "PIECE_VERIFIER_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract the piece commitment from a hex-encoded CID
    CidToCommitment {
        /// Binary CID as hex
        cid: String,
    },

    /// Build the hex-encoded CID for a piece commitment
    CommitmentToCid {
        /// 32-byte commitment as hex
        commitment: String,
    },

    /// Combine two 16-byte nodes into their parent
    Combine {
        /// Left node as hex
        left: String,

        /// Right node as hex
        right: String,
    },

    /// Recompute a root from a leaf, sibling path and index
    ComputeRoot {
        /// Leaf node as hex
        #[arg(long)]
        leaf: String,

        /// Leaf index
        #[arg(long)]
        index: u64,

        /// Sibling node as hex, bottom level first (repeatable)
        #[arg(long = "path")]
        path: Vec<String>,
    },

    /// Compute the aggregation checksum of a size and root
    Checksum {
        /// Claimed total size in bytes
        #[arg(long)]
        size: u64,

        /// Aggregate root as hex
        #[arg(long)]
        root: String,
    },

    /// Verify a proof data record against a piece CID
    VerifyPiece {
        /// Proof data file (JSON or hex CBOR)
        #[arg(value_name = "PROOF")]
        proof: Option<PathBuf>,

        /// Binary CID as hex
        #[arg(long)]
        cid: String,

        /// Read proof from stdin
        #[arg(long)]
        from_stdin: bool,
    },

    /// Verify a data aggregation proof against a checksum
    VerifyAggregation {
        /// Aggregation proof file (JSON or hex CBOR)
        #[arg(value_name = "PROOF")]
        proof: Option<PathBuf>,

        /// Expected checksum as hex
        #[arg(long)]
        checksum: String,

        /// Read proof from stdin
        #[arg(long)]
        from_stdin: bool,
    },

    /// Convert a JSON proof record to hex CBOR
    Encode {
        /// Record shape
        #[arg(long, value_enum)]
        kind: RecordKind,

        /// JSON record file
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Read record from stdin
        #[arg(long)]
        from_stdin: bool,
    },

    /// Convert a hex CBOR proof record to JSON
    Decode {
        /// Record shape
        #[arg(long, value_enum)]
        kind: RecordKind,

        /// Hex CBOR record file
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Read record from stdin
        #[arg(long)]
        from_stdin: bool,
    },
}

/// Proof record shapes understood by `encode` and `decode`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RecordKind {
    /// Sibling path and leaf index
    Inclusion,
    /// Leaf with its inclusion proof
    ProofData,
    /// Size, aggregate root and proof data entries
    Aggregation,
}
