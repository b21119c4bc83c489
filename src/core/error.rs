//! Error types for the piece verifier

use thiserror::Error;

/// Main error type for verification operations
#[derive(Error, Debug)]
pub enum VerifierError {
    /// Content identifier errors
    #[error("Malformed content identifier: {reason}")]
    MalformedIdentifier { reason: String },

    #[error("Unsupported encoding: codec {codec:#x}, multihash {multihash:#x}")]
    UnsupportedEncoding { codec: u64, multihash: u64 },

    /// Merkle proof errors
    #[error("Leaf index {index} out of range for tree depth {depth}")]
    IndexOutOfRange { index: u64, depth: usize },

    #[error("Proof path depth {depth} exceeds maximum {max}")]
    PathTooDeep { depth: usize, max: usize },

    #[error("Root mismatch for entry {entry}: expected {expected}, got {actual}")]
    RootMismatch {
        entry: usize,
        expected: String,
        actual: String,
    },

    /// Aggregation errors
    #[error("Checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    #[error("Aggregation proof carries no entries")]
    EmptyAggregation,

    /// Proof record decoding errors
    #[error("Truncated record while reading {field}")]
    TruncatedRecord { field: &'static str },

    #[error("Non-canonical encoding of {field}")]
    NonCanonicalEncoding { field: &'static str },

    #[error("Unexpected field type for {field}: expected {expected}, found {found}")]
    UnexpectedFieldType {
        field: &'static str,
        expected: &'static str,
        found: String,
    },

    #[error("Invalid length for {field}: expected {expected}, got {actual}")]
    InvalidFieldLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{count} trailing bytes after record")]
    TrailingBytes { count: usize },

    /// Configuration errors
    #[error("Configuration error: {reason}")]
    ConfigurationError { reason: String },

    #[error("Home directory not found")]
    HomeDirectoryNotFound,

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    #[error("Hex encoding error: {0}")]
    HexError(#[from] hex::FromHexError),
}

impl VerifierError {
    /// Create a new malformed identifier error
    pub fn malformed_identifier(reason: impl Into<String>) -> Self {
        Self::MalformedIdentifier {
            reason: reason.into(),
        }
    }

    /// Create a new truncated record error
    pub fn truncated(field: &'static str) -> Self {
        Self::TruncatedRecord { field }
    }

    /// Create a new non-canonical encoding error
    pub fn non_canonical(field: &'static str) -> Self {
        Self::NonCanonicalEncoding { field }
    }

    /// Create a new unexpected field type error
    pub fn unexpected_type(
        field: &'static str,
        expected: &'static str,
        found: impl Into<String>,
    ) -> Self {
        Self::UnexpectedFieldType {
            field,
            expected,
            found: found.into(),
        }
    }

    /// Create a new root mismatch error
    pub fn root_mismatch(entry: usize, expected: impl ToString, actual: impl ToString) -> Self {
        Self::RootMismatch {
            entry,
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    /// Create a new configuration error
    pub fn configuration(reason: impl Into<String>) -> Self {
        Self::ConfigurationError {
            reason: reason.into(),
        }
    }

    /// True for failures that reject a proof, as opposed to environment problems
    pub fn is_rejection(&self) -> bool {
        !matches!(
            self,
            Self::ConfigurationError { .. }
                | Self::HomeDirectoryNotFound
                | Self::Io(_)
                | Self::JsonSerialization(_)
                | Self::HexError(_)
        )
    }
}

/// Result type alias for verification operations
pub type Result<T> = std::result::Result<T, VerifierError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = VerifierError::IndexOutOfRange { index: 4, depth: 2 };
        assert_eq!(err.to_string(), "Leaf index 4 out of range for tree depth 2");

        let err = VerifierError::UnsupportedEncoding {
            codec: 0x55,
            multihash: 0x12,
        };
        assert_eq!(
            err.to_string(),
            "Unsupported encoding: codec 0x55, multihash 0x12"
        );
    }

    #[test]
    fn test_is_rejection() {
        assert!(VerifierError::EmptyAggregation.is_rejection());
        assert!(VerifierError::truncated("index").is_rejection());
        assert!(!VerifierError::configuration("bad toml").is_rejection());
    }
}
