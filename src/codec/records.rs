//! Wire format of the three proof records
//!
//! ```text
//! InclusionProof       = [ [* bstr(16)], uint ]          ; path, index
//! ProofData            = [ bstr(16), InclusionProof ]    ; leaf, proof
//! DataAggregationProof = [ uint, bstr(32), [* ProofData] ] ; size, root, entries
//! ```

use crate::codec::cbor::*;
use crate::codec::cursor::ByteReader;
use crate::core::{error::*, types::*};

/// A record with a canonical binary form
pub trait ProofRecord: Sized {
    /// Append the encoding of `self` to `out`
    fn encode_into(&self, out: &mut Vec<u8>);

    /// Decode one record from the cursor, leaving it after the record
    fn decode_from(reader: &mut ByteReader<'_>) -> Result<Self>;

    /// Encode into a fresh buffer
    fn to_cbor(&self) -> Vec<u8> {
        let mut out = Vec::new();
        self.encode_into(&mut out);
        out
    }

    /// Decode a buffer holding exactly one record
    fn from_cbor(bytes: &[u8]) -> Result<Self> {
        let mut reader = ByteReader::new(bytes);
        let record = Self::decode_from(&mut reader)?;
        reader.ensure_consumed()?;
        Ok(record)
    }
}

impl ProofRecord for InclusionProof {
    fn encode_into(&self, out: &mut Vec<u8>) {
        write_array_header(out, 2);
        write_array_header(out, self.path.len());
        for node in &self.path {
            write_bytes(out, node.as_bytes());
        }
        write_uint(out, self.index);
    }

    fn decode_from(reader: &mut ByteReader<'_>) -> Result<Self> {
        read_array_exact(reader, 2, "inclusion proof")?;

        let depth = read_array_len(reader, "path")?;
        if depth > MAX_PATH_DEPTH {
            return Err(VerifierError::PathTooDeep {
                depth,
                max: MAX_PATH_DEPTH,
            });
        }
        let mut path = Vec::with_capacity(depth);
        for _ in 0..depth {
            path.push(Node::from_bytes(read_fixed_bytes(reader, "path entry")?));
        }

        let index = read_uint(reader, "index")?;
        Ok(InclusionProof { path, index })
    }
}

impl ProofRecord for ProofData {
    fn encode_into(&self, out: &mut Vec<u8>) {
        write_array_header(out, 2);
        write_bytes(out, self.leaf.as_bytes());
        self.proof.encode_into(out);
    }

    fn decode_from(reader: &mut ByteReader<'_>) -> Result<Self> {
        read_array_exact(reader, 2, "proof data")?;
        let leaf = Node::from_bytes(read_fixed_bytes(reader, "leaf")?);
        let proof = InclusionProof::decode_from(reader)?;
        Ok(ProofData { leaf, proof })
    }
}

impl ProofRecord for DataAggregationProof {
    fn encode_into(&self, out: &mut Vec<u8>) {
        write_array_header(out, 3);
        write_uint(out, self.total_size);
        write_bytes(out, self.root.as_bytes());
        write_array_header(out, self.entries.len());
        for entry in &self.entries {
            entry.encode_into(out);
        }
    }

    fn decode_from(reader: &mut ByteReader<'_>) -> Result<Self> {
        read_array_exact(reader, 3, "aggregation proof")?;
        let total_size = read_uint(reader, "total size")?;
        let root = Root::from_bytes(read_fixed_bytes(reader, "root")?);

        let count = read_array_len(reader, "entries")?;
        let mut entries = Vec::with_capacity(count);
        for _ in 0..count {
            entries.push(ProofData::decode_from(reader)?);
        }

        Ok(DataAggregationProof {
            total_size,
            root,
            entries,
        })
    }
}

/// Encode an inclusion proof
pub fn encode_inclusion_proof(proof: &InclusionProof) -> Vec<u8> {
    proof.to_cbor()
}

/// Decode an inclusion proof
pub fn decode_inclusion_proof(bytes: &[u8]) -> Result<InclusionProof> {
    InclusionProof::from_cbor(bytes)
}

/// Encode proof data
pub fn encode_proof_data(data: &ProofData) -> Vec<u8> {
    data.to_cbor()
}

/// Decode proof data
pub fn decode_proof_data(bytes: &[u8]) -> Result<ProofData> {
    ProofData::from_cbor(bytes)
}

/// Encode a data aggregation proof
pub fn encode_aggregation_proof(proof: &DataAggregationProof) -> Vec<u8> {
    proof.to_cbor()
}

/// Decode a data aggregation proof
pub fn decode_aggregation_proof(bytes: &[u8]) -> Result<DataAggregationProof> {
    DataAggregationProof::from_cbor(bytes)
}
