//! Binary codec for proof records
//!
//! Records use a deterministic subset of CBOR: definite-length arrays,
//! fixed-width byte strings and unsigned integers, all with shortest-form
//! arguments. Decoding rejects any other encoding of the same value.

pub mod cbor;
pub mod cursor;
pub mod records;

pub use cursor::ByteReader;
pub use records::{
    decode_aggregation_proof, decode_inclusion_proof, decode_proof_data,
    encode_aggregation_proof, encode_inclusion_proof, encode_proof_data, ProofRecord,
};
