use crate::cli::commands::{parse_record, read_input};
use crate::cli::RecordKind;
use crate::codec::ProofRecord;
use crate::core::types::{DataAggregationProof, InclusionProof, ProofData};
use anyhow::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::PathBuf;

/// Execute the encode command
pub fn execute_encode(kind: RecordKind, input: Option<PathBuf>, from_stdin: bool) -> Result<()> {
    let text = read_input(input.as_deref(), from_stdin)?;
    let bytes = match kind {
        RecordKind::Inclusion => encode_json::<InclusionProof>(&text)?,
        RecordKind::ProofData => encode_json::<ProofData>(&text)?,
        RecordKind::Aggregation => encode_json::<DataAggregationProof>(&text)?,
    };
    println!("{}", hex::encode(bytes));
    Ok(())
}

/// Execute the decode command
pub fn execute_decode(kind: RecordKind, input: Option<PathBuf>, from_stdin: bool) -> Result<()> {
    let text = read_input(input.as_deref(), from_stdin)?;
    let json = match kind {
        RecordKind::Inclusion => to_json::<InclusionProof>(&text)?,
        RecordKind::ProofData => to_json::<ProofData>(&text)?,
        RecordKind::Aggregation => to_json::<DataAggregationProof>(&text)?,
    };
    println!("{}", json);
    Ok(())
}

fn encode_json<T: ProofRecord + DeserializeOwned>(text: &str) -> Result<Vec<u8>> {
    let record: T = serde_json::from_str(text.trim())?;
    Ok(record.to_cbor())
}

fn to_json<T: ProofRecord + DeserializeOwned + Serialize>(text: &str) -> Result<String> {
    let record: T = parse_record(text)?;
    Ok(serde_json::to_string_pretty(&record)?)
}
