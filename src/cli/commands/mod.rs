//! CLI command implementations

pub mod aggregate;
pub mod cid;
pub mod node;
pub mod piece;
pub mod record;

// Common utilities for commands
use crate::codec::ProofRecord;
use crate::core::error::VerifierError;
use anyhow::{bail, Result};
use colored::Colorize;
use serde::de::DeserializeOwned;
use std::io::{self, Read};
use std::path::Path;

/// Read command input from a file or stdin
pub fn read_input(path: Option<&Path>, from_stdin: bool) -> Result<String> {
    if from_stdin {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }

    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => bail!("No input given: pass a file or --from-stdin"),
    }
}

/// Decode hex, accepting an optional `0x` prefix and surrounding whitespace
pub fn decode_hex(text: &str) -> Result<Vec<u8>> {
    let trimmed = text.trim();
    Ok(hex::decode(trimmed.strip_prefix("0x").unwrap_or(trimmed))?)
}

/// Parse a proof record given either as JSON or as hex CBOR
pub fn parse_record<T: ProofRecord + DeserializeOwned>(text: &str) -> Result<T> {
    let trimmed = text.trim();
    if trimmed.starts_with('{') {
        Ok(serde_json::from_str(trimmed)?)
    } else {
        Ok(T::from_cbor(&decode_hex(trimmed)?)?)
    }
}

/// Print a single labelled value, as plain text or JSON
pub fn print_value(key: &str, value: &str, json: bool) {
    if json {
        println!("{}", serde_json::json!({ key: value }));
    } else {
        println!("{}", value);
    }
}

/// Print the rejection line for a failed verification and hand the error back.
///
/// Input and environment failures (unreadable files, bad hex or JSON) are
/// passed through without a verdict.
pub fn report_failure(subject: &str, err: anyhow::Error, json: bool) -> anyhow::Error {
    let rejected = err
        .downcast_ref::<VerifierError>()
        .is_some_and(VerifierError::is_rejection);

    if rejected {
        if json {
            println!(
                "{}",
                serde_json::json!({ "valid": false, "error": err.to_string() })
            );
        } else {
            println!("{}", format!("✗ {} rejected", subject).red());
        }
    }
    err
}
