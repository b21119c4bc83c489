use crate::cli::commands::{parse_record, read_input, report_failure};
use crate::core::error::VerifierError;
use crate::core::types::{Checksum, DataAggregationProof};
use crate::proofs::verify_aggregation_with;
use anyhow::{Context, Result};
use colored::Colorize;
use serde_json::json;
use std::path::PathBuf;

/// Execute the verify-aggregation command
pub fn execute(
    proof: Option<PathBuf>,
    checksum: &str,
    from_stdin: bool,
    parallel: bool,
    verbose: bool,
    json: bool,
) -> Result<()> {
    let expected = Checksum::from_hex(checksum.trim())
        .map_err(VerifierError::from)
        .context("Invalid checksum: expected 16 bytes of hex")?;

    let text = read_input(proof.as_deref(), from_stdin)?;
    let outcome = parse_record::<DataAggregationProof>(&text).and_then(|proof| {
        if verbose && !json {
            println!("  • Total size: {}", proof.total_size);
            println!("  • Root: {}", proof.root.to_hex().cyan());
            println!("  • Entries: {}", proof.entries.len());
        }
        verify_aggregation_with(&proof, &expected, parallel)?;
        Ok(proof)
    });

    let proof = outcome.map_err(|e| report_failure("Aggregation proof", e, json))?;

    if json {
        println!(
            "{}",
            json!({ "valid": true, "entries": proof.entries.len(), "root": proof.root.to_hex() })
        );
    } else {
        println!("{}", "✓ Aggregation proof verified".green());
    }
    Ok(())
}
