use crate::cli::commands::{decode_hex, parse_record, read_input, report_failure};
use crate::core::types::ProofData;
use crate::proofs::verify_piece;
use anyhow::Result;
use colored::Colorize;
use serde_json::json;
use std::path::PathBuf;

/// Execute the verify-piece command
pub fn execute(
    proof: Option<PathBuf>,
    cid: &str,
    from_stdin: bool,
    verbose: bool,
    json: bool,
) -> Result<()> {
    let text = read_input(proof.as_deref(), from_stdin)?;
    let cid_bytes = decode_hex(cid)?;

    let outcome = parse_record::<ProofData>(&text).and_then(|data| {
        if verbose && !json {
            println!("  • Leaf: {}", data.leaf.to_hex().cyan());
            println!("  • Index: {}", data.proof.index);
            println!("  • Path depth: {}", data.proof.depth());
        }
        Ok(verify_piece(&cid_bytes, &data)?)
    });

    let commitment = outcome.map_err(|e| report_failure("Piece proof", e, json))?;

    if json {
        println!("{}", json!({ "valid": true, "commitment": commitment.to_hex() }));
    } else {
        println!("{}", "✓ Piece proof verified".green());
        if verbose {
            println!("  • Commitment: {}", commitment.to_hex().cyan());
        }
    }
    Ok(())
}
