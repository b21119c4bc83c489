use crate::cli::commands::print_value;
use crate::core::error::VerifierError;
use crate::core::hash::combine_nodes;
use crate::core::types::{InclusionProof, Node, Root};
use crate::proofs::{checksum, compute_root};
use anyhow::{Context, Result};

fn parse_node(text: &str, what: &str) -> Result<Node> {
    Node::from_hex(text.trim())
        .map_err(VerifierError::from)
        .with_context(|| format!("Invalid {} node: expected 16 bytes of hex", what))
}

/// Execute the combine command
pub fn execute_combine(left: &str, right: &str, json: bool) -> Result<()> {
    let left = parse_node(left, "left")?;
    let right = parse_node(right, "right")?;
    print_value("node", &combine_nodes(&left, &right).to_hex(), json);
    Ok(())
}

/// Execute the compute-root command
pub fn execute_compute_root(leaf: &str, index: u64, path: &[String], json: bool) -> Result<()> {
    let leaf = parse_node(leaf, "leaf")?;
    let path = path
        .iter()
        .map(|entry| parse_node(entry, "path"))
        .collect::<Result<Vec<_>>>()?;

    let root = compute_root(&leaf, &InclusionProof::new(path, index))?;
    print_value("root", &root.to_hex(), json);
    Ok(())
}

/// Execute the checksum command
pub fn execute_checksum(size: u64, root: &str, json: bool) -> Result<()> {
    let root = Root::from_hex(root.trim())
        .map_err(VerifierError::from)
        .context("Invalid root: expected 32 bytes of hex")?;
    print_value("checksum", &checksum(size, &root).to_hex(), json);
    Ok(())
}
