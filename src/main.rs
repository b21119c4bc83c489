//! Piece Verifier CLI
//!
//! Command-line interface over the piece verifier library.

use anyhow::Result;
use clap::Parser;
use piece_verifier::cli::{commands, Cli, Commands};
use piece_verifier::config::VerifierConfig;
use piece_verifier::VerifierError;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => VerifierConfig::load_from(path)?,
        None => match VerifierConfig::load() {
            Ok(config) => config,
            Err(VerifierError::HomeDirectoryNotFound) => VerifierConfig::default(),
            Err(e) => return Err(e.into()),
        },
    };

    // Initialize logging
    let fallback = if cli.verbose {
        "debug"
    } else {
        config.log_filter.as_str()
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .init();

    let json = cli.json;
    let verbose = cli.verbose;

    // Execute the command
    match cli.command {
        Commands::CidToCommitment { cid } => commands::cid::execute_cid_to_commitment(&cid, json),
        Commands::CommitmentToCid { commitment } => {
            commands::cid::execute_commitment_to_cid(&commitment, json)
        }
        Commands::Combine { left, right } => commands::node::execute_combine(&left, &right, json),
        Commands::ComputeRoot { leaf, index, path } => {
            commands::node::execute_compute_root(&leaf, index, &path, json)
        }
        Commands::Checksum { size, root } => commands::node::execute_checksum(size, &root, json),
        Commands::VerifyPiece {
            proof,
            cid,
            from_stdin,
        } => commands::piece::execute(proof, &cid, from_stdin, verbose, json),
        Commands::VerifyAggregation {
            proof,
            checksum,
            from_stdin,
        } => commands::aggregate::execute(
            proof,
            &checksum,
            from_stdin,
            config.parallel,
            verbose,
            json,
        ),
        Commands::Encode {
            kind,
            input,
            from_stdin,
        } => commands::record::execute_encode(kind, input, from_stdin),
        Commands::Decode {
            kind,
            input,
            from_stdin,
        } => commands::record::execute_decode(kind, input, from_stdin),
    }
}
