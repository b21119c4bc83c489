//! Configuration management for the piece verifier
//!
//! Settings are stored in ~/.piece-verifier/config.toml or a file passed
//! explicitly on the command line.

pub mod verifier_config;

// Re-export commonly used items
pub use verifier_config::VerifierConfig;
