//! # Expedition IO
//!
//! I/O and persistence layer for the Expedition simulation.
//!
//! This crate provides:
//! - Structured error handling with custom error types
//! - JSON and hex-wrapped JSON helpers, with transparent gzip
//! - Between-round state snapshots
//! - Result claims and their re-execution based verification

/// Result claims and claim verification
pub mod claim;
/// Error types and result aliases for I/O operations
pub mod error;
/// State snapshots for pausing and resuming games
pub mod persistence;
/// Serialization helpers for JSON and hex formats
pub mod serialization;

pub use claim::{verify_claim, ClaimMismatch, GameClaim, VerificationReport};
pub use error::{IoError, Result};
pub use persistence::{load_state, save_state, StateSnapshot};
pub use serialization::{
    from_hex_json, from_json, read_json_file, to_hex_json, to_json, to_json_pretty,
    write_json_file,
};
