//! # Exclusion IO
//!
//! Persistence layer for simulation results.
//!
//! This crate provides:
//! - Structured error handling with custom error types
//! - JSON serialization with transparent gzip compression
//! - Saved runs bundling a trajectory with its provenance

/// Error types and result aliases for I/O operations
pub mod error;
/// Saved runs with metadata and load-time validation
pub mod run_file;
/// JSON helpers for plain and gzip-compressed files
pub mod serialization;

pub use error::{IoError, Result};
pub use run_file::{load_run, save_run, RunMetadata, SavedRun};
pub use serialization::{from_json, read_json_file, to_json, write_json_file};
