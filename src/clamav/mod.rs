//! Scan engine client.
//!
//! The [`ScanEngine`](traits::scan_engine::ScanEngine) trait is the contract
//! the scan orchestrator consumes: scan a byte stream under a cancellation
//! token, ping the engine and report its signature database age.
//! [`ClamdClient`](structs::clamd_client::ClamdClient) implements it against
//! a `clamd` daemon reachable over TCP.
//!
//! # Protocol
//!
//! Commands use the NUL-terminated `z` form. Scans use `INSTREAM`: the file
//! is sent as big-endian length-prefixed chunks followed by a zero-length
//! chunk, one TCP session per scanned file.

/// Reply parsing helpers.
#[allow(clippy::module_inception)]
pub mod clamav;

/// Engine error enumeration.
pub mod enums;

/// Engine implementation blocks.
pub mod impls;

/// Engine client and scan result structures.
pub mod structs;

/// Scan engine contract.
pub mod traits;

/// Type aliases for streamed scan content.
pub mod types;
