//! Scan orchestration.
//!
//! [`ScanOrchestrator`](structs::scan_orchestrator::ScanOrchestrator) walks
//! the parts of a multipart upload one after another and streams each part
//! to the [`ScanEngine`](crate::clamav::traits::scan_engine::ScanEngine).
//! No part is buffered in memory.
//!
//! # Failure policy
//!
//! - An infected part is recorded and scanning continues with the next part.
//! - A part without a filename aborts the whole request with `AV-5001`, even
//!   when earlier parts were already scanned.
//! - An engine failure or a cancelled request aborts the whole request with
//!   `AV-7101`; verdicts gathered so far are discarded.
//! - A broken multipart body aborts with `AV-1500`.
//!
//! The orchestrator knows nothing about HTTP: it takes the declared content
//! type, a stream of parts and the request's cancellation token.

/// Scan part, verdict and orchestrator structures.
pub mod structs;

/// Implementation blocks for the orchestrator and verdicts.
pub mod impls;

/// Type aliases for part streams.
pub mod types;
