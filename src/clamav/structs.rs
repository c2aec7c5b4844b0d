/// TCP client for clamd.
pub mod clamd_client;

/// Verdict for a single scanned stream.
pub mod scan_result;
