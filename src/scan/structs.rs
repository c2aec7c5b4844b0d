/// Orchestrator driving the engine for every part of a request.
pub mod scan_orchestrator;

/// One named file from the upload.
pub mod scan_part;

/// Verdict for one scanned file, as returned to clients.
pub mod scan_status;
