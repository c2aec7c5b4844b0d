pub mod scan_orchestrator;
pub mod scan_status;
