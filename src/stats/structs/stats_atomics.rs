use std::sync::atomic::AtomicI64;
use crate::stats::structs::request_metrics::RequestMetrics;

#[derive(Debug, Default)]
pub struct StatsAtomics {
    pub started: AtomicI64,
    pub files_scanned: AtomicI64,
    pub viruses_found: AtomicI64,
    pub scan_failures: AtomicI64,
    pub ping_failures: AtomicI64,
    pub certificate_reloads: AtomicI64,
    pub certificate_reload_failures: AtomicI64,
    pub requests: RequestMetrics,
}
