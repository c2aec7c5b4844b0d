use crate::clamav::traits::scan_engine::ScanEngine;
use crate::stats::structs::stats_atomics::StatsAtomics;
use std::sync::Arc;

#[derive(Clone)]
pub struct ScanOrchestrator {
    pub(crate) engine: Arc<dyn ScanEngine>,
    pub(crate) stats: Arc<StatsAtomics>,
}
