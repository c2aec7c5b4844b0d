use std::sync::Arc;
use crate::config::structs::http_server_config::HttpServerConfig;
use crate::scan::structs::scan_orchestrator::ScanOrchestrator;
use crate::ssl::structs::certificate_store::CertificateStore;
use crate::stats::structs::stats_atomics::StatsAtomics;

pub struct ScanServiceData {
    pub orchestrator: ScanOrchestrator,
    pub stats: Arc<StatsAtomics>,
    pub http_server_config: Arc<HttpServerConfig>,
    /// Present when TLS is served; feeds the certificate metrics.
    pub certificate_store: Option<Arc<CertificateStore>>,
}
