use serde::{
    Deserialize,
    Serialize
};

/// Selects the counter changed by `StatsAtomics::update_stats()`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum StatsEvent {
    FilesScanned,
    VirusesFound,
    ScanFailures,
    PingFailures,
    CertificateReloads,
    CertificateReloadFailures,
}
