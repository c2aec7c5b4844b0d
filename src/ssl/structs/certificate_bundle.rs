use rustls::sign::CertifiedKey;
use std::path::PathBuf;
use std::sync::Arc;

/// A certificate chain and matching private key, loaded together.
pub struct CertificateBundle {
    pub certified_key: Arc<CertifiedKey>,
    pub cert_count: usize,
    pub loaded_at: chrono::DateTime<chrono::Utc>,
    pub cert_path: PathBuf,
    pub key_path: PathBuf,
}
