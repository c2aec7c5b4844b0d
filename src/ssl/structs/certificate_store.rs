use crate::ssl::structs::certificate_bundle::CertificateBundle;
use parking_lot::RwLock;
use std::sync::atomic::AtomicU64;
use std::sync::Arc;

/// Holds the last successfully loaded credential pair.
///
/// The write lock is only held to swap the pointer; parsing happens before.
pub struct CertificateStore {
    pub(crate) current: RwLock<Option<Arc<CertificateBundle>>>,
    pub(crate) loads: AtomicU64,
    pub(crate) failures: AtomicU64,
}
