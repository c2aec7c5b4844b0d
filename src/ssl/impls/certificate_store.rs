use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::certificate_bundle::CertificateBundle;
use crate::ssl::structs::certificate_store::CertificateStore;
use rustls::pki_types::{
    CertificateDer,
    PrivateKeyDer
};
use rustls::sign::CertifiedKey;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

impl std::fmt::Debug for CertificateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CertificateStore")
            .field("current", &self.current.read())
            .field("loads", &self.load_count())
            .field("failures", &self.failure_count())
            .finish()
    }
}

impl Default for CertificateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CertificateStore {
    pub fn new() -> Self {
        Self {
            current: parking_lot::RwLock::new(None),
            loads: AtomicU64::new(0),
            failures: AtomicU64::new(0),
        }
    }

    /// Parses both files and swaps them in as one pair. On error the stored
    /// pair is left as it was.
    pub fn load(&self, cert_path: &Path, key_path: &Path) -> Result<Arc<CertificateBundle>, CertificateError> {
        match Self::load_bundle_from_files(cert_path, key_path) {
            Ok(bundle) => {
                let bundle = Arc::new(bundle);
                *self.current.write() = Some(bundle.clone());
                self.loads.fetch_add(1, Ordering::Relaxed);
                Ok(bundle)
            }
            Err(error) => {
                self.failures.fetch_add(1, Ordering::Relaxed);
                Err(error)
            }
        }
    }

    /// Key handed to the TLS handshake; `None` until the first successful load.
    pub fn current_certificate(&self) -> Option<Arc<CertifiedKey>> {
        self.current.read().as_ref().map(|bundle| bundle.certified_key.clone())
    }

    pub fn current_bundle(&self) -> Option<Arc<CertificateBundle>> {
        self.current.read().clone()
    }

    pub fn has_certificate(&self) -> bool {
        self.current.read().is_some()
    }

    pub fn load_count(&self) -> u64 {
        self.loads.load(Ordering::Relaxed)
    }

    pub fn failure_count(&self) -> u64 {
        self.failures.load(Ordering::Relaxed)
    }

    fn load_bundle_from_files(
        cert_path: &Path,
        key_path: &Path,
    ) -> Result<CertificateBundle, CertificateError> {
        let cert_data = std::fs::read(cert_path)
            .map_err(|e| CertificateError::CertFileNotFound(format!("{}: {}", cert_path.display(), e)))?;
        let key_data = std::fs::read(key_path)
            .map_err(|e| CertificateError::KeyFileNotFound(format!("{}: {}", key_path.display(), e)))?;
        let tls_certs: Vec<CertificateDer<'static>> = rustls_pemfile::certs(&mut cert_data.as_slice())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| CertificateError::CertParseError(e.to_string()))?;
        if tls_certs.is_empty() {
            return Err(CertificateError::CertParseError(
                "No certificates found in file".to_string(),
            ));
        }
        let cert_count = tls_certs.len();
        let tls_key = Self::parse_private_key(&key_data)?;
        let certified_key = CertifiedKey::from_der(tls_certs, tls_key, &rustls::crypto::ring::default_provider())
            .map_err(|e| CertificateError::CertifiedKeyError(e.to_string()))?;
        Ok(CertificateBundle {
            certified_key: Arc::new(certified_key),
            cert_count,
            loaded_at: chrono::Utc::now(),
            cert_path: cert_path.to_path_buf(),
            key_path: key_path.to_path_buf(),
        })
    }

    /// PKCS#8 first, then PKCS#1 (RSA), then SEC1 (EC).
    fn parse_private_key(key_data: &[u8]) -> Result<PrivateKeyDer<'static>, CertificateError> {
        if let Some(key_result) = rustls_pemfile::pkcs8_private_keys(&mut &key_data[..]).next() {
            return key_result
                .map(PrivateKeyDer::Pkcs8)
                .map_err(|e| CertificateError::KeyParseError(e.to_string()));
        }
        if let Some(key_result) = rustls_pemfile::rsa_private_keys(&mut &key_data[..]).next() {
            return key_result
                .map(PrivateKeyDer::Pkcs1)
                .map_err(|e| CertificateError::KeyParseError(e.to_string()));
        }
        if let Some(key_result) = rustls_pemfile::ec_private_keys(&mut &key_data[..]).next() {
            return key_result
                .map(PrivateKeyDer::Sec1)
                .map_err(|e| CertificateError::KeyParseError(e.to_string()));
        }
        Err(CertificateError::NoKeyFound)
    }
}
