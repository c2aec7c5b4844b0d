use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::watch_target::WatchTarget;
use std::path::{Path, PathBuf};

impl WatchTarget {
    pub fn new(cert_path: impl AsRef<Path>, key_path: impl AsRef<Path>) -> Result<Self, CertificateError> {
        Ok(Self {
            cert_path: Self::absolute(cert_path.as_ref())?,
            key_path: Self::absolute(key_path.as_ref())?,
        })
    }

    pub fn cert_path(&self) -> &Path {
        &self.cert_path
    }

    pub fn key_path(&self) -> &Path {
        &self.key_path
    }

    pub fn paths(&self) -> [&Path; 2] {
        [&self.cert_path, &self.key_path]
    }

    pub fn contains(&self, path: &Path) -> bool {
        path == self.cert_path || path == self.key_path
    }

    fn absolute(path: &Path) -> Result<PathBuf, CertificateError> {
        std::path::absolute(path).map_err(|e| CertificateError::InvalidPath {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}
