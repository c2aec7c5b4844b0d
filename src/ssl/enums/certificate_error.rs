use thiserror::Error;

#[derive(Debug, Error)]
pub enum CertificateError {
    #[error("Certificate file not found: {0}")]
    CertFileNotFound(String),
    #[error("Key file not found: {0}")]
    KeyFileNotFound(String),
    #[error("Failed to parse certificate: {0}")]
    CertParseError(String),
    #[error("Failed to parse key: {0}")]
    KeyParseError(String),
    #[error("No private key found in file")]
    NoKeyFound,
    #[error("Failed to build certified key: {0}")]
    CertifiedKeyError(String),
    #[error("Invalid certificate path {path}: {message}")]
    InvalidPath { path: String, message: String },
    #[error("Failed to watch certificate files: {0}")]
    WatchError(String),
    #[error("Certificate watcher already started")]
    AlreadyStarted,
    #[error("Failed to build TLS configuration: {0}")]
    TlsConfigError(String),
    #[error("Failed to generate self-signed certificate: {0}")]
    GenerateError(String),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}
