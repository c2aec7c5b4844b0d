use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::certificate_store::CertificateStore;
use crate::ssl::structs::dynamic_certificate_resolver::DynamicCertificateResolver;
use log::info;
use rcgen::{CertificateParams, KeyPair};
use std::path::Path;
use std::sync::Arc;

pub fn create_certificate_store() -> Arc<CertificateStore> {
    Arc::new(CertificateStore::new())
}

pub fn create_server_config_with_resolver(
    resolver: Arc<DynamicCertificateResolver>,
) -> Result<rustls::ServerConfig, CertificateError> {
    let config = rustls::ServerConfig::builder_with_provider(Arc::new(rustls::crypto::ring::default_provider()))
        .with_safe_default_protocol_versions()
        .map_err(|e| CertificateError::TlsConfigError(e.to_string()))?
        .with_no_client_auth()
        .with_cert_resolver(resolver);
    Ok(config)
}

/// Writes a self-signed certificate for `localhost` (and `domain` when it
/// differs) with its private key. Only meant for development.
pub fn generate_self_signed(cert_path: &Path, key_path: &Path, domain: &str) -> Result<(), CertificateError> {
    info!("[CERTGEN] Requesting to generate a self-signed key and certificate file");

    let mut subject_alt_names = vec![String::from("localhost")];
    if domain != "localhost" {
        subject_alt_names.push(domain.to_string());
    }

    let key_pair = KeyPair::generate().map_err(|e| CertificateError::GenerateError(e.to_string()))?;
    let cert = CertificateParams::new(subject_alt_names)
        .and_then(|params| params.self_signed(&key_pair))
        .map_err(|e| CertificateError::GenerateError(e.to_string()))?;

    std::fs::write(key_path, key_pair.serialize_pem())?;
    info!("[CERTGEN] The key file {} has been generated", key_path.display());
    std::fs::write(cert_path, cert.pem())?;
    info!("[CERTGEN] The cert file {} has been generated", cert_path.display());
    Ok(())
}
