#![allow(dead_code)]
use actix_web::web::Bytes;
use async_trait::async_trait;
use av_scan_service::clamav::enums::engine_error::EngineError;
use av_scan_service::clamav::structs::scan_result::ScanResult;
use av_scan_service::clamav::traits::scan_engine::ScanEngine;
use av_scan_service::clamav::types::ScanByteStream;
use av_scan_service::config::structs::configuration::Configuration;
use av_scan_service::config::structs::http_server_config::HttpServerConfig;
use av_scan_service::http::structs::http_service_data::ScanServiceData;
use av_scan_service::scan::structs::scan_orchestrator::ScanOrchestrator;
use av_scan_service::ssl::structs::certificate_store::CertificateStore;
use av_scan_service::stats::structs::stats_atomics::StatsAtomics;
use futures_util::StreamExt;
use rcgen::{CertificateParams, KeyPair};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio_util::sync::CancellationToken;

pub const EICAR: &str = "X5O!P%@AP[4\\PZX54(P^)7CC)7}$EICAR-STANDARD-ANTIVIRUS-TEST-FILE!$H+H*";
pub const EICAR_SIGNATURE: &str = "Eicar-Test-Signature";
pub const BOUNDARY: &str = "av-scan-test-boundary";

/// In-memory engine: flags anything containing the EICAR string.
#[derive(Default)]
pub struct MockScanEngine {
    unhealthy: Option<String>,
    hang: bool,
    panic: bool,
}

impl MockScanEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every ping and scan fails with `reason`.
    pub fn with_unhealthy(reason: &str) -> Self {
        Self { unhealthy: Some(reason.to_string()), ..Self::default() }
    }

    /// Scans never finish on their own.
    pub fn with_hang() -> Self {
        Self { hang: true, ..Self::default() }
    }

    /// Every ping and scan panics.
    pub fn with_panic() -> Self {
        Self { panic: true, ..Self::default() }
    }
}

#[async_trait(?Send)]
impl ScanEngine for MockScanEngine {
    async fn scan_stream(&self, mut content: ScanByteStream, cancel: &CancellationToken) -> Result<ScanResult, EngineError> {
        if self.panic {
            panic!("engine exploded while scanning");
        }
        if let Some(reason) = &self.unhealthy {
            return Err(EngineError::Engine(reason.clone()));
        }
        if self.hang {
            cancel.cancelled().await;
            return Err(EngineError::Cancelled(String::from("request cancelled")));
        }
        let mut data = Vec::new();
        while let Some(chunk) = content.next().await {
            data.extend_from_slice(&chunk.map_err(|e| EngineError::Source(e.to_string()))?);
        }
        if String::from_utf8_lossy(&data).contains(EICAR) {
            return Ok(ScanResult { infected: true, virus_description: Some(EICAR_SIGNATURE.to_string()) });
        }
        Ok(ScanResult::default())
    }

    async fn ping(&self) -> Result<(), EngineError> {
        if self.panic {
            panic!("engine exploded while pinging");
        }
        match &self.unhealthy {
            Some(reason) => Err(EngineError::Engine(reason.clone())),
            None => Ok(()),
        }
    }

    async fn database_age(&self) -> Result<f64, EngineError> {
        match &self.unhealthy {
            Some(reason) => Err(EngineError::Engine(reason.clone())),
            None => Ok(3600.0),
        }
    }
}

pub fn create_test_http_config() -> HttpServerConfig {
    let mut config = Configuration::init().http_server;
    config.bind_address = String::from("127.0.0.1:0");
    config.scan_timeout = 5;
    config
}

pub fn create_service_data(engine: Arc<dyn ScanEngine>, http_server_config: HttpServerConfig, certificate_store: Option<Arc<CertificateStore>>) -> Arc<ScanServiceData> {
    let stats = Arc::new(StatsAtomics::new());
    Arc::new(ScanServiceData {
        orchestrator: ScanOrchestrator::new(engine, stats.clone()),
        stats,
        http_server_config: Arc::new(http_server_config),
        certificate_store,
    })
}

pub fn create_mock_service_data(engine: MockScanEngine) -> Arc<ScanServiceData> {
    create_service_data(Arc::new(engine), create_test_http_config(), None)
}

/// Encodes `(filename, content)` pairs as a multipart body, returning the
/// content type header value with it.
pub fn multipart_body(parts: &[(&str, &str)]) -> (String, Bytes) {
    let mut body = String::new();
    for (filename, content) in parts {
        body.push_str(&format!("--{BOUNDARY}\r\n"));
        body.push_str(&format!("Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n"));
        body.push_str("Content-Type: application/octet-stream\r\n\r\n");
        body.push_str(content);
        body.push_str("\r\n");
    }
    body.push_str(&format!("--{BOUNDARY}--\r\n"));
    (format!("multipart/form-data; boundary={BOUNDARY}"), Bytes::from(body))
}

/// Writes a fresh self-signed pair and returns the certificate DER.
pub fn write_certificate_pair(cert_path: &Path, key_path: &Path) -> Vec<u8> {
    let key_pair = KeyPair::generate().unwrap();
    let cert = CertificateParams::new(vec![String::from("localhost")])
        .unwrap()
        .self_signed(&key_pair)
        .unwrap();
    std::fs::write(key_path, key_pair.serialize_pem()).unwrap();
    std::fs::write(cert_path, cert.pem()).unwrap();
    cert.der().to_vec()
}

pub fn certificate_paths(dir: &TempDir) -> (PathBuf, PathBuf) {
    (dir.path().join("cert.pem"), dir.path().join("key.pem"))
}

pub fn served_der(store: &CertificateStore) -> Option<Vec<u8>> {
    store.current_certificate().map(|key| key.cert[0].as_ref().to_vec())
}

/// Polls `check` for up to five seconds.
pub async fn eventually(check: impl Fn() -> bool) -> bool {
    for _ in 0..100 {
        if check() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    check()
}

/// An address nothing listens on.
pub fn closed_address() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap().to_string();
    drop(listener);
    address
}
