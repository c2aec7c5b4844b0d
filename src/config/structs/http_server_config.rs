use serde::{Deserialize, Serialize};

/// With `ssl` set the service listens only on `ssl_bind_address` with TLS,
/// and certificate and key must both be given; otherwise it listens on
/// `bind_address` in cleartext.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HttpServerConfig {
    pub bind_address: String,
    pub ssl_bind_address: String,
    pub ssl: bool,
    pub ssl_cert: String,
    pub ssl_key: String,
    pub threads: Option<u64>,
    pub keep_alive: Option<u64>,
    pub request_timeout: Option<u64>,
    pub disconnect_timeout: Option<u64>,
    /// Deadline for a whole scan request, in seconds.
    pub scan_timeout: u64,
}
