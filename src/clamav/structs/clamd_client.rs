use std::time::Duration;

/// Engine client talking to `clamd` over TCP.
///
/// The client keeps no connection open between calls; every scan, ping or
/// version request opens its own session.
#[derive(Debug, Clone)]
pub struct ClamdClient {
    pub(crate) address: String,
    pub(crate) connect_timeout: Duration,
    pub(crate) read_timeout: Duration,
    pub(crate) chunk_size: usize,
}
