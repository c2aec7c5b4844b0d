use serde::{Deserialize, Serialize};

/// Timeouts are in seconds.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ClamdConfig {
    pub address: String,
    pub connect_timeout: u64,
    pub read_timeout: u64,
    pub chunk_size: usize,
}
