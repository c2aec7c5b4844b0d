use crate::stats::structs::request_sample::RequestSample;
use parking_lot::RwLock;
use std::collections::BTreeMap;

/// Requests keyed by `(handler, status code)`.
#[derive(Debug, Default)]
pub struct RequestMetrics {
    pub(crate) samples: RwLock<BTreeMap<(String, u16), RequestSample>>,
}
