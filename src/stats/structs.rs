/// Snapshot of current statistics values.
pub mod stats;

/// Atomic counters for thread-safe statistics updates.
pub mod stats_atomics;

/// Per handler and status code request samples.
pub mod request_metrics;

pub mod request_sample;
