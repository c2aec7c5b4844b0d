pub mod stats_atomics;
pub mod request_metrics;
