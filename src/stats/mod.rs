//! Service statistics.
//!
//! Atomic counters for scan, health and certificate activity, exported in
//! Prometheus text format by the `/metrics` endpoint.
//!
//! # Thread Safety
//!
//! All counters are atomic integers, so request handlers on every worker
//! and the certificate watcher update them without locking.
//!
//! # Example
//!
//! ```rust,ignore
//! use av_scan_service::stats::enums::stats_event::StatsEvent;
//!
//! stats.update_stats(StatsEvent::VirusesFound, 1);
//! let snapshot = stats.get_stats();
//! ```

/// Statistics event enumeration.
pub mod enums;

/// Statistics data structures (atomic counters and snapshots).
pub mod structs;

/// Implementation blocks for statistics operations.
pub mod impls;
