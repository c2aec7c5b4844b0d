/// Statistics events.
pub mod stats_event;
