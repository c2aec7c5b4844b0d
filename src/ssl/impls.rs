pub mod certificate_bundle;
pub mod certificate_store;
pub mod certificate_watcher;
pub mod dynamic_certificate_resolver;
pub mod watch_target;
pub mod watcher_state;
