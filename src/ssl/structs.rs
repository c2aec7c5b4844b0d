/// A loaded credential pair with its metadata.
pub mod certificate_bundle;

/// Last-good credential storage.
pub mod certificate_store;

/// File watcher driving store reloads.
pub mod certificate_watcher;

/// rustls certificate resolver backed by the store.
pub mod dynamic_certificate_resolver;

/// Absolute paths of the watched certificate and key.
pub mod watch_target;
