/// Certificate loading and watching errors.
pub mod certificate_error;

/// Lifecycle states of the certificate watcher.
pub mod watcher_state;
