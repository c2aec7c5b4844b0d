/// Defaults, loading, saving and validation.
pub mod configuration;

/// Listener address selection.
pub mod http_server_config;

/// Display and error trait implementations.
pub mod configuration_error;
