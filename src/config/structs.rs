//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Scan engine (`clamd`) connection settings.
pub mod clamd_config;

/// Root configuration structure containing all settings.
pub mod configuration;

/// HTTP/HTTPS server configuration.
pub mod http_server_config;

/// Sentry error reporting configuration.
pub mod sentry_config;
