//! Configuration management module.
//!
//! Loads, writes and validates the service configuration kept in a TOML
//! file (`config.toml` by default).
//!
//! # Configuration Structure
//!
//! - **log_level**: `off`, `trace`, `debug`, `info`, `warn` or `error`
//! - **http_server**: plain and TLS bind addresses, certificate paths,
//!   worker and timeout settings, and the per-request scan deadline
//! - **clamd**: scan engine address, timeouts and streaming chunk size
//! - **sentry_config**: optional error reporting
//!
//! # Example
//!
//! ```rust,ignore
//! use av_scan_service::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! config.validate()?;
//! ```

/// Configuration error enumeration.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
