//! Common utilities and shared functionality.
//!
//! Logging setup, the boot-time [`CustomError`](structs::custom_error::CustomError)
//! and the file checks applied to certificate paths given on the command line.
//!
//! # Example
//!
//! ```rust,ignore
//! use av_scan_service::common::common::{certificate_arguments, setup_logging};
//!
//! setup_logging(&config)?;
//! let pair = certificate_arguments(args.certfile, args.keyfile)?;
//! ```

/// Common data structures.
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;
