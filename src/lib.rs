//! # AV Scan Service
//!
//! An HTTP front-end for a clamd antivirus daemon.
//!
//! ## Overview
//!
//! Clients upload one or more files as `multipart/form-data`; every part is
//! streamed to clamd in `INSTREAM` chunks without buffering whole files, and
//! the service answers with one verdict per file in upload order. The HTTPS
//! listener serves its certificate from a store that is refreshed whenever
//! the certificate or key file changes on disk, so rotations need no restart.
//!
//! ## Modules
//!
//! - [`clamav`] - clamd wire client and the scan engine abstraction
//! - [`common`] - logging setup and shared helpers
//! - [`config`] - TOML configuration and validation
//! - [`errors`] - coded API errors and their JSON rendering
//! - [`http`] - routes, handlers and middleware
//! - [`scan`] - per-request scan orchestration
//! - [`ssl`] - certificate store, resolver and file watcher
//! - [`stats`] - counters and Prometheus rendering
//! - [`structs`] - command-line interface

/// Clamd protocol client.
///
/// Implements `INSTREAM`, `PING` and `VERSION` over TCP behind the
/// [`clamav::traits::scan_engine::ScanEngine`] trait so tests can swap in
/// an in-memory engine.
pub mod clamav;

/// Logging setup and command-line helpers.
pub mod common;

/// Configuration management module.
///
/// Loads and validates `config.toml`, optionally writing a default file.
pub mod config;

/// Coded API errors (`AV-xxxx`) and their HTTP mapping.
pub mod errors;

/// HTTP/HTTPS server, routes and middleware.
pub mod http;

/// Streaming scan orchestration for one request.
pub mod scan;

/// TLS certificate management with hot reload.
///
/// Holds the current certificate pair, resolves it on every handshake and
/// watches the files for changes.
pub mod ssl;

/// Counters exposed on `/metrics`.
pub mod stats;

/// CLI argument parsing.
pub mod structs;
