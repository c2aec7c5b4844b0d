//! HTTP/HTTPS front-end.
//!
//! # Endpoints
//!
//! - `POST /api/v1/scan` - scan every file of a `multipart/form-data` upload,
//!   answering a JSON array of `{filename, infected, virus?}`
//! - `GET /health` - `200` with an empty body when `clamd` answers a ping
//! - `GET /metrics` - Prometheus text exposition of the service counters
//!
//! Anything else answers `404` with a JSON body. Failures are answered with
//! the JSON [`ApiError`](crate::errors::structs::api_error::ApiError) body and
//! its status code.
//!
//! # Middleware
//!
//! Every request is logged with a generated request id, and a panic inside a
//! handler is answered with `AV-1900` instead of dropping the connection.
//!
//! # TLS
//!
//! The TLS listener asks the certificate store for its key on every
//! handshake, so rotated certificates apply to new connections immediately.

/// Shared handler state.
pub mod structs;

/// Request logging and panic recovery middleware.
pub mod middleware;

/// Routes, handlers and the server builder.
#[allow(clippy::module_inception)]
pub mod http;
