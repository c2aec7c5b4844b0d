//! API error taxonomy.
//!
//! Every failure that leaves the service is rendered as exactly one
//! [`ApiError`](structs::api_error::ApiError): a stable application code,
//! the HTTP status it maps to, a static reason and optional details.
//!
//! # Codes
//!
//! | Code    | Status | Reason                       |
//! |---------|--------|------------------------------|
//! | AV-1500 | 500    | failed to read request body  |
//! | AV-1900 | 500    | unexpected error             |
//! | AV-5000 | 415    | unsupported content type     |
//! | AV-5001 | 415    | filename not specified       |
//! | AV-7100 | 500    | clamd ping error             |
//! | AV-7101 | 500    | clamd scan error             |

/// API error data structure.
pub mod structs;

/// Constructors, display and actix-web response mapping.
pub mod impls;
