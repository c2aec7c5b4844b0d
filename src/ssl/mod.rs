//! SSL/TLS certificate management module.
//!
//! Keeps the credential pair served to TLS clients fresh without restarting
//! the listener.
//!
//! # Components
//!
//! - [`CertificateStore`](structs::certificate_store::CertificateStore) holds
//!   the last successfully loaded certificate and key. A failed load never
//!   replaces it.
//! - [`CertificateWatcher`](structs::certificate_watcher::CertificateWatcher)
//!   observes the certificate and key files and reloads the store whenever
//!   either changes on disk.
//! - [`DynamicCertificateResolver`](structs::dynamic_certificate_resolver::DynamicCertificateResolver)
//!   answers every TLS handshake from the store.
//!
//! # Hot Reload
//!
//! Files replaced by rename (as certificate managers usually do) drop the
//! underlying OS watch; the watcher subscribes again when it sees the file
//! removed or its metadata changed.
//!
//! # Example
//!
//! ```rust,ignore
//! use av_scan_service::ssl::ssl::{create_certificate_store, create_server_config_with_resolver};
//!
//! let store = create_certificate_store();
//! let target = WatchTarget::new("cert.pem", "key.pem")?;
//! let watcher = CertificateWatcher::new(target, store.clone(), stats.clone());
//! watcher.start()?;
//! let resolver = Arc::new(DynamicCertificateResolver::new(store));
//! let tls_config = create_server_config_with_resolver(resolver)?;
//! ```

/// Certificate error and watcher state enumerations.
pub mod enums;

/// Certificate store, watcher and resolver structures.
pub mod structs;

/// Implementation blocks for certificate management.
pub mod impls;

/// Store construction, rustls configuration and self-signed generation.
#[allow(clippy::module_inception)]
pub mod ssl;

#[cfg(test)]
mod tests;
