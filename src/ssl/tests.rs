#[cfg(test)]
mod ssl_tests {
    use crate::ssl::enums::certificate_error::CertificateError;
    use crate::ssl::enums::watcher_state::WatcherState;
    use crate::ssl::impls::certificate_watcher::join_loop;
    use crate::ssl::ssl::{
        create_certificate_store,
        create_server_config_with_resolver,
        generate_self_signed
    };
    use crate::ssl::structs::certificate_store::CertificateStore;
    use crate::ssl::structs::certificate_watcher::CertificateWatcher;
    use crate::ssl::structs::dynamic_certificate_resolver::DynamicCertificateResolver;
    use crate::ssl::structs::watch_target::WatchTarget;
    use crate::stats::structs::stats_atomics::StatsAtomics;
    use rcgen::{CertificateParams, KeyPair};
    use std::path::{Path, PathBuf};
    use std::sync::Arc;
    use std::time::Duration;

    /// Writes a fresh self-signed pair and returns the certificate DER.
    fn write_pair(cert_path: &Path, key_path: &Path) -> Vec<u8> {
        let key_pair = KeyPair::generate().unwrap();
        let cert = CertificateParams::new(vec![String::from("localhost")])
            .unwrap()
            .self_signed(&key_pair)
            .unwrap();
        std::fs::write(key_path, key_pair.serialize_pem()).unwrap();
        std::fs::write(cert_path, cert.pem()).unwrap();
        cert.der().to_vec()
    }

    fn paths(dir: &tempfile::TempDir) -> (PathBuf, PathBuf) {
        (dir.path().join("cert.pem"), dir.path().join("key.pem"))
    }

    fn current_der(store: &CertificateStore) -> Option<Vec<u8>> {
        store.current_certificate().map(|key| key.cert[0].as_ref().to_vec())
    }

    async fn eventually(check: impl Fn() -> bool) -> bool {
        for _ in 0..100 {
            if check() {
                return true;
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        check()
    }

    #[test]
    fn test_certificate_store_new() {
        let store = CertificateStore::new();
        assert!(!store.has_certificate());
        assert!(store.current_certificate().is_none());
        assert_eq!(store.load_count(), 0);
    }

    #[test]
    fn test_load_valid_pair() {
        let dir = tempfile::tempdir().unwrap();
        let (cert, key) = paths(&dir);
        let der = write_pair(&cert, &key);
        let store = CertificateStore::new();
        let bundle = store.load(&cert, &key).unwrap();
        assert_eq!(bundle.cert_count, 1);
        assert_eq!(bundle.cert_path, cert);
        assert_eq!(current_der(&store), Some(der));
        assert_eq!(store.load_count(), 1);
    }

    #[test]
    fn test_failed_load_keeps_previous_pair() {
        let dir = tempfile::tempdir().unwrap();
        let (cert, key) = paths(&dir);
        let der = write_pair(&cert, &key);
        let store = CertificateStore::new();
        store.load(&cert, &key).unwrap();

        std::fs::write(&cert, b"-----BEGIN CERTIFICATE-----\nnot base64\n").unwrap();
        assert!(store.load(&cert, &key).is_err());
        assert_eq!(current_der(&store), Some(der));
        assert_eq!(store.failure_count(), 1);
    }

    #[test]
    fn test_mismatched_key_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let (cert, key) = paths(&dir);
        let der = write_pair(&cert, &key);
        let store = CertificateStore::new();
        store.load(&cert, &key).unwrap();

        let other_cert = dir.path().join("other_cert.pem");
        let other_key = dir.path().join("other_key.pem");
        write_pair(&other_cert, &other_key);
        let result = store.load(&cert, &other_key);
        assert!(matches!(result, Err(CertificateError::CertifiedKeyError(_))));
        assert_eq!(current_der(&store), Some(der));
    }

    #[test]
    fn test_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let (cert, key) = paths(&dir);
        let store = CertificateStore::new();
        assert!(matches!(store.load(&cert, &key), Err(CertificateError::CertFileNotFound(_))));
        write_pair(&cert, &dir.path().join("elsewhere.pem"));
        assert!(matches!(store.load(&cert, &key), Err(CertificateError::KeyFileNotFound(_))));
        assert!(!store.has_certificate());
    }

    #[test]
    fn test_empty_files() {
        let dir = tempfile::tempdir().unwrap();
        let (cert, key) = paths(&dir);
        write_pair(&cert, &key);
        std::fs::write(&key, b"").unwrap();
        let store = CertificateStore::new();
        assert!(matches!(store.load(&cert, &key), Err(CertificateError::NoKeyFound)));
        std::fs::write(&cert, b"").unwrap();
        assert!(matches!(store.load(&cert, &key), Err(CertificateError::CertParseError(_))));
    }

    #[test]
    fn test_certificate_error_display() {
        let err = CertificateError::CertFileNotFound("/path/to/cert.pem".to_string());
        assert!(err.to_string().contains("Certificate file not found"));
        let err = CertificateError::NoKeyFound;
        assert!(err.to_string().contains("No private key found"));
        assert_eq!(CertificateError::AlreadyStarted.to_string(), "Certificate watcher already started");
    }

    #[test]
    fn test_watch_target_is_absolute() {
        let target = WatchTarget::new("cert.pem", "certs/key.pem").unwrap();
        assert!(target.cert_path().is_absolute());
        assert!(target.key_path().is_absolute());
        assert!(target.key_path().ends_with("certs/key.pem"));
        assert!(target.contains(target.cert_path()));
        assert!(!target.contains(Path::new("/tmp/other.pem")));
    }

    #[test]
    fn test_resolver_follows_store() {
        let dir = tempfile::tempdir().unwrap();
        let (cert, key) = paths(&dir);
        write_pair(&cert, &key);
        let store = create_certificate_store();
        let resolver = DynamicCertificateResolver::new(store.clone());
        assert!(!resolver.has_certificate());
        store.load(&cert, &key).unwrap();
        assert!(resolver.has_certificate());
    }

    #[test]
    fn test_server_config_uses_resolver() {
        let resolver = Arc::new(DynamicCertificateResolver::new(create_certificate_store()));
        let config = create_server_config_with_resolver(resolver).unwrap();
        assert!(config.alpn_protocols.is_empty());
    }

    #[test]
    fn test_generate_self_signed_is_loadable() {
        let dir = tempfile::tempdir().unwrap();
        let (cert, key) = paths(&dir);
        generate_self_signed(&cert, &key, "scan.example.org").unwrap();
        let store = CertificateStore::new();
        assert!(store.load(&cert, &key).is_ok());
    }

    #[tokio::test]
    async fn test_watcher_initial_load_failure_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let (cert, key) = paths(&dir);
        std::fs::write(&cert, b"garbage").unwrap();
        std::fs::write(&key, b"garbage").unwrap();
        let store = create_certificate_store();
        let watcher = CertificateWatcher::new(WatchTarget::new(&cert, &key).unwrap(), store.clone(), Arc::new(StatsAtomics::new()));
        assert!(watcher.start().is_err());
        assert_eq!(watcher.state(), WatcherState::Stopped);
        assert!(!store.has_certificate());
    }

    #[tokio::test]
    async fn test_watcher_missing_files_fail_start() {
        let dir = tempfile::tempdir().unwrap();
        let (cert, key) = paths(&dir);
        let watcher = CertificateWatcher::new(WatchTarget::new(&cert, &key).unwrap(), create_certificate_store(), Arc::new(StatsAtomics::new()));
        assert!(matches!(watcher.start(), Err(CertificateError::WatchError(_))));
        assert_eq!(watcher.state(), WatcherState::Stopped);
    }

    #[tokio::test]
    async fn test_watcher_stop_before_start_and_twice() {
        let dir = tempfile::tempdir().unwrap();
        let (cert, key) = paths(&dir);
        write_pair(&cert, &key);
        let watcher = CertificateWatcher::new(WatchTarget::new(&cert, &key).unwrap(), create_certificate_store(), Arc::new(StatsAtomics::new()));
        assert_eq!(watcher.state(), WatcherState::Created);
        watcher.stop().await;
        watcher.stop().await;
        assert_eq!(watcher.state(), WatcherState::Stopped);
        assert!(matches!(watcher.start(), Err(CertificateError::AlreadyStarted)));
    }

    #[tokio::test]
    async fn test_watcher_reloads_on_change() {
        let dir = tempfile::tempdir().unwrap();
        let (cert, key) = paths(&dir);
        let first = write_pair(&cert, &key);
        let store = create_certificate_store();
        let stats = Arc::new(StatsAtomics::new());
        let watcher = CertificateWatcher::new(WatchTarget::new(&cert, &key).unwrap(), store.clone(), stats.clone());
        watcher.start().unwrap();
        assert_eq!(watcher.state(), WatcherState::Watching);
        assert_eq!(current_der(&store), Some(first.clone()));
        assert!(matches!(watcher.start(), Err(CertificateError::AlreadyStarted)));

        let second = write_pair(&cert, &key);
        assert_ne!(first, second);
        assert!(eventually(|| current_der(&store) == Some(second.clone())).await);
        assert!(stats.get_stats().certificate_reloads >= 2);

        watcher.stop().await;
        assert_eq!(watcher.state(), WatcherState::Stopped);
        assert!(watcher.wait().await.is_ok());
    }

    #[tokio::test]
    async fn test_watcher_keeps_last_good_on_bad_write() {
        let dir = tempfile::tempdir().unwrap();
        let (cert, key) = paths(&dir);
        let first = write_pair(&cert, &key);
        let store = create_certificate_store();
        let watcher = CertificateWatcher::new(WatchTarget::new(&cert, &key).unwrap(), store.clone(), Arc::new(StatsAtomics::new()));
        watcher.start().unwrap();

        std::fs::write(&cert, b"half written").unwrap();
        assert!(eventually(|| store.failure_count() > 0).await);
        assert_eq!(current_der(&store), Some(first));
        assert_eq!(watcher.state(), WatcherState::Watching);
        watcher.stop().await;
    }

    #[tokio::test]
    async fn test_watcher_follows_rename_replacement() {
        let dir = tempfile::tempdir().unwrap();
        let (cert, key) = paths(&dir);
        write_pair(&cert, &key);
        let store = create_certificate_store();
        let watcher = CertificateWatcher::new(WatchTarget::new(&cert, &key).unwrap(), store.clone(), Arc::new(StatsAtomics::new()));
        watcher.start().unwrap();

        let staged_cert = dir.path().join("cert.pem.new");
        let staged_key = dir.path().join("key.pem.new");
        let replaced = write_pair(&staged_cert, &staged_key);
        std::fs::rename(&staged_key, &key).unwrap();
        std::fs::rename(&staged_cert, &cert).unwrap();
        assert!(eventually(|| current_der(&store) == Some(replaced.clone())).await);
        watcher.stop().await;
    }

    #[tokio::test]
    async fn test_join_loop_surfaces_loop_error() {
        let handle = tokio::spawn(async {
            Err(CertificateError::WatchError(String::from("notification channel closed")))
        });
        let result = join_loop(handle).await;
        assert!(matches!(result, Err(CertificateError::WatchError(message)) if message == "notification channel closed"));

        let handle = tokio::spawn(async { Ok(()) });
        assert!(join_loop(handle).await.is_ok());
    }
}
