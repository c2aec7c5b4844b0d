use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::enums::watcher_state::WatcherState;
use crate::ssl::structs::certificate_store::CertificateStore;
use crate::ssl::structs::watch_target::WatchTarget;
use crate::stats::structs::stats_atomics::StatsAtomics;
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Reloads a [`CertificateStore`] whenever the watched files change.
pub struct CertificateWatcher {
    pub(crate) target: WatchTarget,
    pub(crate) store: Arc<CertificateStore>,
    pub(crate) stats: Arc<StatsAtomics>,
    pub(crate) state: Arc<RwLock<WatcherState>>,
    pub(crate) cancel: CancellationToken,
    pub(crate) handle: Mutex<Option<JoinHandle<Result<(), CertificateError>>>>,
}
