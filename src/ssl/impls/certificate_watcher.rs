use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::enums::watcher_state::WatcherState;
use crate::ssl::structs::certificate_store::CertificateStore;
use crate::ssl::structs::certificate_watcher::CertificateWatcher;
use crate::ssl::structs::watch_target::WatchTarget;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;
use log::{debug, error, info, warn};
use notify::event::{AccessKind, AccessMode, ModifyKind};
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

impl CertificateWatcher {
    pub fn new(target: WatchTarget, store: Arc<CertificateStore>, stats: Arc<StatsAtomics>) -> Self {
        Self {
            target,
            store,
            stats,
            state: Arc::new(RwLock::new(WatcherState::Created)),
            cancel: CancellationToken::new(),
            handle: Mutex::new(None),
        }
    }

    pub fn state(&self) -> WatcherState {
        *self.state.read()
    }

    pub fn target(&self) -> &WatchTarget {
        &self.target
    }

    /// Subscribes to both files, loads them once and spawns the event loop on
    /// the current tokio runtime.
    ///
    /// A failing initial load is returned to the caller and leaves the watcher
    /// `Stopped`; serving TLS without a credential is not possible.
    pub fn start(&self) -> Result<(), CertificateError> {
        {
            let mut state = self.state.write();
            if *state != WatcherState::Created {
                return Err(CertificateError::AlreadyStarted);
            }
            *state = WatcherState::Watching;
        }

        let (watcher, events) = match self.subscribe() {
            Ok(subscription) => subscription,
            Err(error) => {
                *self.state.write() = WatcherState::Stopped;
                return Err(error);
            }
        };

        if let Err(error) = reload(&self.store, &self.target, &self.stats) {
            *self.state.write() = WatcherState::Stopped;
            return Err(error);
        }

        info!(
            "[CERTIFICATE] Watching {} and {} for changes",
            self.target.cert_path().display(),
            self.target.key_path().display()
        );

        let handle = tokio::spawn(run(
            watcher,
            events,
            self.target.clone(),
            self.store.clone(),
            self.stats.clone(),
            self.state.clone(),
            self.cancel.clone(),
        ));
        *self.handle.lock() = Some(handle);
        Ok(())
    }

    /// Ends the event loop and waits for it to close the file subscription.
    /// Calling it before `start` or more than once is harmless.
    pub async fn stop(&self) {
        self.cancel.cancel();
        let handle = self.handle.lock().take();
        if let Some(handle) = handle {
            let _ = join_loop(handle).await;
        }
        *self.state.write() = WatcherState::Stopped;
    }

    /// Resolves when the event loop exits, with the reason it exited.
    pub async fn wait(&self) -> Result<(), CertificateError> {
        let handle = self.handle.lock().take();
        match handle {
            None => Ok(()),
            Some(handle) => join_loop(handle).await,
        }
    }

    fn subscribe(&self) -> Result<(RecommendedWatcher, UnboundedReceiver<notify::Result<Event>>), CertificateError> {
        let (sender, events) = unbounded_channel();
        let mut watcher = notify::recommended_watcher(move |event| {
            let _ = sender.send(event);
        })
        .map_err(|e| CertificateError::WatchError(e.to_string()))?;
        for path in self.target.paths() {
            watcher
                .watch(path, RecursiveMode::NonRecursive)
                .map_err(|e| CertificateError::WatchError(format!("{}: {}", path.display(), e)))?;
        }
        Ok((watcher, events))
    }
}

/// Awaits the event loop and logs how it ended, including a loop that had
/// already failed before `stop` was called.
pub(crate) async fn join_loop(handle: JoinHandle<Result<(), CertificateError>>) -> Result<(), CertificateError> {
    match handle.await {
        Ok(Ok(())) => Ok(()),
        Ok(Err(error)) => {
            error!("[CERTIFICATE] Watcher loop exited with error: {error}");
            Err(error)
        }
        Err(error) => {
            error!("[CERTIFICATE] Watcher task failed: {error}");
            Err(CertificateError::WatchError(error.to_string()))
        }
    }
}

fn reload(store: &CertificateStore, target: &WatchTarget, stats: &StatsAtomics) -> Result<(), CertificateError> {
    match store.load(target.cert_path(), target.key_path()) {
        Ok(bundle) => {
            stats.update_stats(StatsEvent::CertificateReloads, 1);
            info!(
                "[CERTIFICATE] Loaded {} certificate(s) from {}",
                bundle.cert_count,
                bundle.cert_path.display()
            );
            Ok(())
        }
        Err(error) => {
            stats.update_stats(StatsEvent::CertificateReloadFailures, 1);
            Err(error)
        }
    }
}

/// Our own reads show up as access events; only a finished write counts.
fn is_reload_trigger(kind: &EventKind) -> bool {
    match kind {
        EventKind::Access(AccessKind::Close(AccessMode::Write)) => true,
        EventKind::Access(_) => false,
        _ => true,
    }
}

/// Rename-replaced or removed files lose their OS watch.
fn needs_resubscribe(kind: &EventKind) -> bool {
    matches!(
        kind,
        EventKind::Remove(_) | EventKind::Modify(ModifyKind::Metadata(_)) | EventKind::Modify(ModifyKind::Name(_))
    )
}

async fn run(
    mut watcher: RecommendedWatcher,
    mut events: UnboundedReceiver<notify::Result<Event>>,
    target: WatchTarget,
    store: Arc<CertificateStore>,
    stats: Arc<StatsAtomics>,
    state: Arc<RwLock<WatcherState>>,
    cancel: CancellationToken,
) -> Result<(), CertificateError> {
    let result = loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => break Ok(()),
            event = events.recv() => match event {
                None => {
                    error!("[CERTIFICATE] Notification channel closed");
                    break Err(CertificateError::WatchError(String::from("notification channel closed")));
                }
                Some(Err(error)) => {
                    error!("[CERTIFICATE] Error watching certificates: {error}");
                }
                Some(Ok(event)) => {
                    if !is_reload_trigger(&event.kind) {
                        continue;
                    }
                    debug!("[CERTIFICATE] Event {:?} on {:?}", event.kind, event.paths);
                    if needs_resubscribe(&event.kind) {
                        for path in event.paths.iter().filter(|path| target.contains(path)) {
                            if let Err(error) = watcher.watch(path, RecursiveMode::NonRecursive) {
                                error!("[CERTIFICATE] Error re-watching {}: {}", path.display(), error);
                            }
                        }
                    }
                    if let Err(error) = reload(&store, &target, &stats) {
                        warn!("[CERTIFICATE] Keeping previous certificate, reload failed: {error}");
                    }
                }
            }
        }
    };

    for path in target.paths() {
        let _ = watcher.unwatch(path);
    }
    *state.write() = WatcherState::Stopped;
    info!("[CERTIFICATE] Stopped certificate watching");
    result
}
