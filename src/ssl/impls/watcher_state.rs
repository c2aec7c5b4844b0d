use crate::ssl::enums::watcher_state::WatcherState;

impl std::fmt::Display for WatcherState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WatcherState::Created => write!(f, "created"),
            WatcherState::Watching => write!(f, "watching"),
            WatcherState::Stopped => write!(f, "stopped"),
        }
    }
}
