/// `Created -> Watching -> Stopped`; a watcher never goes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatcherState {
    Created,
    Watching,
    Stopped,
}
