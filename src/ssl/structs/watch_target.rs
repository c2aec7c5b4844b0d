use std::path::PathBuf;

/// Both paths are absolute and fixed once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchTarget {
    pub(crate) cert_path: PathBuf,
    pub(crate) key_path: PathBuf,
}
