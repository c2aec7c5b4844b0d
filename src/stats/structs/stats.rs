use serde::{
    Deserialize,
    Serialize
};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub started: i64,
    pub files_scanned: i64,
    pub viruses_found: i64,
    pub scan_failures: i64,
    pub ping_failures: i64,
    pub certificate_reloads: i64,
    pub certificate_reload_failures: i64,
}
