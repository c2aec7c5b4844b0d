use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ScanStatus {
    pub filename: String,
    pub infected: bool,
    /// Only set when infected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub virus: Option<String>,
}
