use serde::{
    Deserialize,
    Serialize
};
use thiserror::Error;

/// Error returned to external callers as a JSON body.
///
/// `details` is omitted from the JSON output when empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{code} {reason}:{}", .details.as_deref().unwrap_or(""))]
pub struct ApiError {
    /// Application specific error code, e.g. `AV-7101`.
    pub code: String,
    /// HTTP status code sent along with this error.
    pub status: u16,
    /// Static error title.
    pub reason: String,
    /// Dynamic error details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
