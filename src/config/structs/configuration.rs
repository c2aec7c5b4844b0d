use serde::{Deserialize, Serialize};
use crate::config::structs::clamd_config::ClamdConfig;
use crate::config::structs::http_server_config::HttpServerConfig;
use crate::config::structs::sentry_config::SentryConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    pub http_server: HttpServerConfig,
    pub clamd: ClamdConfig,
    #[serde(default)]
    pub sentry_config: SentryConfig
}
