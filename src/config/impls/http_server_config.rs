use std::net::SocketAddr;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::http_server_config::HttpServerConfig;

impl HttpServerConfig {
    /// The single address the service listens on: `ssl_bind_address` when
    /// TLS is on, `bind_address` otherwise. No cleartext listener runs next
    /// to the TLS one.
    pub fn listen_address(&self) -> Result<SocketAddr, ConfigurationError> {
        let (name, value) = if self.ssl {
            ("http_server.ssl_bind_address", &self.ssl_bind_address)
        } else {
            ("http_server.bind_address", &self.bind_address)
        };
        value.parse::<SocketAddr>()
            .map_err(|e| ConfigurationError::ValidationError(format!("{name} \"{value}\": {e}")))
    }
}
