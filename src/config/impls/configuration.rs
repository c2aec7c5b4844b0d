use std::fs::File;
use std::io::Write;
use std::net::SocketAddr;
use std::thread::available_parallelism;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::clamd_config::ClamdConfig;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::http_server_config::HttpServerConfig;
use crate::config::structs::sentry_config::SentryConfig;

pub const LOG_LEVELS: [&str; 6] = ["off", "trace", "debug", "info", "warn", "error"];

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            http_server: HttpServerConfig {
                bind_address: String::from("0.0.0.0:8080"),
                ssl_bind_address: String::from("0.0.0.0:8443"),
                ssl: false,
                ssl_cert: String::from(""),
                ssl_key: String::from(""),
                threads: available_parallelism().ok().map(|threads| threads.get() as u64),
                keep_alive: Some(60),
                request_timeout: Some(30),
                disconnect_timeout: Some(30),
                scan_timeout: 300,
            },
            clamd: ClamdConfig {
                address: String::from("127.0.0.1:3310"),
                connect_timeout: 10,
                read_timeout: 120,
                chunk_size: 2048,
            },
            sentry_config: SentryConfig {
                enabled: false,
                dsn: String::from(""),
                environment: None,
                debug: false,
                sample_rate: 1.0,
                max_breadcrumbs: 100,
                attach_stacktrace: true,
                send_default_pii: false,
                traces_sample_rate: 1.0,
            },
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => Self::load(data.as_slice()).map_err(ConfigurationError::ParseError),
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path)?;
        file.write_all(data.as_ref())?;
        Ok(())
    }

    pub fn save_from_config(path: &str, config: &Configuration) -> Result<(), ConfigurationError> {
        let data = toml::to_string(config).map_err(ConfigurationError::SerializeError)?;
        Self::save_file(path, data)
    }

    /// Reads `path`; when it is missing or corrupt and `create` is set, a
    /// default file is written and an error still returned so the operator
    /// can review it first.
    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {error}");

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(CustomError::new(&format!("will not create automatically {path} file")));
                }
                eprintln!("Creating config file..");

                return match Configuration::save_from_config(path, &Configuration::init()) {
                    Ok(_) => {
                        eprintln!("Please edit {path} and start again, exiting now...");
                        Err(CustomError::new(&format!("created {path} file")))
                    }
                    Err(e) => {
                        eprintln!("{path} file could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(CustomError::new(&format!("could not create {path} file")))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        config.validate().map_err(|e| CustomError::new(&e.to_string()))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(Self::invalid(format!("unknown log level '{}'", self.log_level)));
        }
        Self::validate_socket_address("http_server.bind_address", &self.http_server.bind_address)?;
        if self.http_server.ssl {
            Self::validate_socket_address("http_server.ssl_bind_address", &self.http_server.ssl_bind_address)?;
            if self.http_server.ssl_cert.is_empty() || self.http_server.ssl_key.is_empty() {
                return Err(Self::invalid(String::from("ssl is enabled but ssl_cert or ssl_key is missing")));
            }
        }
        if self.http_server.ssl_cert.is_empty() != self.http_server.ssl_key.is_empty() {
            return Err(Self::invalid(String::from("ssl_cert and ssl_key must be given together")));
        }
        if self.http_server.scan_timeout == 0 {
            return Err(Self::invalid(String::from("http_server.scan_timeout must be greater than zero")));
        }
        Self::validate_engine_address(&self.clamd.address)?;
        if self.clamd.chunk_size == 0 {
            return Err(Self::invalid(String::from("clamd.chunk_size must be greater than zero")));
        }
        Ok(())
    }

    fn validate_socket_address(name: &str, value: &str) -> Result<(), ConfigurationError> {
        value.parse::<SocketAddr>()
            .map(|_| ())
            .map_err(|e| Self::invalid(format!("{name} \"{value}\": {e}")))
    }

    /// The engine may be addressed by host name, so only `host:port` shape is checked.
    fn validate_engine_address(value: &str) -> Result<(), ConfigurationError> {
        match value.rsplit_once(':') {
            Some((host, port)) if !host.is_empty() && port.parse::<u16>().is_ok() => Ok(()),
            _ => Err(Self::invalid(format!("clamd.address \"{value}\" is not host:port"))),
        }
    }

    fn invalid(message: String) -> ConfigurationError {
        ConfigurationError::ValidationError(message)
    }
}
