use std::path::{Path, PathBuf};
use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use crate::common::structs::custom_error::CustomError;
use crate::config::structs::configuration::Configuration;

pub fn parse_log_level(level: &str) -> Option<log::LevelFilter> {
    match level {
        "off" => Some(log::LevelFilter::Off),
        "trace" => Some(log::LevelFilter::Trace),
        "debug" => Some(log::LevelFilter::Debug),
        "info" => Some(log::LevelFilter::Info),
        "warn" => Some(log::LevelFilter::Warn),
        "error" => Some(log::LevelFilter::Error),
        _ => None
    }
}

pub fn setup_logging(config: &Configuration) -> Result<(), CustomError>
{
    let level = parse_log_level(config.log_level.as_str())
        .ok_or_else(|| CustomError::new(&format!("Unknown log level encountered: '{}'", config.log_level)))?;

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()
        .map_err(|e| CustomError::new(&format!("Failed to initialize logging: {e}")))?;
    info!("logging initialized.");
    Ok(())
}

/// Path must exist and be a regular file.
pub fn check_file(name: &str, path: &str) -> Result<PathBuf, CustomError> {
    let file = Path::new(path);
    match std::fs::metadata(file) {
        Ok(metadata) if metadata.is_file() => Ok(file.to_path_buf()),
        Ok(_) => Err(CustomError::new(&format!("{name} '{path}' is not a regular file"))),
        Err(e) => Err(CustomError::new(&format!("{name} '{path}': {e}"))),
    }
}

/// Certificate and key are accepted together or not at all.
pub fn certificate_arguments(certfile: Option<String>, keyfile: Option<String>) -> Result<Option<(PathBuf, PathBuf)>, CustomError> {
    match (certfile, keyfile) {
        (None, None) => Ok(None),
        (Some(certfile), Some(keyfile)) => Ok(Some((
            check_file("certificate file", &certfile)?,
            check_file("key file", &keyfile)?
        ))),
        _ => Err(CustomError::new("both --certfile and --keyfile must be given, or neither")),
    }
}
