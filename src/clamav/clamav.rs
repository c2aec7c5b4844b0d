use crate::clamav::enums::engine_error::EngineError;
use crate::clamav::structs::scan_result::ScanResult;
use chrono::{
    DateTime,
    NaiveDateTime,
    Utc
};

pub const INSTREAM_COMMAND: &[u8] = b"zINSTREAM\0";
pub const PING_COMMAND: &[u8] = b"zPING\0";
pub const VERSION_COMMAND: &[u8] = b"zVERSION\0";

/// Date layout of the signature database in the `VERSION` reply.
pub const CLAMD_DATE_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

fn clean_reply(reply: &str) -> &str {
    reply.trim_end_matches('\0').trim()
}

/// Turns an `INSTREAM` reply such as `stream: Eicar-Test-Signature FOUND`
/// into a verdict.
pub fn parse_scan_reply(reply: &str) -> Result<ScanResult, EngineError> {
    let reply = clean_reply(reply);
    if let Some(found) = reply.strip_suffix("FOUND") {
        let virus = match found.split_once(':') {
            Some((_, name)) => name.trim(),
            None => found.trim(),
        };
        if virus.is_empty() {
            return Err(EngineError::UnexpectedReply(reply.to_string()));
        }
        return Ok(ScanResult {
            infected: true,
            virus_description: Some(virus.to_string()),
        });
    }
    if let Some(error) = reply.strip_suffix("ERROR") {
        return Err(EngineError::EngineReported(error.trim().to_string()));
    }
    if reply.ends_with("OK") {
        return Ok(ScanResult::default());
    }
    Err(EngineError::UnexpectedReply(reply.to_string()))
}

pub fn parse_ping_reply(reply: &str) -> Result<(), EngineError> {
    match clean_reply(reply) {
        "PONG" => Ok(()),
        other => Err(EngineError::UnexpectedReply(other.to_string())),
    }
}

/// Age in seconds of the database date found in a `VERSION` reply
/// (`ClamAV 1.0.1/26800/Tue Feb 21 08:22:56 2023`), relative to `now`.
pub fn parse_database_age(reply: &str, now: DateTime<Utc>) -> Result<f64, EngineError> {
    let reply = clean_reply(reply);
    let date_error = |message: String| EngineError::DatabaseDate {
        raw: reply.to_string(),
        message,
    };
    let (_, date) = reply
        .rsplit_once('/')
        .ok_or_else(|| date_error(String::from("no database date in reply")))?;
    let date = date.split_whitespace().collect::<Vec<_>>().join(" ");
    let date = NaiveDateTime::parse_from_str(&date, CLAMD_DATE_FORMAT)
        .map_err(|e| date_error(e.to_string()))?
        .and_utc();
    Ok((now - date).num_milliseconds() as f64 / 1000.0)
}
