use crate::clamav::enums::engine_error::EngineError;
use crate::clamav::traits::scan_engine::ScanEngine;
use crate::errors::structs::api_error::ApiError;
use crate::scan::structs::scan_orchestrator::ScanOrchestrator;
use crate::scan::structs::scan_status::ScanStatus;
use crate::scan::types::ScanPartStream;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;
use futures_util::StreamExt;
use log::{debug, error, warn};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

pub const MULTIPART_FORM_DATA: &str = "multipart/form-data";

impl ScanOrchestrator {
    pub fn new(engine: Arc<dyn ScanEngine>, stats: Arc<StatsAtomics>) -> ScanOrchestrator {
        ScanOrchestrator { engine, stats }
    }

    pub fn validate_content_type(content_type: &str) -> Result<(), ApiError> {
        if content_type.contains(MULTIPART_FORM_DATA) {
            Ok(())
        } else {
            Err(ApiError::content_type_unsupported_error(content_type))
        }
    }

    /// Scans every part of an upload in arrival order.
    ///
    /// Waiting for the next part and scanning the current one both give up
    /// as soon as `cancel` fires.
    pub async fn handle(&self, content_type: &str, mut parts: ScanPartStream, cancel: &CancellationToken) -> Result<Vec<ScanStatus>, ApiError> {
        Self::validate_content_type(content_type)?;

        let mut scans = Vec::new();
        loop {
            let part = tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    return Err(self.scan_failed(EngineError::Cancelled(String::from("request cancelled"))));
                }
                part = parts.next() => part,
            };
            let Some(part) = part else { break };
            let part = part?;

            if part.filename.is_empty() {
                return Err(ApiError::filename_not_specified_error());
            }

            let result = match self.engine.scan_stream(part.content, cancel).await {
                Ok(result) => result,
                Err(error) => return Err(self.scan_failed(error)),
            };
            self.stats.update_stats(StatsEvent::FilesScanned, 1);

            if result.infected {
                warn!(
                    "[SCAN] Virus detected - virus: {} filename: {}",
                    result.virus_description.as_deref().unwrap_or(""),
                    part.filename
                );
                self.stats.update_stats(StatsEvent::VirusesFound, 1);
            } else {
                debug!("[SCAN] Clean - filename: {}", part.filename);
            }
            scans.push(ScanStatus::new(part.filename, result));
        }
        Ok(scans)
    }

    pub async fn ping(&self) -> Result<(), ApiError> {
        self.engine.ping().await.map_err(|error| {
            self.stats.update_stats(StatsEvent::PingFailures, 1);
            ApiError::clamd_ping_error(error)
        })
    }

    pub async fn database_age(&self) -> Result<f64, EngineError> {
        self.engine.database_age().await
    }

    fn scan_failed(&self, error: EngineError) -> ApiError {
        error!("[SCAN] Scan aborted: {error}");
        self.stats.update_stats(StatsEvent::ScanFailures, 1);
        ApiError::clamd_scan_error(error)
    }
}
