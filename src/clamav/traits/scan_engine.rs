use crate::clamav::enums::engine_error::EngineError;
use crate::clamav::structs::scan_result::ScanResult;
use crate::clamav::types::ScanByteStream;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Contract of the external antivirus engine.
///
/// Futures are not required to be `Send`: request content comes straight
/// from the actix-web payload, which lives on the worker that received it.
#[async_trait(?Send)]
pub trait ScanEngine: Send + Sync {
    /// Scans `content` until it ends. Must give up with
    /// [`EngineError::Cancelled`] as soon as `cancel` fires, releasing the
    /// engine session.
    async fn scan_stream(&self, content: ScanByteStream, cancel: &CancellationToken) -> Result<ScanResult, EngineError>;

    /// Checks the engine is alive.
    async fn ping(&self) -> Result<(), EngineError>;

    /// Age of the engine's signature database in seconds.
    async fn database_age(&self) -> Result<f64, EngineError>;
}
