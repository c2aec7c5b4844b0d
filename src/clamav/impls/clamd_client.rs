use crate::clamav::clamav::{
    parse_database_age,
    parse_ping_reply,
    parse_scan_reply,
    INSTREAM_COMMAND,
    PING_COMMAND,
    VERSION_COMMAND
};
use crate::clamav::enums::engine_error::EngineError;
use crate::clamav::structs::clamd_client::ClamdClient;
use crate::clamav::structs::scan_result::ScanResult;
use crate::clamav::traits::scan_engine::ScanEngine;
use crate::clamav::types::ScanByteStream;
use crate::config::structs::clamd_config::ClamdConfig;
use async_trait::async_trait;
use futures_util::StreamExt;
use log::debug;
use std::time::Duration;
use tokio::io::{
    AsyncBufReadExt,
    AsyncWriteExt,
    BufReader
};
use tokio::net::TcpStream;
use tokio_util::sync::CancellationToken;

impl ClamdClient {
    pub fn new(config: &ClamdConfig) -> ClamdClient {
        ClamdClient {
            address: config.address.clone(),
            connect_timeout: Duration::from_secs(config.connect_timeout),
            read_timeout: Duration::from_secs(config.read_timeout),
            chunk_size: config.chunk_size.max(1),
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    async fn connect(&self) -> Result<TcpStream, EngineError> {
        match tokio::time::timeout(self.connect_timeout, TcpStream::connect(&self.address)).await {
            Ok(Ok(stream)) => Ok(stream),
            Ok(Err(error)) => Err(EngineError::ConnectionFailed {
                address: self.address.clone(),
                message: error.to_string(),
            }),
            Err(_) => Err(EngineError::ConnectionFailed {
                address: self.address.clone(),
                message: format!("timed out after {:?}", self.connect_timeout),
            }),
        }
    }

    async fn read_reply(&self, stream: TcpStream) -> Result<String, EngineError> {
        let mut reader = BufReader::new(stream);
        let mut reply = Vec::new();
        match tokio::time::timeout(self.read_timeout, reader.read_until(b'\0', &mut reply)).await {
            Ok(Ok(_)) => Ok(String::from_utf8_lossy(&reply).into_owned()),
            Ok(Err(error)) => Err(EngineError::Io(error)),
            Err(_) => Err(EngineError::Timeout(self.read_timeout)),
        }
    }

    async fn command(&self, command: &[u8]) -> Result<String, EngineError> {
        let mut stream = self.connect().await?;
        stream.write_all(command).await?;
        stream.flush().await?;
        self.read_reply(stream).await
    }

    async fn instream(&self, mut content: ScanByteStream) -> Result<String, EngineError> {
        let mut stream = self.connect().await?;
        stream.write_all(INSTREAM_COMMAND).await?;
        let mut sent = 0usize;
        while let Some(chunk) = content.next().await {
            let chunk = chunk.map_err(|e| EngineError::Source(e.to_string()))?;
            for piece in chunk.chunks(self.chunk_size) {
                stream.write_all(&(piece.len() as u32).to_be_bytes()).await?;
                stream.write_all(piece).await?;
                sent += piece.len();
            }
        }
        stream.write_all(&0u32.to_be_bytes()).await?;
        stream.flush().await?;
        debug!("[CLAMD] Streamed {} bytes to {}", sent, self.address);
        self.read_reply(stream).await
    }
}

#[async_trait(?Send)]
impl ScanEngine for ClamdClient {
    async fn scan_stream(&self, content: ScanByteStream, cancel: &CancellationToken) -> Result<ScanResult, EngineError> {
        // Losing the race drops the session future, which closes the socket.
        let reply = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                return Err(EngineError::Cancelled(String::from("request cancelled")));
            }
            reply = self.instream(content) => reply?,
        };
        parse_scan_reply(&reply)
    }

    async fn ping(&self) -> Result<(), EngineError> {
        let reply = self.command(PING_COMMAND).await?;
        parse_ping_reply(&reply)
    }

    async fn database_age(&self) -> Result<f64, EngineError> {
        let reply = self.command(VERSION_COMMAND).await?;
        parse_database_age(&reply, chrono::Utc::now())
    }
}
