use crate::clamav::types::ScanByteStream;

pub struct ScanPart {
    pub filename: String,
    pub content: ScanByteStream,
}
