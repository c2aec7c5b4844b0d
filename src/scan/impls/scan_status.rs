use crate::clamav::structs::scan_result::ScanResult;
use crate::scan::structs::scan_status::ScanStatus;

impl ScanStatus {
    pub fn new(filename: String, result: ScanResult) -> ScanStatus {
        ScanStatus {
            filename,
            infected: result.infected,
            virus: result.virus_description,
        }
    }

    /// Decodes a scan response body.
    pub fn parse_list(data: &[u8]) -> Result<Vec<ScanStatus>, serde_json::Error> {
        serde_json::from_slice(data)
    }
}
