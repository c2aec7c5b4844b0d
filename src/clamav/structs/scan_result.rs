#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    /// True when the engine found a signature in the stream.
    pub infected: bool,
    /// Name of the found signature, set only when `infected`.
    pub virus_description: Option<String>,
}
