use crate::errors::structs::api_error::ApiError;
use crate::scan::structs::scan_part::ScanPart;
use futures_util::stream::LocalBoxStream;

/// Parts of one upload in arrival order. Framing errors are already
/// translated to an [`ApiError`].
pub type ScanPartStream = LocalBoxStream<'static, Result<ScanPart, ApiError>>;
