use crate::errors::structs::api_error::ApiError;
use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{
    HttpResponse,
    ResponseError
};
use std::fmt;

pub const REQUEST_BODY_READ_ERROR: &str = "AV-1500";
pub const UNEXPECTED_ERROR: &str = "AV-1900";
pub const CONTENT_TYPE_UNSUPPORTED_ERROR: &str = "AV-5000";
pub const FILENAME_NOT_SPECIFIED_ERROR: &str = "AV-5001";
pub const CLAMD_PING_ERROR: &str = "AV-7100";
pub const CLAMD_SCAN_ERROR: &str = "AV-7101";

impl ApiError {
    fn new(code: &str, status: u16, reason: &str, details: Option<String>) -> ApiError {
        ApiError {
            code: code.to_string(),
            status,
            reason: reason.to_string(),
            details,
        }
    }

    pub fn request_body_read_error(error: impl fmt::Display) -> ApiError {
        Self::new(REQUEST_BODY_READ_ERROR, 500, "failed to read request body", Some(error.to_string()))
    }

    pub fn unexpected_error(error: impl fmt::Display) -> ApiError {
        Self::new(UNEXPECTED_ERROR, 500, "unexpected error", Some(error.to_string()))
    }

    pub fn content_type_unsupported_error(unsupported: &str) -> ApiError {
        let unsupported = if unsupported.is_empty() { "empty" } else { unsupported };
        Self::new(
            CONTENT_TYPE_UNSUPPORTED_ERROR,
            415,
            "unsupported content type",
            Some(format!("{unsupported} content-type not supported")),
        )
    }

    pub fn filename_not_specified_error() -> ApiError {
        Self::new(FILENAME_NOT_SPECIFIED_ERROR, 415, "filename not specified", None)
    }

    pub fn clamd_ping_error(error: impl fmt::Display) -> ApiError {
        Self::new(CLAMD_PING_ERROR, 500, "clamd ping error", Some(error.to_string()))
    }

    pub fn clamd_scan_error(error: impl fmt::Display) -> ApiError {
        Self::new(CLAMD_SCAN_ERROR, 500, "clamd scan error", Some(error.to_string()))
    }

    /// Decodes an error from a JSON response body.
    pub fn parse(data: &[u8]) -> Result<ApiError, serde_json::Error> {
        serde_json::from_slice(data)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        log::error!(
            "[HTTP] Request error - code: {} status: {} reason: {} details: {}",
            self.code,
            self.status,
            self.reason,
            self.details.as_deref().unwrap_or("")
        );
        HttpResponse::build(self.status_code())
            .content_type(ContentType::json())
            .json(self)
    }
}
