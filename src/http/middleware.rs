use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Instant;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::middleware::Next;
use actix_web::web::Data;
use actix_web::HttpResponse;
use futures_util::FutureExt;
use log::{debug, error, info};
use uuid::Uuid;
use crate::errors::structs::api_error::ApiError;
use crate::http::structs::http_service_data::ScanServiceData;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Logs every request with a generated id, echoes the id back and records
/// the request under its handler and status code.
pub async fn http_service_request_logging<B: MessageBody + 'static>(request: ServiceRequest, next: Next<B>) -> Result<ServiceResponse<B>, actix_web::Error>
{
    let start = Instant::now();
    let request_id = Uuid::new_v4().to_string();
    let method = request.method().to_string();
    let path = request.path().to_string();
    debug!("[HTTP] Request received - id: {} method: {} path: {}", request_id, method, path);

    let mut response = next.call(request).await?;
    let status = response.status();
    let elapsed = start.elapsed();
    if status.as_u16() >= 400 {
        error!("[HTTP] Request completed with error - id: {} method: {} path: {} status: {} duration: {:?}", request_id, method, path, status.as_u16(), elapsed);
    } else {
        info!("[HTTP] Request completed - id: {} method: {} path: {} status: {} duration: {:?}", request_id, method, path, status.as_u16(), elapsed);
    }

    let handler = http_service_handler_name(response.request().match_pattern().as_deref());
    if let Some(data) = response.request().app_data::<Data<Arc<ScanServiceData>>>() {
        data.stats.requests.observe(handler, status.as_u16(), elapsed);
    }

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
    }
    Ok(response)
}

/// Metric label of the route that answered.
pub fn http_service_handler_name(pattern: Option<&str>) -> &'static str
{
    match pattern {
        Some("/api/v1/scan") => "scan",
        Some("/health") => "health",
        Some("/metrics") => "metrics",
        _ => "not_found",
    }
}

/// Runs a handler body and answers `AV-1900` when it panics. Wraps the
/// handler future only, so the request itself is never held across routing.
pub async fn http_service_recover<F>(handler: F) -> Result<HttpResponse, ApiError>
where
    F: Future<Output = Result<HttpResponse, ApiError>>
{
    match AssertUnwindSafe(handler).catch_unwind().await {
        Ok(result) => result,
        Err(panic) => {
            let message = panic_message(panic.as_ref());
            error!("[HTTP] Handler panicked: {}", message);
            Err(ApiError::unexpected_error(message))
        }
    }
}

pub fn panic_message(panic: &(dyn Any + Send)) -> String
{
    if let Some(message) = panic.downcast_ref::<&str>() {
        return message.to_string();
    }
    if let Some(message) = panic.downcast_ref::<String>() {
        return message.clone();
    }
    String::from("handler panicked")
}
