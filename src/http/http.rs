use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use actix_multipart::Multipart;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use actix_web::body::MessageBody;
use actix_web::dev::{ServerHandle, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::header::{self, ContentType};
use actix_web::middleware::from_fn;
use actix_web::web::{Data, ServiceConfig};
use futures_util::{StreamExt, TryStreamExt};
use log::{info, warn};
use serde_json::json;
use tokio_util::sync::CancellationToken;
use crate::clamav::types::ScanByteStream;
use crate::config::structs::http_server_config::HttpServerConfig;
use crate::errors::structs::api_error::ApiError;
use crate::http::middleware::{http_service_recover, http_service_request_logging};
use crate::http::structs::http_service_data::ScanServiceData;
use crate::scan::structs::scan_part::ScanPart;
use crate::scan::types::ScanPartStream;
use crate::ssl::ssl::create_server_config_with_resolver;
use crate::ssl::structs::certificate_store::CertificateStore;
use crate::ssl::structs::dynamic_certificate_resolver::DynamicCertificateResolver;
use crate::stats::impls::stats_atomics::prom_generate_line;

pub fn http_service_routes(data: Arc<ScanServiceData>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(data.clone()));
        cfg.service(web::resource("/api/v1/scan").route(web::post().to(http_service_scan)));
        cfg.service(web::resource("/health").route(web::get().to(http_service_health)));
        cfg.service(web::resource("/metrics").route(web::get().to(http_service_metrics)));
        cfg.default_service(web::route().to(http_service_not_found));
    })
}

/// The application served on every listener: routes plus request logging
/// and error reporting middleware.
pub fn http_service_app(data: Arc<ScanServiceData>) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = ()
    >
>
{
    App::new()
        .wrap(from_fn(http_service_request_logging))
        .wrap(sentry_actix::Sentry::new())
        .configure(http_service_routes(data))
}

/// Builds the server; with a certificate store the listener speaks TLS and
/// resolves its certificate from the store on every handshake.
pub async fn http_service(
    addr: SocketAddr,
    data: Arc<ScanServiceData>,
    config: Arc<HttpServerConfig>,
    certificate_store: Option<Arc<CertificateStore>>
) -> Result<(ServerHandle, impl Future<Output=Result<(), std::io::Error>>), std::io::Error>
{
    let server = HttpServer::new(move || http_service_app(data.clone()))
        .keep_alive(Duration::from_secs(config.keep_alive.unwrap_or(60)))
        .client_request_timeout(Duration::from_secs(config.request_timeout.unwrap_or(30)))
        .client_disconnect_timeout(Duration::from_secs(config.disconnect_timeout.unwrap_or(30)));
    let server = match config.threads {
        Some(threads) if threads > 0 => server.workers(threads as usize),
        _ => server,
    };

    let server = match certificate_store {
        Some(store) => {
            info!("[HTTP] Starting server listener with SSL on {}", addr);
            let resolver = Arc::new(DynamicCertificateResolver::new(store));
            let tls_config = create_server_config_with_resolver(resolver).map_err(std::io::Error::other)?;
            server.bind_rustls_0_23((addr.ip(), addr.port()), tls_config)?
        }
        None => {
            info!("[HTTP] Starting server listener on {}", addr);
            server.bind((addr.ip(), addr.port()))?
        }
    };

    let server = server.disable_signals().run();
    Ok((server.handle(), server))
}

/// Lazily turns the multipart body into scan parts; nothing is read until
/// the orchestrator asks for the next part.
pub fn http_service_multipart_parts(multipart: Multipart) -> ScanPartStream
{
    Box::pin(multipart.map(|field| {
        let field = field.map_err(ApiError::request_body_read_error)?;
        let filename = field
            .content_disposition()
            .and_then(|disposition| disposition.get_filename())
            .unwrap_or_default()
            .to_string();
        let content: ScanByteStream = Box::pin(field.map_err(|e| std::io::Error::other(e.to_string())));
        Ok(ScanPart { filename, content })
    }))
}

/// Fires when the handler future is dropped (client gone) or once the scan
/// deadline passes.
fn http_service_request_token(deadline: Duration) -> (CancellationToken, tokio_util::sync::DropGuard)
{
    let cancel = CancellationToken::new();
    let timer = cancel.clone();
    actix_web::rt::spawn(async move {
        tokio::select! {
            _ = timer.cancelled() => {}
            _ = actix_web::rt::time::sleep(deadline) => {
                warn!("[SCAN] Scan deadline of {:?} exceeded, cancelling", deadline);
                timer.cancel();
            }
        }
    });
    let guard = cancel.clone().drop_guard();
    (cancel, guard)
}

#[tracing::instrument(level = "debug", skip_all)]
pub async fn http_service_scan(request: HttpRequest, payload: web::Payload, data: Data<Arc<ScanServiceData>>) -> Result<HttpResponse, ApiError>
{
    http_service_recover(async move {
        let content_type = request
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("")
            .to_string();

        let (cancel, _guard) = http_service_request_token(Duration::from_secs(data.http_server_config.scan_timeout));
        let parts = http_service_multipart_parts(Multipart::new(request.headers(), payload));
        let scans = data.orchestrator.handle(&content_type, parts, &cancel).await?;

        Ok(HttpResponse::Ok().content_type(ContentType::json()).json(scans))
    }).await
}

#[tracing::instrument(level = "debug", skip_all)]
pub async fn http_service_health(data: Data<Arc<ScanServiceData>>) -> Result<HttpResponse, ApiError>
{
    http_service_recover(async move {
        data.orchestrator.ping().await?;
        Ok(HttpResponse::Ok().finish())
    }).await
}

#[tracing::instrument(level = "debug", skip_all)]
pub async fn http_service_metrics(data: Data<Arc<ScanServiceData>>) -> Result<HttpResponse, ApiError>
{
    http_service_recover(async move {
        Ok(HttpResponse::Ok().content_type(ContentType::plaintext()).body(http_service_metrics_text(&data).await))
    }).await
}

async fn http_service_metrics_text(data: &ScanServiceData) -> String
{
    let mut string_output = data.stats.get_stats().to_prometheus();
    string_output.push_str(&data.stats.requests.to_prometheus());

    match data.orchestrator.database_age().await {
        Ok(age) => {
            string_output.push_str(&prom_generate_line("av_database_age_seconds", "gauge", None, age, true, Some("Age of the clamd signature database in seconds")));
        }
        Err(error) => {
            warn!("[METRICS] Could not read database age: {error}");
        }
    }

    if let Some(bundle) = data.certificate_store.as_ref().and_then(|store| store.current_bundle()) {
        string_output.push_str(&prom_generate_line("av_certificate_loaded_timestamp_seconds", "gauge", None, bundle.loaded_at.timestamp() as f64, true, Some("Time the served certificate was loaded")));
    }

    string_output
}

pub async fn http_service_not_found() -> HttpResponse
{
    HttpResponse::NotFound().content_type(ContentType::json()).json(json!({
        "status": "not found"
    }))
}
