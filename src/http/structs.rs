/// State shared by all HTTP handlers.
pub mod http_service_data;
