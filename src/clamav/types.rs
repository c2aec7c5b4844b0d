use actix_web::web::Bytes;
use futures_util::stream::LocalBoxStream;

/// Content of one uploaded file, consumed exactly once by the engine.
pub type ScanByteStream = LocalBoxStream<'static, Result<Bytes, std::io::Error>>;
