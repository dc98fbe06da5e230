//! Middleware for logging requests and responses.

use axum::{body::Bytes, extract::Request, middleware::Next, response::Response};

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If a body is longer than [LOG_BODY_LENGTH_LIMIT] bytes, it is
/// truncated and logged in full at the `debug` level.
///
/// Bodies are buffered as raw bytes and restored untouched so that binary
/// responses such as images pass through unmodified.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (headers, body_bytes) = extract_header_and_body_from_request(request).await;
    log_parts("Received request", &format!("{headers:#?}"), &body_bytes);

    let request = Request::from_parts(headers, body_bytes.into());
    let response = next.run(request).await;

    let (headers, body_bytes) = extract_header_and_body_from_response(response).await;
    log_parts("Sending response", &format!("{headers:#?}"), &body_bytes);

    Response::from_parts(headers, body_bytes.into())
}

async fn extract_header_and_body_from_request(
    request: Request,
) -> (axum::http::request::Parts, Bytes) {
    let (headers, body) = request.into_parts();
    let body_bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();

    (headers, body_bytes)
}

async fn extract_header_and_body_from_response(
    response: Response,
) -> (axum::http::response::Parts, Bytes) {
    let (headers, body) = response.into_parts();
    let body_bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();

    (headers, body_bytes)
}

/// The number of body bytes to include in info-level request/response logs.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

fn log_parts(prefix: &str, headers: &str, body: &Bytes) {
    let body_text = String::from_utf8_lossy(body);

    if body.len() > LOG_BODY_LENGTH_LIMIT {
        let preview: String = body_text.chars().take(LOG_BODY_LENGTH_LIMIT).collect();
        tracing::info!("{prefix}: {headers}\nbody: {preview}...");
        tracing::debug!("Full body: {body_text:?}");
    } else {
        tracing::info!("{prefix}: {headers}\nbody: {body_text:?}");
    }
}
