//! Access logging middleware.
//!
//! Emits one structured line per request: method, path, response status,
//! response body size, elapsed time, and the submitted payload for
//! body-carrying requests. Purely observational: the request passes through
//! unchanged. Payload capture is bounded; a body whose declared length
//! exceeds the cap (or is unknown) is forwarded unbuffered and logged as
//! elided.

use std::time::Instant;

use axum::body::Body;
use axum::extract::Request;
use axum::http::{header, Method};
use axum::middleware::Next;
use axum::response::Response;

/// Upper bound on how much of a request body is buffered for logging.
const PAYLOAD_CAP: usize = 1024 * 1024;

/// Declared request body length, when the client sent one.
fn declared_length(request: &Request) -> Option<usize> {
    request
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
}

pub async fn access_log(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let wants_payload = matches!(method, Method::POST | Method::PUT);
    let (request, payload) = if wants_payload {
        match declared_length(&request) {
            Some(len) if len <= PAYLOAD_CAP => {
                let (parts, body) = request.into_parts();
                match axum::body::to_bytes(body, PAYLOAD_CAP).await {
                    Ok(bytes) => {
                        let payload = String::from_utf8_lossy(&bytes).into_owned();
                        (Request::from_parts(parts, Body::from(bytes)), Some(payload))
                    }
                    // Transport failure mid-read; there is no body left to
                    // replay, and the handler's parse error reports it.
                    Err(_) => (Request::from_parts(parts, Body::empty()), None),
                }
            }
            // Oversized or unsized body: hand it through untouched.
            _ => (request, Some("[payload elided]".to_string())),
        }
    } else {
        (request, None)
    };

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let size = response
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();
    let elapsed_ms = start.elapsed().as_millis() as u64;

    match payload {
        Some(payload) => tracing::info!(
            method = %method,
            path = %path,
            status,
            size = %size,
            elapsed_ms,
            payload = %payload,
            "request"
        ),
        None => tracing::info!(
            method = %method,
            path = %path,
            status,
            size = %size,
            elapsed_ms,
            "request"
        ),
    }

    response
}
