//! HTTP response building module
//!
//! Builders for the gateway's two response shapes, decoupled from validation logic.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

pub const YAML_CONTENT_TYPE: &str = "text/yaml; charset=utf-8";
pub const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Build 200 response carrying YAML file content
pub fn build_yaml_response(content: String) -> Response<Full<Bytes>> {
    build_response(StatusCode::OK, YAML_CONTENT_TYPE, content)
}

/// Build plain-text response for an error status
pub fn build_text_response(status: StatusCode, message: String) -> Response<Full<Bytes>> {
    build_response(status, TEXT_CONTENT_TYPE, message)
}

fn build_response(
    status: StatusCode,
    content_type: &str,
    body: String,
) -> Response<Full<Bytes>> {
    let content_length = body.len();

    Response::builder()
        .status(status)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|e| {
            log_build_error(status, &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Log response build error
fn log_build_error(status: StatusCode, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
