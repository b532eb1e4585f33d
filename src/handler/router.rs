//! Request dispatch module
//!
//! Entry point for HTTP request processing. Method and path are not checked;
//! every request goes to the config file gateway.

use crate::config::AppState;
use crate::gateway::RequestParams;
use crate::http;
use crate::logger::AccessLogEntry;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let params = RequestParams::from_query(req.uri().query());

    let (response, body_bytes) = match state.gateway.handle(&params).await {
        Ok(content) => {
            let len = content.len();
            (http::build_yaml_response(content), len)
        }
        Err(err) => {
            let message = err.to_string();
            let len = message.len();
            (http::build_text_response(err.status(), message), len)
        }
    };

    if let Some(writer) = &state.access_log {
        let mut entry = AccessLogEntry::new(
            peer_addr.ip().to_string(),
            req.method().to_string(),
            req.uri().path().to_string(),
        )
        .with_query(req.uri().query());
        entry.http_version = version_label(req.version()).to_string();
        entry.status = response.status().as_u16();
        entry.body_bytes = body_bytes;
        entry.user_agent = req
            .headers()
            .get("user-agent")
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string);
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        writer.write_line(&entry.format(&state.access_log_format));
    }

    Ok(response)
}

fn version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "0.9",
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        Version::HTTP_3 => "3",
        _ => "1.1",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::gateway::{ConfigFileGateway, FixedSecret};
    use http_body_util::BodyExt;
    use hyper::StatusCode;

    fn test_state(dir: &std::path::Path, secret: Option<&str>) -> Arc<AppState> {
        let mut cfg = Config::load_from(dir.join("absent").to_str().unwrap()).unwrap();
        cfg.logging.access_log = false;
        let source = FixedSecret::new("ACCESS_TOKEN", secret.map(ToString::to_string));
        let gateway = ConfigFileGateway::new(Arc::new(source), dir);
        Arc::new(AppState::with_gateway(&cfg, gateway).unwrap())
    }

    async fn send(state: &Arc<AppState>, uri: &str) -> (StatusCode, Option<String>, String) {
        let req = Request::builder().uri(uri).body(()).unwrap();
        let peer: SocketAddr = "127.0.0.1:40000".parse().unwrap();
        let resp = handle_request(req, peer, Arc::clone(state)).await.unwrap();
        let status = resp.status();
        let content_type = resp
            .headers()
            .get("content-type")
            .map(|v| v.to_str().unwrap().to_string());
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        (status, content_type, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_success_response() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("example.yaml"), "key: value").unwrap();
        let state = test_state(dir.path(), Some("abc"));

        let (status, content_type, body) =
            send(&state, "/api?token=abc&file=example.yaml").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("text/yaml; charset=utf-8"));
        assert_eq!(body, "key: value");
    }

    #[tokio::test]
    async fn test_error_responses() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path(), Some("abc"));

        let cases = [
            ("/", StatusCode::UNAUTHORIZED, "Unauthorized: Invalid or missing token."),
            ("/?token=abc", StatusCode::BAD_REQUEST, "Bad Request: Invalid file name."),
            (
                "/?token=abc&file=..%2F..%2Fetc%2Fpasswd.yaml",
                StatusCode::BAD_REQUEST,
                "Bad Request: Invalid file name.",
            ),
            ("/?token=abc&file=none.yaml", StatusCode::NOT_FOUND, "Not Found"),
        ];
        for (uri, expected_status, expected_body) in cases {
            let (status, content_type, body) = send(&state, uri).await;
            assert_eq!(status, expected_status, "{uri}");
            assert_eq!(body, expected_body, "{uri}");
            assert_eq!(content_type.as_deref(), Some("text/plain; charset=utf-8"));
        }
    }

    #[tokio::test]
    async fn test_unset_secret() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path(), None);
        let (status, _, body) = send(&state, "/?token=abc&file=a.yaml").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "Server configuration error: ACCESS_TOKEN is not set.");
    }

    #[tokio::test]
    async fn test_path_and_method_ignored() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.yaml"), "a: 1").unwrap();
        let state = test_state(dir.path(), Some("abc"));

        let req = Request::builder()
            .method("POST")
            .uri("/anything/else?file=a.yaml&token=abc")
            .body(())
            .unwrap();
        let peer: SocketAddr = "[::1]:40000".parse().unwrap();
        let resp = handle_request(req, peer, state).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[test]
    fn test_version_label() {
        assert_eq!(version_label(Version::HTTP_11), "1.1");
        assert_eq!(version_label(Version::HTTP_10), "1.0");
        assert_eq!(version_label(Version::HTTP_2), "2");
    }
}
