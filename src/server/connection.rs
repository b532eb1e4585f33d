// Connection handling module
// Serves a single accepted TCP connection on its own task

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpStream;

use crate::config::AppState;
use crate::handler;
use crate::logger;

/// Handle a single connection in a spawned task.
///
/// This function:
/// 1. Wraps the TCP stream in `TokioIo`
/// 2. Configures HTTP/1.1 keep-alive from the performance settings
/// 3. Serves the connection with the request handler
/// 4. Bounds the whole connection by `max(read_timeout, write_timeout)`
///
/// # Arguments
///
/// * `stream` - The TCP stream to handle
/// * `peer_addr` - The peer's socket address, recorded in the access log
/// * `state` - Shared application state
pub fn handle_connection(stream: TcpStream, peer_addr: SocketAddr, state: Arc<AppState>) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let keep_alive = state.performance.keep_alive_timeout > 0;
        let timeout_duration = Duration::from_secs(state.performance.connection_timeout_secs());

        let mut builder = http1::Builder::new();
        builder.keep_alive(keep_alive);

        let conn = builder.serve_connection(
            io,
            service_fn(move |req| handler::handle_request(req, peer_addr, Arc::clone(&state))),
        );

        match tokio::time::timeout(timeout_duration, conn).await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => logger::log_connection_error(&err),
            Err(_) => {
                tracing::debug!(
                    "Connection from {peer_addr} closed after {} second timeout",
                    timeout_duration.as_secs()
                );
            }
        }
    });
}
