// Server loop module
// Accepts connections until the shutdown future resolves

use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

use super::connection::handle_connection;
use crate::config::AppState;
use crate::logger;

/// Accept connections and serve each on its own task.
///
/// Returns once `shutdown` completes. Connections already accepted keep
/// running on their tasks.
pub async fn serve<S>(listener: TcpListener, state: Arc<AppState>, shutdown: S)
where
    S: Future<Output = ()>,
{
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        tracing::trace!("Accepted connection from {peer_addr}");
                        handle_connection(stream, peer_addr, Arc::clone(&state));
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = &mut shutdown => {
                logger::log_server_stop();
                break;
            }
        }
    }
}
