pub mod api;
pub mod routes;

use thiserror::Error;

use crate::parallel::WorkerPool;
use crate::server::routes::{router, AppState};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to start runtime: {0}")]
    Runtime(#[source] std::io::Error),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("server stopped: {0}")]
    Serve(#[source] std::io::Error),
}

/// Serves the HTTP API until the process is stopped.
pub fn run_server(bind_addr: &str, pool: WorkerPool) -> Result<(), ServerError> {
    let runtime = tokio::runtime::Runtime::new().map_err(ServerError::Runtime)?;
    runtime.block_on(serve(bind_addr, pool))
}

pub async fn serve(bind_addr: &str, pool: WorkerPool) -> Result<(), ServerError> {
    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: bind_addr.to_string(),
            source,
        })?;
    tracing::info!(addr = %bind_addr, "lysk-cp server listening");
    axum::serve(listener, router(AppState { pool }))
        .await
        .map_err(ServerError::Serve)
}
