use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use std::{future::Future, sync::Arc};

use crate::{dashboard, entries, health};
use engine::Ledger;

#[derive(Clone)]
pub struct ServerState {
    pub ledger: Arc<Ledger>,
}

/// Build the API router around `ledger`.
///
/// CORS is fully open: any origin, method and header.
pub fn router(ledger: Arc<Ledger>) -> Router {
    let state = ServerState { ledger };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(health::get))
        .route("/api/entries", post(entries::create).get(entries::list))
        .route("/api/entries/voice", post(entries::create_voice))
        .route("/api/dashboard/daily", get(dashboard::daily))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Serve on `listener` until `shutdown` resolves.
pub async fn run_with_listener<F>(
    ledger: Arc<Ledger>,
    listener: tokio::net::TcpListener,
    shutdown: F,
) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(ledger))
        .with_graceful_shutdown(shutdown)
        .await
}

pub fn spawn_with_listener(
    ledger: Arc<Ledger>,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(ledger, listener, std::future::pending()).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
