use axum::{
    Router,
    routing::{get, post},
};

use std::sync::Arc;

use crate::orders;
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
}

/// Routes of the lemonade stand API.
pub fn router(engine: Arc<Engine>) -> Router {
    Router::new()
        .route("/api/orders/process", post(orders::process))
        .route("/api/orders/report", get(orders::report))
        .with_state(ServerState { engine })
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(Arc::new(engine))).await
}
