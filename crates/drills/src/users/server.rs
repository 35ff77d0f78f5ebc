use crate::prelude::{eprintln, *};
use drills_core::users::UserStore;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};

pub async fn run_server(options: super::cli::ServeOptions, global: crate::Global) -> Result<()> {
    let addr = format!("{}:{}", options.host, options.port);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let store = Arc::new(RwLock::new(UserStore::seeded()));
    let app_router = super::routes::router(store).layer(cors);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    log::info!("Users API listening on http://{}", addr);
    if global.verbose {
        eprintln!("Users API listening on http://{}", addr);
        eprintln!("Users endpoint: http://{}/users/", addr);
    }

    axum::serve(listener, app_router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    log::info!("Users API stopped");

    Ok(())
}

pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for ctrl-c: {e}");
        // Without a signal handler, keep serving until the process is killed.
        std::future::pending::<()>().await;
    }
}
