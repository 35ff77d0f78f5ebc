use super::token::TokenKeys;
use crate::prelude::{eprintln, *};
use axum::http::{header, HeaderValue, Method};
use std::time::Duration;
use tower_http::cors::CorsLayer;

pub async fn run_server(options: super::cli::ServeOptions, global: crate::Global) -> Result<()> {
    let addr = format!("{}:{}", options.host, options.port);

    let origin = options
        .cors_origin
        .parse::<HeaderValue>()
        .map_err(|e| eyre!("Invalid CORS origin {:?}: {}", options.cors_origin, e))?;

    // Credentialed CORS needs explicit origins, methods and headers.
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    let keys = TokenKeys::new(&options.secret, Duration::from_secs(options.token_ttl));
    let app_router = super::routes::router(keys).layer(cors);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    log::info!("Auth API listening on http://{}", addr);
    if global.verbose {
        eprintln!("Auth API listening on http://{}", addr);
        eprintln!("Allowed origin: {}", options.cors_origin);
    }

    axum::serve(listener, app_router)
        .with_graceful_shutdown(crate::users::shutdown_signal())
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    log::info!("Auth API stopped");

    Ok(())
}
