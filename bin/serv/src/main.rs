use std::net::SocketAddr;

use anyhow::Context;
use axum::{Router, middleware, routing::get};
use privet_api::{
    config::ApiConfig,
    middleware::{cors::create_cors_layer, request_id, security_headers},
    state::ApiState,
};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::from_env().context("failed to load configuration")?;

    privet_api::tracing::init_tracing(config.env);

    let metrics_handle = privet_api::metrics::init_metrics()?;

    let pool = privet_db::create_pool(&config.database_url, config.db_max_connections).await?;
    privet_db::ensure_db_and_migrate(&config.database_url, &pool).await?;
    tracing::info!("Database migrations applied");

    let state = ApiState::new(&config, pool)?;

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let metrics_app = Router::new()
        .route("/metrics", get(privet_api::metrics::metrics_handler))
        .with_state(metrics_handle);

    let app = privet_api::router::router()
        .with_state(state)
        .merge(metrics_app)
        .layer(create_cors_layer(config.parsed_allowed_origins()))
        .layer(trace_layer)
        .layer(middleware::from_fn(privet_api::metrics::track_metrics))
        .layer(middleware::from_fn(request_id::request_id_middleware));

    let app = security_headers::apply_security_headers(app, config.env);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(environment = ?config.env, %addr, "Server listening");

    // Peer addresses feed the rate limiter when no forwarding header is present
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
