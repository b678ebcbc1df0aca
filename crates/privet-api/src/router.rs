use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde_json::json;

use crate::{auth, state::ApiState, user, words};

pub fn router() -> Router<ApiState> {
    let api = Router::new()
        .merge(user::routes())
        .merge(auth::routes())
        .merge(words::routes());

    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(ready))
        .nest("/api", api)
        .fallback(handler_404)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

/// Readiness: the database must answer
async fn ready(State(state): State<ApiState>) -> StatusCode {
    match privet_db::ping(&state.pool).await {
        Ok(()) => StatusCode::OK,
        Err(err) => {
            tracing::warn!(error = %err, "readiness check failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

async fn handler_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "The requested resource was not found" })),
    )
}
