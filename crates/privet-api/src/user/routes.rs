use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post, put},
};
use serde_json::Value;

use super::{model::RegisterRequest, service};
use crate::{
    ApiState,
    auth::AuthUser,
    error::ApiError,
    metrics::record_auth_event,
    middleware::rate_limit::{self, apply_rate_limit},
    words::{model::ProgressResponse, service as words_service},
};

pub fn routes() -> Router<ApiState> {
    let registration = apply_rate_limit(
        Router::new().route("/users", post(register)),
        rate_limit::AUTH,
    );

    let profile = apply_rate_limit(
        Router::new()
            .route("/users/me", get(me))
            .route("/users/progress", get(progress))
            .route("/users/reset", put(reset_session)),
        rate_limit::GENERAL,
    );

    Router::new().merge(registration).merge(profile)
}

async fn register(
    State(state): State<ApiState>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let request = RegisterRequest::from_json(&body)?;
    let user = service::register(&state.pool, request, state.bcrypt_cost).await?;

    record_auth_event("register", true);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, "/api/users/me".to_string())],
        Json(user),
    ))
}

async fn me(
    auth_user: AuthUser,
    State(state): State<ApiState>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(service::profile(&state.pool, auth_user.user_id).await?))
}

async fn progress(
    auth_user: AuthUser,
    State(state): State<ApiState>,
) -> Result<Json<ProgressResponse>, ApiError> {
    let entries = words_service::progress(&state.pool, auth_user.user_id).await?;
    Ok(Json(entries.into()))
}

async fn reset_session(
    auth_user: AuthUser,
    State(state): State<ApiState>,
) -> Result<StatusCode, ApiError> {
    words_service::reset(&state.pool, auth_user.user_id).await?;
    Ok(StatusCode::OK)
}
