use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::post,
};
use axum_extra::extract::PrivateCookieJar;
use serde::Serialize;
use serde_json::Value;

use super::{cookies, jwt, middleware::AuthUser, service};
use crate::{
    ApiState,
    error::ApiError,
    metrics::record_auth_event,
    middleware::rate_limit::{self, apply_rate_limit},
    validation::required_strings,
};

pub fn routes() -> Router<ApiState> {
    // Credential checks get the strict limiter
    let login_routes = apply_rate_limit(
        Router::new().route("/auth/login", post(login)),
        rate_limit::AUTH,
    );

    let session_routes = apply_rate_limit(
        Router::new()
            .route("/auth/refresh", post(refresh))
            .route("/auth/logout", post(logout)),
        rate_limit::GENERAL,
    );

    Router::new().merge(login_routes).merge(session_routes)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub auth_token: String,
}

fn issue_token(
    state: &ApiState,
    jar: PrivateCookieJar,
    user_id: uuid::Uuid,
    username: String,
) -> Result<(PrivateCookieJar, Json<TokenResponse>), ApiError> {
    let token = jwt::generate_jwt_token(
        user_id,
        username,
        &state.auth.jwt_secret,
        state.auth.jwt_expiry_hours,
    )?;

    let cookie = cookies::create_auth_cookie(
        token.clone(),
        state.environment,
        state.auth.jwt_expiry_hours,
    );

    Ok((jar.add(cookie), Json(TokenResponse { auth_token: token })))
}

async fn login(
    State(state): State<ApiState>,
    jar: PrivateCookieJar,
    Json(body): Json<Value>,
) -> Result<(PrivateCookieJar, Json<TokenResponse>), ApiError> {
    let [username, password] = required_strings(&body, ["username", "password"])?;

    let credentials = match service::authenticate(&state.pool, username, password).await {
        Ok(credentials) => credentials,
        Err(err) => {
            record_auth_event("login", false);
            tracing::info!(%username, "login rejected");
            return Err(err);
        }
    };

    record_auth_event("login", true);
    tracing::info!(user_id = %credentials.id, "user logged in");

    issue_token(&state, jar, credentials.id, credentials.username)
}

async fn refresh(
    auth_user: AuthUser,
    State(state): State<ApiState>,
    jar: PrivateCookieJar,
) -> Result<(PrivateCookieJar, Json<TokenResponse>), ApiError> {
    record_auth_event("refresh", true);
    issue_token(&state, jar, auth_user.user_id, auth_user.username)
}

async fn logout(jar: PrivateCookieJar) -> (PrivateCookieJar, StatusCode) {
    record_auth_event("logout", true);
    (jar.remove(cookies::auth_cookie_removal()), StatusCode::NO_CONTENT)
}
