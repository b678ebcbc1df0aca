use axum::{Json, Router, extract::State, routing::get};
use serde_json::Value;

use super::{
    model::{AnswerResponse, QuestionResponse},
    service,
};
use crate::{
    ApiState,
    auth::AuthUser,
    error::ApiError,
    metrics::record_answer,
    middleware::rate_limit::{self, apply_rate_limit},
    validation::required_strings,
};

pub fn routes() -> Router<ApiState> {
    apply_rate_limit(
        Router::new().route("/word", get(next_question).post(submit_answer)),
        rate_limit::GENERAL,
    )
}

async fn next_question(
    auth_user: AuthUser,
    State(state): State<ApiState>,
) -> Result<Json<QuestionResponse>, ApiError> {
    let question = service::next_question(&state.pool, auth_user.user_id).await?;
    Ok(Json(question.into()))
}

async fn submit_answer(
    auth_user: AuthUser,
    State(state): State<ApiState>,
    Json(body): Json<Value>,
) -> Result<Json<AnswerResponse>, ApiError> {
    let [answer] = required_strings(&body, ["answer"])?;

    let outcome = service::answer(&state.pool, auth_user.user_id, answer).await?;
    record_answer(outcome.correct);

    Ok(Json(outcome.into()))
}
