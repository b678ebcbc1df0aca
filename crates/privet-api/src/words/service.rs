//! Ring operations for one user.
//!
//! Each call runs in its own transaction and starts by locking the user's
//! row, so concurrent requests from the same user apply one after the other
//! and never lose an update to the ring.

use privet_db::repositories::{question as question_repo, user as user_repo, word as word_repo};
use privet_srs::{
    AnswerOutcome, DueQuestion, ProgressEntry, QuestionRing, WordCatalog, due_question, report,
    reset_session, submit_answer,
};
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use super::store;
use crate::error::ApiError;

async fn load_locked(
    tx: &mut Transaction<'_, Postgres>,
    user_id: Uuid,
) -> Result<(QuestionRing, WordCatalog), ApiError> {
    let head = user_repo::lock_head(&mut **tx, user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    let rows = question_repo::load_ring(&mut **tx, user_id).await?;
    let words = word_repo::list_words_for_user(&mut **tx, user_id).await?;

    let ring = store::ring_from_rows(rows, head)?;
    Ok((ring, store::catalog_from_rows(words)))
}

async fn save(
    tx: &mut Transaction<'_, Postgres>,
    user_id: Uuid,
    ring: &QuestionRing,
) -> Result<(), ApiError> {
    question_repo::save_ring(&mut **tx, user_id, &store::ring_to_rows(ring)?).await?;
    user_repo::update_head(&mut **tx, user_id, store::to_position(ring.head())?).await?;
    Ok(())
}

pub async fn next_question(pool: &PgPool, user_id: Uuid) -> Result<DueQuestion, ApiError> {
    let mut tx = pool.begin().await?;
    let (ring, catalog) = load_locked(&mut tx, user_id).await?;
    let question = due_question(&ring, &catalog)?;
    tx.commit().await?;

    Ok(question)
}

pub async fn answer(
    pool: &PgPool,
    user_id: Uuid,
    raw_answer: &str,
) -> Result<AnswerOutcome, ApiError> {
    let mut tx = pool.begin().await?;
    let (mut ring, catalog) = load_locked(&mut tx, user_id).await?;
    let answered = ring.head();

    let outcome = submit_answer(&mut ring, &catalog, raw_answer)?;
    save(&mut tx, user_id, &ring).await?;
    tx.commit().await?;

    tracing::debug!(
        %user_id,
        correct = outcome.correct,
        m_value = ?ring.node(answered).map(|node| node.m_value),
        head = ring.head(),
        "answer recorded"
    );

    Ok(outcome)
}

pub async fn progress(pool: &PgPool, user_id: Uuid) -> Result<Vec<ProgressEntry>, ApiError> {
    let mut tx = pool.begin().await?;
    let (ring, catalog) = load_locked(&mut tx, user_id).await?;
    let entries = report(&ring, &catalog)?;
    tx.commit().await?;

    Ok(entries)
}

pub async fn reset(pool: &PgPool, user_id: Uuid) -> Result<(), ApiError> {
    let mut tx = pool.begin().await?;
    let (mut ring, _) = load_locked(&mut tx, user_id).await?;

    reset_session(&mut ring);
    save(&mut tx, user_id, &ring).await?;
    tx.commit().await?;

    tracing::debug!(%user_id, "session counters reset");
    Ok(())
}
