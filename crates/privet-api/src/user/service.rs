use privet_db::repositories::{question as question_repo, user as user_repo, word as word_repo};
use privet_srs::QuestionRing;
use sqlx::PgPool;
use uuid::Uuid;

use super::model::{RegisterRequest, UserResponse};
use crate::{auth::service::hash_password, error::ApiError, words::store};

fn is_username_taken(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.is_unique_violation() && db_err.constraint() == Some("users_username_key")
        }
        _ => false,
    }
}

/// Create the account and its question ring in one transaction.
///
/// The ring covers the whole catalog as it is at registration time.
pub async fn register(
    pool: &PgPool,
    request: RegisterRequest,
    bcrypt_cost: u32,
) -> Result<UserResponse, ApiError> {
    let password_hash = hash_password(request.password, bcrypt_cost).await?;

    let mut tx = pool.begin().await?;

    let user_id = user_repo::create_user(
        &mut *tx,
        &request.name,
        &request.username,
        &password_hash,
    )
    .await
    .map_err(|e| {
        if is_username_taken(&e) {
            ApiError::validation("username", "Username already taken")
        } else {
            ApiError::Database(e)
        }
    })?;

    let catalog = store::catalog_from_rows(word_repo::list_words(&mut *tx).await?);
    let ring = QuestionRing::new(&catalog);
    question_repo::insert_ring(&mut *tx, user_id, &store::ring_to_rows(&ring)?).await?;
    user_repo::update_head(&mut *tx, user_id, store::to_position(ring.head())?).await?;

    tx.commit().await?;

    tracing::info!(%user_id, questions = ring.len(), "user registered");

    Ok(UserResponse {
        id: user_id,
        name: request.name,
        username: request.username,
    })
}

pub async fn profile(pool: &PgPool, user_id: Uuid) -> Result<UserResponse, ApiError> {
    let profile = user_repo::find_profile_by_id(pool, user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(UserResponse {
        id: profile.id,
        name: profile.name,
        username: profile.username,
    })
}
