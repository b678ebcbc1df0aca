use privet_db::{models::UserCredentials, repositories::user as user_repo};
use sqlx::PgPool;

use crate::error::ApiError;

/// Hash a password with bcrypt on the blocking pool
pub async fn hash_password(password: String, cost: u32) -> Result<String, ApiError> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| ApiError::Internal(e.into()))?
        .map_err(|e| ApiError::Internal(e.into()))
}

/// Check a password against a stored bcrypt hash on the blocking pool
pub async fn verify_password(password: String, hash: String) -> Result<bool, ApiError> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| ApiError::Internal(e.into()))?
        .map_err(|e| ApiError::Internal(e.into()))
}

/// Look up `username` and check `password`.
///
/// Unknown users and wrong passwords produce the same error.
pub async fn authenticate(
    pool: &PgPool,
    username: &str,
    password: &str,
) -> Result<UserCredentials, ApiError> {
    let invalid = || ApiError::Auth("Incorrect username or password".to_string());

    let credentials = user_repo::find_credentials_by_username(pool, username)
        .await?
        .ok_or_else(invalid)?;

    if !verify_password(password.to_string(), credentials.password_hash.clone()).await? {
        return Err(invalid());
    }

    Ok(credentials)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_and_verify() {
        let hash = hash_password("correct horse battery".to_string(), 4)
            .await
            .expect("hashing should succeed");

        assert!(
            verify_password("correct horse battery".to_string(), hash.clone())
                .await
                .unwrap()
        );
        assert!(
            !verify_password("wrong horse battery".to_string(), hash)
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_verify_against_malformed_hash() {
        let result = verify_password("password".to_string(), "not-a-hash".to_string()).await;
        assert!(matches!(result, Err(ApiError::Internal(_))));
    }
}
