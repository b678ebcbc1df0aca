use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Catalog word row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct WordRow {
    pub id: Uuid,
    /// Word shown to the learner (e.g. Russian)
    pub prompt: String,
    /// Latin transliteration of the prompt
    pub translit: String,
    /// Canonical answer (e.g. English)
    pub translation: String,
}

/// New catalog word, used when seeding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewWord {
    pub prompt: String,
    pub translit: String,
    pub translation: String,
}

/// Data needed to check a login
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserCredentials {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
}

/// Public user fields
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

/// One question of a user's ring.
///
/// `position` is the node index inside the ring and `next_position` the
/// index of the node that follows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct QuestionRow {
    pub position: i32,
    pub word_id: Uuid,
    pub score: i32,
    pub attempts: i32,
    pub session_score: i32,
    pub session_attempts: i32,
    pub m_value: i32,
    pub next_position: i32,
}
