use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::models::QuestionRow;

/// Insert a freshly built ring for `user_id`.
pub async fn insert_ring<'e, E>(
    executor: E,
    user_id: Uuid,
    rows: &[QuestionRow],
) -> Result<(), sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let positions: Vec<i32> = rows.iter().map(|r| r.position).collect();
    let word_ids: Vec<Uuid> = rows.iter().map(|r| r.word_id).collect();
    let m_values: Vec<i32> = rows.iter().map(|r| r.m_value).collect();
    let next_positions: Vec<i32> = rows.iter().map(|r| r.next_position).collect();

    sqlx::query(
        // language=PostgreSQL
        r#"
            INSERT INTO questions (user_id, position, word_id, m_value, next_position)
            SELECT $1, t.position, t.word_id, t.m_value, t.next_position
            FROM UNNEST($2::int4[], $3::uuid[], $4::int4[], $5::int4[])
                AS t(position, word_id, m_value, next_position)
        "#,
    )
    .bind(user_id)
    .bind(&positions)
    .bind(&word_ids)
    .bind(&m_values)
    .bind(&next_positions)
    .execute(executor)
    .await?;
    Ok(())
}

/// Every question of the user's ring, ordered by position.
pub async fn load_ring<'e, E>(executor: E, user_id: Uuid) -> Result<Vec<QuestionRow>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT position, word_id, score, attempts, session_score,
                   session_attempts, m_value, next_position
            FROM questions
            WHERE user_id = $1
            ORDER BY position
        "#,
    )
    .bind(user_id)
    .fetch_all(executor)
    .await
}

/// Write back counters and links of every row in one statement.
///
/// Word assignments never change after creation, so `word_id` is not updated.
pub async fn save_ring<'e, E>(
    executor: E,
    user_id: Uuid,
    rows: &[QuestionRow],
) -> Result<u64, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let positions: Vec<i32> = rows.iter().map(|r| r.position).collect();
    let scores: Vec<i32> = rows.iter().map(|r| r.score).collect();
    let attempts: Vec<i32> = rows.iter().map(|r| r.attempts).collect();
    let session_scores: Vec<i32> = rows.iter().map(|r| r.session_score).collect();
    let session_attempts: Vec<i32> = rows.iter().map(|r| r.session_attempts).collect();
    let m_values: Vec<i32> = rows.iter().map(|r| r.m_value).collect();
    let next_positions: Vec<i32> = rows.iter().map(|r| r.next_position).collect();

    let result = sqlx::query(
        // language=PostgreSQL
        r#"
            UPDATE questions q
            SET score = t.score,
                attempts = t.attempts,
                session_score = t.session_score,
                session_attempts = t.session_attempts,
                m_value = t.m_value,
                next_position = t.next_position
            FROM UNNEST(
                $2::int4[], $3::int4[], $4::int4[], $5::int4[],
                $6::int4[], $7::int4[], $8::int4[]
            ) AS t(position, score, attempts, session_score, session_attempts, m_value, next_position)
            WHERE q.user_id = $1 AND q.position = t.position
        "#,
    )
    .bind(user_id)
    .bind(&positions)
    .bind(&scores)
    .bind(&attempts)
    .bind(&session_scores)
    .bind(&session_attempts)
    .bind(&m_values)
    .bind(&next_positions)
    .execute(executor)
    .await?;
    Ok(result.rows_affected())
}
