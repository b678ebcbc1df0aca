use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::models::{NewWord, WordRow};

/// Every catalog word, in catalog order.
pub async fn list_words<'e, E>(executor: E) -> Result<Vec<WordRow>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, prompt, translit, translation
            FROM words
            ORDER BY ordinal
        "#,
    )
    .fetch_all(executor)
    .await
}

/// Words referenced by one user's ring.
pub async fn list_words_for_user<'e, E>(
    executor: E,
    user_id: Uuid,
) -> Result<Vec<WordRow>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT w.id, w.prompt, w.translit, w.translation
            FROM questions q
            JOIN words w ON w.id = q.word_id
            WHERE q.user_id = $1
            ORDER BY q.position
        "#,
    )
    .bind(user_id)
    .fetch_all(executor)
    .await
}

/// Insert words in the given order and return how many were written.
pub async fn insert_words<'e, E>(executor: E, words: &[NewWord]) -> Result<u64, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let prompts: Vec<&str> = words.iter().map(|w| w.prompt.as_str()).collect();
    let translits: Vec<&str> = words.iter().map(|w| w.translit.as_str()).collect();
    let translations: Vec<&str> = words.iter().map(|w| w.translation.as_str()).collect();

    let result = sqlx::query(
        // language=PostgreSQL
        r#"
            INSERT INTO words (prompt, translit, translation)
            SELECT t.prompt, t.translit, t.translation
            FROM UNNEST($1::text[], $2::text[], $3::text[])
                WITH ORDINALITY AS t(prompt, translit, translation, n)
            ORDER BY n
        "#,
    )
    .bind(&prompts)
    .bind(&translits)
    .bind(&translations)
    .execute(executor)
    .await?;
    Ok(result.rows_affected())
}

/// Remove the catalog together with every user (and therefore every ring).
pub async fn wipe_catalog_and_users<'e, E>(executor: E) -> Result<(), sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query(
        // language=PostgreSQL
        r#"
            TRUNCATE questions, users, words RESTART IDENTITY
        "#,
    )
    .execute(executor)
    .await?;
    Ok(())
}
