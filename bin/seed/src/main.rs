//! Replace the word catalog.
//!
//! Usage: `seed [words.json]`. Without an argument the bundled catalog is
//! used. Every user (and with them every question ring) is removed first,
//! since rings reference catalog words.

use anyhow::{Context, bail};
use privet_db::{models::NewWord, repositories::word as word_repo};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

const BUNDLED_WORDS: &str = include_str!("../data/words.json");

#[derive(Debug, Deserialize)]
struct SeedConfig {
    database_url: String,
}

fn parse_words(json: &str) -> anyhow::Result<Vec<NewWord>> {
    let words: Vec<NewWord> = serde_json::from_str(json).context("invalid word list")?;

    if let Some((index, _)) = words
        .iter()
        .enumerate()
        .find(|(_, w)| w.prompt.trim().is_empty() || w.translation.trim().is_empty())
    {
        bail!("word #{index} has an empty prompt or translation");
    }

    Ok(words)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn")),
        )
        .init();

    let config: SeedConfig = envy::from_env().context("DATABASE_URL must be set")?;

    let words = match std::env::args().nth(1) {
        Some(path) => {
            let json = tokio::fs::read_to_string(&path)
                .await
                .with_context(|| format!("failed to read {path}"))?;
            parse_words(&json)?
        }
        None => parse_words(BUNDLED_WORDS)?,
    };

    let pool = privet_db::create_pool(&config.database_url, 1).await?;
    privet_db::ensure_db_and_migrate(&config.database_url, &pool).await?;

    let mut tx = pool.begin().await?;
    tracing::info!("Removing users, question rings and words");
    word_repo::wipe_catalog_and_users(&mut *tx).await?;
    let inserted = word_repo::insert_words(&mut *tx, &words).await?;
    tx.commit().await?;

    tracing::info!(inserted, "Catalog seeded");
    Ok(())
}
