//! Conversions between stored rows and the in-memory ring and catalog.

use privet_db::models::{QuestionRow, WordRow};
use privet_srs::{QuestionNode, QuestionRing, SrsError, Word, WordCatalog};

use crate::error::ApiError;

pub fn catalog_from_rows(rows: Vec<WordRow>) -> WordCatalog {
    rows.into_iter()
        .map(|row| Word {
            id: row.id,
            prompt: row.prompt,
            translit: row.translit,
            translation: row.translation,
        })
        .collect()
}

/// Node index as stored in an `INTEGER` column
pub fn to_position(index: usize) -> Result<i32, ApiError> {
    i32::try_from(index)
        .map_err(|_| ApiError::Internal(anyhow::anyhow!("ring index {index} exceeds INTEGER")))
}

fn to_index(position: i32) -> Result<usize, SrsError> {
    usize::try_from(position)
        .map_err(|_| SrsError::CorruptRing(format!("negative position {position}")))
}

pub fn ring_to_rows(ring: &QuestionRing) -> Result<Vec<QuestionRow>, ApiError> {
    ring.nodes()
        .iter()
        .enumerate()
        .map(|(index, node)| {
            Ok(QuestionRow {
                position: to_position(index)?,
                word_id: node.word_id,
                score: node.score,
                attempts: node.attempts,
                session_score: node.session_score,
                session_attempts: node.session_attempts,
                m_value: node.m_value,
                next_position: to_position(node.next)?,
            })
        })
        .collect()
}

/// Rebuild and validate a ring from rows ordered by position.
pub fn ring_from_rows(rows: Vec<QuestionRow>, head: i32) -> Result<QuestionRing, ApiError> {
    let nodes = rows
        .into_iter()
        .enumerate()
        .map(|(index, row)| {
            if to_index(row.position)? != index {
                return Err(SrsError::CorruptRing(format!(
                    "expected position {index}, found {}",
                    row.position
                )));
            }

            Ok(QuestionNode {
                word_id: row.word_id,
                score: row.score,
                attempts: row.attempts,
                session_score: row.session_score,
                session_attempts: row.session_attempts,
                m_value: row.m_value,
                next: to_index(row.next_position)?,
            })
        })
        .collect::<Result<Vec<_>, SrsError>>()?;

    Ok(QuestionRing::from_parts(nodes, to_index(head)?)?)
}
