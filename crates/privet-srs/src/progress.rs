//! Read-only views over a ring joined with catalog content.

use serde::{Deserialize, Serialize};

use crate::{
    catalog::{WordCatalog, WordId},
    error::SrsError,
    ring::QuestionRing,
};

/// The question a user should answer next
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DueQuestion {
    pub word_id: WordId,
    pub prompt: String,
    pub translit: String,
}

/// Per-word statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressEntry {
    pub word_id: WordId,
    pub prompt: String,
    pub translit: String,
    pub translation: String,
    pub score: i32,
    pub attempts: i32,
    pub session_score: i32,
    pub session_attempts: i32,
}

/// Catalog content of the head node.
pub fn due_question(ring: &QuestionRing, catalog: &WordCatalog) -> Result<DueQuestion, SrsError> {
    let node = ring.head_node()?;
    let word = catalog.resolve(&node.word_id)?;

    Ok(DueQuestion {
        word_id: word.id,
        prompt: word.prompt.clone(),
        translit: word.translit.clone(),
    })
}

/// One entry per node, in storage order.
pub fn report(ring: &QuestionRing, catalog: &WordCatalog) -> Result<Vec<ProgressEntry>, SrsError> {
    ring.nodes()
        .iter()
        .map(|node| {
            let word = catalog.resolve(&node.word_id)?;
            Ok(ProgressEntry {
                word_id: word.id,
                prompt: word.prompt.clone(),
                translit: word.translit.clone(),
                translation: word.translation.clone(),
                score: node.score,
                attempts: node.attempts,
                session_score: node.session_score,
                session_attempts: node.session_attempts,
            })
        })
        .collect()
}
