//! Answer processing: scoring, interval update and repositioning.

use serde::{Deserialize, Serialize};

use crate::{
    catalog::WordCatalog,
    error::SrsError,
    normalize::answers_match,
    ring::{QuestionNode, QuestionRing},
};

/// Upper bound for `m_value`. Keeps doubling inside an `INTEGER` column.
pub const MAX_INTERVAL: i32 = 1 << 30;

/// Result of answering the due question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOutcome {
    /// Canonical translation of the word that was asked
    pub correct_answer: String,
    pub correct: bool,
}

/// Interval after an answer: doubled when correct, back to 1 otherwise.
pub fn next_interval(m_value: i32, correct: bool) -> i32 {
    if correct {
        m_value.saturating_mul(2).min(MAX_INTERVAL)
    } else {
        1
    }
}

impl QuestionNode {
    fn record_answer(&mut self, correct: bool) {
        let point = i32::from(correct);
        self.attempts += 1;
        self.session_attempts += 1;
        self.score += point;
        self.session_score += point;
        self.m_value = next_interval(self.m_value, correct);
    }
}

/// Score `raw_answer` against the head word and reschedule it.
///
/// The head node is reinserted after the node reached by walking `m_value`
/// hops from it along the full ring (wrapping, and possibly passing over
/// itself), and the head advances to the node that followed it.
pub fn submit_answer(
    ring: &mut QuestionRing,
    catalog: &WordCatalog,
    raw_answer: &str,
) -> Result<AnswerOutcome, SrsError> {
    let current_index = ring.head();
    let current = ring.head_node()?;
    let successor = current.next;
    let word = catalog.resolve(&current.word_id)?;
    let correct = answers_match(raw_answer, &word.translation);

    let predecessor = ring.predecessor(current_index).ok_or_else(|| {
        SrsError::CorruptRing(format!("node {current_index} has no predecessor"))
    })?;

    let node = &mut ring.nodes_mut()[current_index];
    node.record_answer(correct);
    let m_value = node.m_value;

    if successor != current_index {
        splice(ring, current_index, predecessor, m_value);
    }
    ring.advance_head(successor);

    Ok(AnswerOutcome {
        correct_answer: word.translation.clone(),
        correct,
    })
}

/// Move `current` to just after the node `m_value` hops ahead of it.
///
/// The target is found on the full ring before `current` is unlinked. A walk
/// that ends on `current` itself leaves the node where it is.
fn splice(ring: &mut QuestionRing, current: usize, predecessor: usize, m_value: i32) {
    // One cycle of `len` nodes: whole laps can be skipped.
    let hops = usize::try_from(m_value).unwrap_or(0) % ring.len();

    let mut target = current;
    for _ in 0..hops {
        target = ring.nodes()[target].next;
    }
    if target == current {
        target = predecessor;
    }

    let successor = ring.nodes()[current].next;
    ring.relink(predecessor, successor);

    let after_target = ring.nodes()[target].next;
    ring.relink(current, after_target);
    ring.relink(target, current);
}

/// Zero the session counters of every node.
pub fn reset_session(ring: &mut QuestionRing) {
    for node in ring.nodes_mut() {
        node.session_score = 0;
        node.session_attempts = 0;
    }
}
