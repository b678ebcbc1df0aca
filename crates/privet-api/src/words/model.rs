use privet_srs::{AnswerOutcome, DueQuestion, ProgressEntry};
use serde::Serialize;

/// The word to answer next
#[derive(Debug, Clone, Serialize)]
pub struct QuestionResponse {
    pub word: String,
    pub translit: String,
}

impl From<DueQuestion> for QuestionResponse {
    fn from(question: DueQuestion) -> Self {
        Self {
            word: question.prompt,
            translit: question.translit,
        }
    }
}

/// Feedback for a submitted answer. `answer` is the canonical translation.
#[derive(Debug, Clone, Serialize)]
pub struct AnswerResponse {
    pub answer: String,
    pub correct: bool,
}

impl From<AnswerOutcome> for AnswerResponse {
    fn from(outcome: AnswerOutcome) -> Self {
        Self {
            answer: outcome.correct_answer,
            correct: outcome.correct,
        }
    }
}

/// One question of the progress report, keyed the way clients read it
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionProgress {
    pub russian: String,
    pub translit: String,
    pub english: String,
    pub score: i32,
    pub attempts: i32,
    pub session_score: i32,
    pub session_attempts: i32,
}

impl From<ProgressEntry> for QuestionProgress {
    fn from(entry: ProgressEntry) -> Self {
        Self {
            russian: entry.prompt,
            translit: entry.translit,
            english: entry.translation,
            score: entry.score,
            attempts: entry.attempts,
            session_score: entry.session_score,
            session_attempts: entry.session_attempts,
        }
    }
}

/// Every question of the ring, in storage order
#[derive(Debug, Clone, Serialize)]
pub struct ProgressResponse {
    pub questions: Vec<QuestionProgress>,
}

impl From<Vec<ProgressEntry>> for ProgressResponse {
    fn from(entries: Vec<ProgressEntry>) -> Self {
        Self {
            questions: entries.into_iter().map(Into::into).collect(),
        }
    }
}
