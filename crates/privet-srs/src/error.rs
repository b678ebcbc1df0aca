use thiserror::Error;

use crate::catalog::WordId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SrsError {
    #[error("question ring is empty")]
    EmptyRing,
    #[error("word {0} not found in catalog")]
    NotFound(WordId),
    #[error("corrupt question ring: {0}")]
    CorruptRing(String),
}
