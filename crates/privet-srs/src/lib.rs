//! Question scheduling for Privet.
//!
//! Every user owns a [`QuestionRing`]: one [`QuestionNode`] per catalog word,
//! linked into a single cycle through `next` indices, with a `head` marking
//! the word that is currently due. Answering the head word moves it further
//! along the ring, proportionally to how well it is known (see
//! [`scheduler::submit_answer`]).
//!
//! The crate is pure: callers load a ring and a [`WordCatalog`], apply one of
//! the operations below and persist the result. Callers are also responsible
//! for serializing operations on the same user's ring.

pub mod catalog;
pub mod error;
pub mod normalize;
pub mod progress;
pub mod ring;
pub mod scheduler;

pub use catalog::{Word, WordCatalog, WordId};
pub use error::SrsError;
pub use progress::{DueQuestion, ProgressEntry, due_question, report};
pub use ring::{QuestionNode, QuestionRing};
pub use scheduler::{AnswerOutcome, MAX_INTERVAL, next_interval, reset_session, submit_answer};
