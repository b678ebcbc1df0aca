//! Answer normalization.
//!
//! Answers are compared after trimming, Unicode NFC composition and
//! lowercasing. Nothing else is forgiven: punctuation, inner spacing and
//! accents must match the canonical translation.

use unicode_normalization::UnicodeNormalization;

/// Normalize a typed answer (or a canonical translation) for comparison.
pub fn normalize_answer(s: &str) -> String {
    s.trim().nfc().collect::<String>().to_lowercase()
}

/// Whether `answer` matches `expected` once both are normalized.
pub fn answers_match(answer: &str, expected: &str) -> bool {
    normalize_answer(answer) == normalize_answer(expected)
}
