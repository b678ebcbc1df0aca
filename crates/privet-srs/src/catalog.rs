//! Read-only word catalog the rings point into.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::SrsError;

/// Stable identifier of a catalog word.
pub type WordId = Uuid;

/// A vocabulary item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub id: WordId,
    /// Word shown to the learner
    pub prompt: String,
    /// Transliteration of the prompt
    pub translit: String,
    /// Canonical answer
    pub translation: String,
}

/// Words in catalog order, indexed by id.
///
/// Lookups always go through the id index, never through positions, so a
/// ring stays valid even if the catalog is reloaded in a different order.
#[derive(Debug, Clone, Default)]
pub struct WordCatalog {
    words: Vec<Word>,
    index: HashMap<WordId, usize>,
}

impl WordCatalog {
    /// Build a catalog. Repeated ids keep their first occurrence.
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        let mut catalog = Self::default();
        for word in words {
            if catalog.index.contains_key(&word.id) {
                continue;
            }
            catalog.index.insert(word.id, catalog.words.len());
            catalog.words.push(word);
        }
        catalog
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, id: &WordId) -> Option<&Word> {
        self.index.get(id).map(|&position| &self.words[position])
    }

    /// Like [`get`](Self::get), but a missing word is an error.
    pub fn resolve(&self, id: &WordId) -> Result<&Word, SrsError> {
        self.get(id).ok_or(SrsError::NotFound(*id))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }
}

impl FromIterator<Word> for WordCatalog {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a WordCatalog {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
